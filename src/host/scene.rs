use glam::Vec3;

use super::body::PhysicsBody;

/// A node in the host's scene graph, with same-typed children.
pub trait SceneNode: Sized {
    type Body: PhysicsBody;

    /// The physics body attached to this node, if any.
    fn body_mut(&mut self) -> Option<&mut Self::Body>;

    fn set_active(&mut self, active: bool);

    /// Collision layer id. Layer 0 is the host's default layer.
    fn set_layer(&mut self, layer: u32);

    fn local_scale(&self) -> Vec3;

    fn set_local_scale(&mut self, scale: Vec3);

    fn child_count(&self) -> usize;

    fn child_mut(&mut self, index: usize) -> Option<&mut Self>;
}

/// Tags `node` and every descendant with `layer`.
pub fn tag_layer_recursive<N: SceneNode>(node: &mut N, layer: u32) {
    node.set_layer(layer);
    for i in 0..node.child_count() {
        if let Some(child) = node.child_mut(i) {
            tag_layer_recursive(child, layer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    struct StubBody;

    impl PhysicsBody for StubBody {
        fn position(&self) -> Vec3 {
            Vec3::ZERO
        }
        fn move_to(&mut self, _target: Vec3) {}
        fn set_rotation(&mut self, _rotation: Quat) {}
    }

    struct StubNode {
        layer: u32,
        children: Vec<StubNode>,
    }

    impl StubNode {
        fn leaf() -> Self {
            Self {
                layer: 0,
                children: Vec::new(),
            }
        }
    }

    impl SceneNode for StubNode {
        type Body = StubBody;

        fn body_mut(&mut self) -> Option<&mut StubBody> {
            None
        }
        fn set_active(&mut self, _active: bool) {}
        fn set_layer(&mut self, layer: u32) {
            self.layer = layer;
        }
        fn local_scale(&self) -> Vec3 {
            Vec3::ONE
        }
        fn set_local_scale(&mut self, _scale: Vec3) {}
        fn child_count(&self) -> usize {
            self.children.len()
        }
        fn child_mut(&mut self, index: usize) -> Option<&mut Self> {
            self.children.get_mut(index)
        }
    }

    #[test]
    fn tagging_reaches_every_descendant() {
        let mut root = StubNode::leaf();
        let mut mid = StubNode::leaf();
        mid.children.push(StubNode::leaf());
        mid.children.push(StubNode::leaf());
        root.children.push(mid);
        root.children.push(StubNode::leaf());

        tag_layer_recursive(&mut root, 18);

        assert_eq!(root.layer, 18);
        for child in &root.children {
            assert_eq!(child.layer, 18);
            for grandchild in &child.children {
                assert_eq!(grandchild.layer, 18);
            }
        }
    }
}
