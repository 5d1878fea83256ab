use crate::anchor::AnchorJoint;

/// Scene nodes to drive, one optional slot per tracked joint.
///
/// Filled by the embedding context before initialization; both hand slots
/// are mandatory, fingertip slots may stay empty.
pub struct BindingSet<N> {
    slots: [Option<N>; AnchorJoint::COUNT],
}

impl<N> BindingSet<N> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    pub fn bind(mut self, joint: AnchorJoint, node: N) -> Self {
        self.slots[joint.index()] = Some(node);
        self
    }

    pub fn contains(&self, joint: AnchorJoint) -> bool {
        self.slots[joint.index()].is_some()
    }

    pub(crate) fn take(&mut self, joint: AnchorJoint) -> Option<N> {
        self.slots[joint.index()].take()
    }
}

impl<N> Default for BindingSet<N> {
    fn default() -> Self {
        Self::new()
    }
}
