use glam::{Quat, Vec3};
use hand_follow::host::{BoneTracking, PhysicsBody, SceneNode, UserContext};
use hand_follow::{AnchorJoint, BindingSet, FollowConfig, FollowController, HostEvent, Side};

const TICK_RATE: f32 = 50.0;
const RUN_SECONDS: f32 = 5.0;

struct SimBody {
    position: Vec3,
    rotation: Quat,
}

impl PhysicsBody for SimBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn move_to(&mut self, target: Vec3) {
        self.position = target;
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }
}

struct SimNode {
    active: bool,
    layer: u32,
    scale: Vec3,
    body: Option<SimBody>,
    children: Vec<SimNode>,
}

impl SimNode {
    fn collider() -> Self {
        // a child shell under each collider so layer tagging has a subtree
        let shell = Self {
            active: true,
            layer: 0,
            scale: Vec3::ONE,
            body: None,
            children: Vec::new(),
        };

        Self {
            active: true,
            layer: 0,
            scale: Vec3::ONE,
            body: Some(SimBody {
                position: Vec3::ZERO,
                rotation: Quat::IDENTITY,
            }),
            children: vec![shell],
        }
    }
}

impl SceneNode for SimNode {
    type Body = SimBody;

    fn body_mut(&mut self) -> Option<&mut SimBody> {
        self.body.as_mut()
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn set_layer(&mut self, layer: u32) {
        self.layer = layer;
    }

    fn local_scale(&self) -> Vec3 {
        self.scale
    }

    fn set_local_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut Self> {
        self.children.get_mut(index)
    }
}

struct SimHost {
    in_vr: bool,
    eye_height: f32,
}

impl UserContext for SimHost {
    type UserId = u32;

    fn local_user(&self) -> Option<u32> {
        Some(1)
    }

    fn is_valid(&self, user: u32) -> bool {
        user == 1
    }

    fn is_in_vr(&self, _user: u32) -> bool {
        self.in_vr
    }

    fn avatar_eye_height(&self, _user: u32) -> f32 {
        self.eye_height
    }
}

/// Scripted bone source: hands sweep a slow circle, with a short full
/// dropout window partway through the run.
struct SimTracking {
    time: f32,
}

impl BoneTracking<u32> for SimTracking {
    fn bone_position(&self, _user: u32, joint: AnchorJoint) -> Vec3 {
        if (2.0..2.4).contains(&self.time) {
            return Vec3::ZERO;
        }

        let sweep = self.time * 1.5;
        let side_x = match joint.side() {
            Side::Left => -0.25,
            Side::Right => 0.25,
        };
        let spread = joint.index() as f32 * 0.015;

        let mut target = Vec3::new(
            side_x + sweep.cos() * 0.35 + spread,
            1.2 + sweep.sin() * 0.2,
            0.4,
        );
        if joint.is_fingertip() {
            target += Vec3::new(0.0, 0.08, 0.1);
        }
        target
    }

    fn bone_rotation(&self, _user: u32, _joint: AnchorJoint) -> Quat {
        Quat::from_rotation_y(self.time * 0.8)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let mut bindings = BindingSet::new();
    for joint in AnchorJoint::ALL {
        bindings = bindings.bind(joint, SimNode::collider());
    }

    let config = FollowConfig::default()
        .with_isolation_layer(18)
        .with_follow_speed(50.0);
    let mut controller = FollowController::new(bindings, config);

    let mut host = SimHost {
        in_vr: true,
        eye_height: 1.7,
    };
    let mut tracking = SimTracking { time: 0.0 };

    if let Err(err) = controller.initialize(&host) {
        log::error!("initialization failed: {err}");
        return;
    }

    let dt = 1.0 / TICK_RATE;
    let steps = (TICK_RATE * RUN_SECONDS) as usize;

    for step in 0..steps {
        tracking.time = step as f32 * dt;
        controller.tick(&host, &tracking, dt);

        if step == steps / 2 {
            host.eye_height = 1.9;
            controller.handle_event(&host, HostEvent::AvatarChanged(1));
        }

        if step % 25 == 0 {
            let node = controller.slot(AnchorJoint::Hand(Side::Right)).unwrap().node();
            let body = node.body.as_ref().unwrap();
            log::info!(
                "t={:.2}s right hand at ({:.3}, {:.3}, {:.3})",
                tracking.time,
                body.position.x,
                body.position.y,
                body.position.z
            );
        }
    }

    let hand = controller.slot(AnchorJoint::Hand(Side::Left)).unwrap().node();
    let body = hand.body.as_ref().unwrap();
    log::info!(
        "left hand after run: active={} layer={} scale={} rotation={}",
        hand.active,
        hand.layer,
        hand.scale,
        body.rotation
    );
    log::info!("final avatar scale: {}", controller.state().avatar_scale);
}
