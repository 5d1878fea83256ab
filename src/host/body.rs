use glam::{Quat, Vec3};

/// One physics-driven body owned by the host's solver.
pub trait PhysicsBody {
    fn position(&self) -> Vec3;

    /// Kinematic, velocity-respecting move toward `target`. Never a
    /// teleport: the solver must stay free to resolve interpenetration.
    fn move_to(&mut self, target: Vec3);

    fn set_rotation(&mut self, rotation: Quat);
}
