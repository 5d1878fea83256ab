use glam::{Quat, Vec3};

/// A single bone sample from the tracking source, valid for one tick only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl AnchorPose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// The host reports an exactly-zero position when the bone has no sample
    /// this tick. A bone genuinely at the world origin is indistinguishable
    /// from a dropout; the sentinel is kept as the host defines it.
    pub fn is_tracked(&self) -> bool {
        self.position != Vec3::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_position_reads_as_untracked() {
        let lost = AnchorPose::new(Vec3::ZERO, Quat::from_rotation_y(1.0));
        assert!(!lost.is_tracked());

        let held = AnchorPose::new(Vec3::new(0.0, 1.2, 0.3), Quat::IDENTITY);
        assert!(held.is_tracked());
    }
}
