use glam::{Quat, Vec3};

use crate::anchor::{AnchorJoint, AnchorPose};

/// Read-only bone tracking queries. Pure reads, callable any number of
/// times per tick.
pub trait BoneTracking<U> {
    /// World position of a tracked joint. The zero vector means the joint
    /// has no sample this tick.
    fn bone_position(&self, user: U, joint: AnchorJoint) -> Vec3;

    fn bone_rotation(&self, user: U, joint: AnchorJoint) -> Quat;

    fn sample(&self, user: U, joint: AnchorJoint) -> AnchorPose
    where
        U: Copy,
    {
        AnchorPose::new(
            self.bone_position(user, joint),
            self.bone_rotation(user, joint),
        )
    }
}
