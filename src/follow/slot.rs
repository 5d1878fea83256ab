use glam::Vec3;

use crate::anchor::AnchorJoint;

/// Slot lifecycle. `Active` and `Disabled` are both terminal: once a slot
/// is gated out it is never repositioned or rescaled again this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotPhase {
    Uninitialized,
    Active,
    Disabled,
}

/// One bound follower body and the state the controller keeps for it.
pub struct FollowerSlot<N> {
    pub(crate) joint: AnchorJoint,
    pub(crate) node: N,
    /// Local scale at initialization; scale factors multiply this, never
    /// the node's current scale.
    pub(crate) baseline_scale: Vec3,
    pub(crate) phase: SlotPhase,
}

impl<N> FollowerSlot<N> {
    pub(crate) fn new(joint: AnchorJoint, node: N) -> Self {
        Self {
            joint,
            node,
            baseline_scale: Vec3::ONE,
            phase: SlotPhase::Uninitialized,
        }
    }

    pub fn joint(&self) -> AnchorJoint {
        self.joint
    }

    pub fn phase(&self) -> SlotPhase {
        self.phase
    }

    pub fn baseline_scale(&self) -> Vec3 {
        self.baseline_scale
    }

    pub fn node(&self) -> &N {
        &self.node
    }
}
