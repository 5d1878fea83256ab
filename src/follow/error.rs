use thiserror::Error;

use crate::anchor::AnchorJoint;

/// Fatal initialization failures. Any of these leaves the controller
/// permanently inert: no partial activation, every later tick is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InitError {
    #[error("no valid local user")]
    InvalidUser,
    #[error("required binding missing for {0:?}")]
    MissingBinding(AnchorJoint),
    #[error("binding for {0:?} exposes no physics body")]
    MissingPhysicsHandle(AnchorJoint),
}
