//! Tracked anchor identities and per-tick pose samples.

mod joint;
mod pose;

pub use joint::{AnchorJoint, Finger, Side};
pub use pose::AnchorPose;
