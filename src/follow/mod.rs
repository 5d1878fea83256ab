//! Follower controller module
//!
//! The bindings registry, configuration, and the fixed-rate control loop
//! that drives follower bodies toward their tracked anchors.

mod bindings;
mod config;
mod controller;
mod error;
mod scale;
mod slot;

pub use bindings::BindingSet;
pub use config::FollowConfig;
pub use controller::{ControllerState, FollowController};
pub use error::InitError;
pub use scale::{avatar_scale, MAX_AVATAR_SCALE, MIN_AVATAR_SCALE, REFERENCE_EYE_HEIGHT};
pub use slot::{FollowerSlot, SlotPhase};
