//! # hand-follow
//!
//! A pose-follower control loop that drives secondary physics bodies
//! ("colliders") along a user's tracked hand and fingertip bones, with
//! avatar scale compensation and VR/desktop feature gating.
//!
//! ## Features
//! - Fixed-rate exponential smoothing toward tracked bone targets
//! - Closed set of 12 anchors: two hands plus ten fingertips
//! - Avatar scale compensation from the host-reported eye height
//! - Collision-layer isolation of follower bodies from the player
//! - Per-body dropout handling (zero-vector tracking sentinel)
//!
//! ## Example
//! ```rust,ignore
//! use hand_follow::{AnchorJoint, BindingSet, FollowConfig, FollowController, Side};
//!
//! let bindings = BindingSet::new()
//!     .bind(AnchorJoint::Hand(Side::Left), left_hand_node)
//!     .bind(AnchorJoint::Hand(Side::Right), right_hand_node);
//! let config = FollowConfig::default().with_isolation_layer(18);
//!
//! let mut controller = FollowController::new(bindings, config);
//! controller.initialize(&host)?;
//!
//! // inside the host's fixed-step loop
//! controller.tick(&host, &tracking, dt);
//! ```

pub mod anchor;
pub mod follow;
pub mod host;
pub mod math;

pub use anchor::{AnchorJoint, AnchorPose, Finger, Side};
pub use follow::{
    avatar_scale, BindingSet, ControllerState, FollowConfig, FollowController, FollowerSlot,
    InitError, SlotPhase,
};
pub use host::{BoneTracking, HostEvent, PhysicsBody, SceneNode, UserContext};
pub use math::{follow_toward, lerp_factor};
