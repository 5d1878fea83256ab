//! Host engine collaborator traits
//!
//! The controller never talks to the engine directly; everything it needs
//! from the scene graph, physics solver, tracking source, and session
//! context comes in through these seams.

pub mod body;
pub mod event;
pub mod scene;
pub mod tracking;
pub mod user;

pub use body::PhysicsBody;
pub use event::HostEvent;
pub use scene::{tag_layer_recursive, SceneNode};
pub use tracking::BoneTracking;
pub use user::UserContext;
