//! Math utilities module
//!
//! Exponential smoothing helpers plus convenient re-exports from glam.

mod smoothing;

pub use smoothing::{follow_toward, lerp_factor};

// Re-export commonly used glam types
pub use glam::{Quat, Vec3};
