/// Tuning and gating knobs, fixed before the session starts.
#[derive(Debug, Clone, Copy)]
pub struct FollowConfig {
    /// Smoothing aggressiveness; the per-tick lerp factor is
    /// `follow_speed * dt`, clamped to 1.
    pub follow_speed: f32,
    /// Collision layer for follower bodies and their descendants.
    /// 0 means unconfigured: isolation is skipped with a warning.
    pub isolation_layer: u32,
    /// Keep hand followers off entirely for desktop users.
    pub hands_vr_only: bool,
    /// Keep fingertip followers off for desktop users.
    pub fingers_vr_only: bool,
    /// Rescale follower bodies with the avatar's eye height.
    pub scale_with_avatar: bool,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            follow_speed: 50.0,
            isolation_layer: 0,
            hands_vr_only: false,
            fingers_vr_only: true,
            scale_with_avatar: true,
        }
    }
}

impl FollowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_follow_speed(mut self, follow_speed: f32) -> Self {
        self.follow_speed = follow_speed;
        self
    }

    pub fn with_isolation_layer(mut self, layer: u32) -> Self {
        self.isolation_layer = layer;
        self
    }

    pub fn with_hands_vr_only(mut self, vr_only: bool) -> Self {
        self.hands_vr_only = vr_only;
        self
    }

    pub fn with_fingers_vr_only(mut self, vr_only: bool) -> Self {
        self.fingers_vr_only = vr_only;
        self
    }

    pub fn with_scale_with_avatar(mut self, scale: bool) -> Self {
        self.scale_with_avatar = scale;
        self
    }
}
