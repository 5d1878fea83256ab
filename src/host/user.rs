/// Session and user context exposed by the host.
pub trait UserContext {
    /// Opaque user handle. Hosts may invalidate handles mid-session, so
    /// holders must re-check with [`UserContext::is_valid`].
    type UserId: Copy + PartialEq;

    fn local_user(&self) -> Option<Self::UserId>;

    fn is_valid(&self, user: Self::UserId) -> bool;

    fn is_in_vr(&self, user: Self::UserId) -> bool;

    /// Avatar eye height in meters.
    fn avatar_eye_height(&self, user: Self::UserId) -> f32;
}
