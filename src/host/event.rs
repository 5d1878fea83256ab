/// Messages the host delivers on the control thread, between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent<U> {
    /// A user swapped avatars; the local user's scale may need recomputing.
    AvatarChanged(U),
}
