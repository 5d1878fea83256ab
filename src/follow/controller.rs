use log::{debug, trace, warn};

use crate::anchor::{AnchorJoint, Side};
use crate::host::{tag_layer_recursive, BoneTracking, HostEvent, PhysicsBody, SceneNode, UserContext};
use crate::math::follow_toward;

use super::bindings::BindingSet;
use super::config::FollowConfig;
use super::error::InitError;
use super::scale::avatar_scale;
use super::slot::{FollowerSlot, SlotPhase};

/// Controller flags and cached handles, owned by the controller and read
/// back by the embedding context. No global state.
#[derive(Debug, Clone, Copy)]
pub struct ControllerState<U> {
    /// False until setup succeeds; gates all per-tick work.
    pub initialized: bool,
    /// Captured once during initialization, immutable thereafter.
    pub is_vr_user: bool,
    /// Last applied avatar scale factor.
    pub avatar_scale: f32,
    pub(crate) user: Option<U>,
}

impl<U> ControllerState<U> {
    fn inert() -> Self {
        Self {
            initialized: false,
            is_vr_user: false,
            avatar_scale: 1.0,
            user: None,
        }
    }
}

/// Drives every bound follower body toward its tracked anchor, one fixed
/// control tick at a time.
pub struct FollowController<U, N> {
    config: FollowConfig,
    state: ControllerState<U>,
    slots: [Option<FollowerSlot<N>>; AnchorJoint::COUNT],
}

impl<U, N> FollowController<U, N>
where
    U: Copy + PartialEq,
    N: SceneNode,
{
    /// Builds an inert controller. Nothing moves until
    /// [`FollowController::initialize`] succeeds.
    pub fn new(mut bindings: BindingSet<N>, config: FollowConfig) -> Self {
        let slots = std::array::from_fn(|i| {
            let joint = AnchorJoint::ALL[i];
            bindings.take(joint).map(|node| FollowerSlot::new(joint, node))
        });

        Self {
            config,
            state: ControllerState::inert(),
            slots,
        }
    }

    pub fn config(&self) -> &FollowConfig {
        &self.config
    }

    pub fn state(&self) -> &ControllerState<U> {
        &self.state
    }

    pub fn slot(&self, joint: AnchorJoint) -> Option<&FollowerSlot<N>> {
        self.slots[joint.index()].as_ref()
    }

    /// Resolves handles, captures baselines, applies feature gating and
    /// collision isolation, and computes the initial avatar scale.
    ///
    /// Any `Err` leaves the controller permanently inert; there is no
    /// partial activation and no retry.
    pub fn initialize<H>(&mut self, host: &H) -> Result<(), InitError>
    where
        H: UserContext<UserId = U>,
    {
        // Baselines are captured exactly once per session.
        if self.state.initialized {
            return Ok(());
        }

        let user = host.local_user().ok_or(InitError::InvalidUser)?;

        // Both hands are mandatory and must carry a physics body.
        for side in [Side::Left, Side::Right] {
            let joint = AnchorJoint::Hand(side);
            let slot = self.slots[joint.index()]
                .as_mut()
                .ok_or(InitError::MissingBinding(joint))?;
            if slot.node.body_mut().is_none() {
                return Err(InitError::MissingPhysicsHandle(joint));
            }
        }

        let is_vr = host.is_in_vr(user);
        self.state.is_vr_user = is_vr;
        self.state.user = Some(user);

        if !is_vr && self.config.hands_vr_only {
            // Deliberate short-circuit, not an error: the whole feature is
            // VR-only, so the controller stays inert for this session.
            for side in [Side::Left, Side::Right] {
                if let Some(slot) = self.slots[AnchorJoint::Hand(side).index()].as_mut() {
                    slot.node.set_active(false);
                    slot.phase = SlotPhase::Disabled;
                }
            }
            debug!("hand followers are VR-only; staying inert for desktop user");
            return Ok(());
        }

        if self.config.isolation_layer == 0 {
            warn!("isolation layer unconfigured; follower bodies may collide with the player");
        }

        let gate_fingers = !is_vr && self.config.fingers_vr_only;
        for slot in self.slots.iter_mut().flatten() {
            slot.baseline_scale = slot.node.local_scale();

            if slot.joint.is_fingertip() && gate_fingers {
                slot.node.set_active(false);
                slot.phase = SlotPhase::Disabled;
                continue;
            }

            if self.config.isolation_layer != 0 {
                tag_layer_recursive(&mut slot.node, self.config.isolation_layer);
            }
            slot.phase = SlotPhase::Active;
        }

        if self.config.scale_with_avatar {
            self.recalculate_scale(host.avatar_eye_height(user));
        }

        self.state.initialized = true;
        debug!(
            "follow controller initialized: vr={} scale={}",
            is_vr, self.state.avatar_scale
        );
        Ok(())
    }

    /// Recomputes the avatar scale factor from an eye height and reapplies
    /// it to every active body. Disabled bodies keep whatever scale they
    /// had when gated out.
    pub fn recalculate_scale(&mut self, eye_height: f32) -> f32 {
        let scale = avatar_scale(eye_height);
        self.state.avatar_scale = scale;

        for slot in self.slots.iter_mut().flatten() {
            if slot.phase == SlotPhase::Active {
                slot.node.set_local_scale(slot.baseline_scale * scale);
            }
        }

        debug!("avatar scale recomputed: eye_height={eye_height} scale={scale}");
        scale
    }

    /// Avatar-change notification from the host. Events for other users
    /// are ignored.
    pub fn on_avatar_changed<H>(&mut self, host: &H, user: U)
    where
        H: UserContext<UserId = U>,
    {
        if !self.state.initialized {
            return;
        }
        if self.state.user != Some(user) {
            return;
        }
        if !self.config.scale_with_avatar {
            return;
        }
        self.recalculate_scale(host.avatar_eye_height(user));
    }

    pub fn handle_event<H>(&mut self, host: &H, event: HostEvent<U>)
    where
        H: UserContext<UserId = U>,
    {
        match event {
            HostEvent::AvatarChanged(user) => self.on_avatar_changed(host, user),
        }
    }

    /// One fixed control step. A complete no-op unless initialization
    /// succeeded and the local user handle is still valid.
    ///
    /// Per-body dropouts never abort the tick for the other bodies.
    pub fn tick<H, T>(&mut self, host: &H, tracking: &T, dt: f32)
    where
        H: UserContext<UserId = U>,
        T: BoneTracking<U>,
    {
        if !self.state.initialized {
            return;
        }
        let user = match self.state.user {
            Some(user) if host.is_valid(user) => user,
            _ => return,
        };

        // Re-evaluated every tick rather than cached.
        let fingers_gated = self.config.fingers_vr_only && !self.state.is_vr_user;

        for slot in self.slots.iter_mut().flatten() {
            if slot.phase != SlotPhase::Active {
                continue;
            }
            if slot.joint.is_fingertip() && fingers_gated {
                continue;
            }

            let pose = tracking.sample(user, slot.joint);
            if !pose.is_tracked() {
                // Momentary tracking loss: keep the stale pose this tick.
                trace!("no sample for {:?} this tick", slot.joint);
                continue;
            }

            let body = match slot.node.body_mut() {
                Some(body) => body,
                None => continue,
            };

            let next = follow_toward(body.position(), pose.position, self.config.follow_speed, dt);
            body.move_to(next);
            body.set_rotation(pose.rotation);
        }
    }
}
