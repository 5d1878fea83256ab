use glam::Vec3;

/// Per-tick lerp factor for an exponential follow at `speed` over a tick
/// of `dt` seconds. Clamped to `[0, 1]`: a factor of 1 snaps to the
/// target, which keeps the step stable for any `speed * dt`.
pub fn lerp_factor(speed: f32, dt: f32) -> f32 {
    (speed * dt).clamp(0.0, 1.0)
}

/// One smoothing step from `current` toward `target`.
///
/// Repeated steps converge geometrically: the remaining error shrinks by
/// `1 - lerp_factor(speed, dt)` per tick.
pub fn follow_toward(current: Vec3, target: Vec3, speed: f32, dt: f32) -> Vec3 {
    current.lerp(target, lerp_factor(speed, dt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_clamps_to_unit_range() {
        assert_eq!(lerp_factor(50.0, 0.02), 1.0);
        assert_eq!(lerp_factor(50.0, 0.1), 1.0);
        assert_eq!(lerp_factor(10.0, 0.02), 0.2);
        assert_eq!(lerp_factor(10.0, -0.02), 0.0);
    }

    #[test]
    fn unit_factor_snaps_to_target() {
        let target = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(follow_toward(Vec3::ZERO, target, 50.0, 0.02), target);
    }

    #[test]
    fn steps_match_geometric_closed_form() {
        let start = Vec3::new(0.0, 1.0, 0.0);
        let target = Vec3::new(2.0, 1.0, -1.0);
        let (speed, dt) = (10.0, 0.02);
        let f = lerp_factor(speed, dt);

        let mut current = start;
        for n in 1..=40 {
            current = follow_toward(current, target, speed, dt);
            let expected = target - (target - start) * (1.0 - f).powi(n);
            assert!(
                (current - expected).length() < 1e-4,
                "diverged from closed form at step {n}"
            );
        }
    }

    #[test]
    fn converges_to_target() {
        let target = Vec3::new(-3.0, 0.5, 4.0);
        let mut current = Vec3::ZERO;
        for _ in 0..400 {
            current = follow_toward(current, target, 8.0, 0.02);
        }
        assert!((current - target).length() < 1e-3);
    }
}
