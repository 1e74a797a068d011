//! Player vertical physics and animation cadence
//!
//! Per-tick integration: gravity pulls `dy` down (positive, since y grows
//! downward), the ground clamps the feet at `GROUND_Y`. One jump per
//! grounded period; releasing the press mid-ascent damps the upward
//! velocity, which is what makes a short tap a low hop and a held press the
//! full arc.

use crate::config::Tuning;
use crate::consts::GROUND_Y;
use crate::sim::state::{Player, PlayerAnim};

impl Player {
    /// Begin a jump. Only honored while grounded; mid-air re-triggers and
    /// any call after death are silent no-ops.
    pub fn start_jump(&mut self, tuning: &Tuning) {
        if self.jumping || self.anim == PlayerAnim::Die {
            return;
        }
        self.dy = tuning.jump_strength;
        self.jumping = true;
        self.anim = PlayerAnim::Jump;
    }

    /// The press released. If still ascending fast enough, cut the upward
    /// velocity so the arc peaks early (variable jump height).
    pub fn end_jump(&mut self, tuning: &Tuning) {
        if self.jumping && self.dy < tuning.jump_cut_threshold {
            self.dy *= tuning.jump_damping;
        }
    }

    /// Advance one tick of vertical physics and the run-cycle animation.
    pub fn integrate(&mut self, tuning: &Tuning, dt_ms: f32) {
        self.dy += tuning.gravity;
        self.y += self.dy;

        if self.y > GROUND_Y {
            self.y = GROUND_Y;
            self.dy = 0.0;
            if self.jumping {
                self.jumping = false;
                if self.anim != PlayerAnim::Die {
                    self.anim = PlayerAnim::Run;
                }
            }
        }

        // Two-frame run cycle, on real time rather than ticks
        if self.anim == PlayerAnim::Run {
            self.run_frame_elapsed_ms += dt_ms;
            if self.run_frame_elapsed_ms >= tuning.run_frame_ms {
                self.run_frame_elapsed_ms = 0.0;
                self.run_frame ^= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::REFERENCE_FRAME_MS;
    use proptest::prelude::*;

    fn tuning() -> Tuning {
        // The canonical balance: gravity 0.8, jump -15
        Tuning::default()
    }

    /// Run a full held jump, returning (peak height above ground, ticks)
    fn run_arc(t: &Tuning, release_after: Option<u32>) -> (f32, u32) {
        let mut p = Player::new();
        p.start_jump(t);
        let mut peak = 0.0f32;
        let mut ticks = 0u32;
        while ticks < 10_000 {
            if Some(ticks) == release_after {
                p.end_jump(t);
            }
            p.integrate(t, REFERENCE_FRAME_MS);
            ticks += 1;
            peak = peak.max(GROUND_Y - p.y);
            if !p.jumping {
                break;
            }
        }
        (peak, ticks)
    }

    #[test]
    fn held_jump_is_a_symmetric_parabola() {
        let t = tuning();
        let mut p = Player::new();
        p.start_jump(&t);
        assert_eq!(p.anim, PlayerAnim::Jump);

        let mut heights = Vec::new();
        for _ in 0..t.jump_arc_frames() + 2 {
            p.integrate(&t, REFERENCE_FRAME_MS);
            heights.push(GROUND_Y - p.y);
            if !p.jumping {
                break;
            }
        }

        // Lands exactly: grounded, at rest, back to the run animation
        assert!(!p.jumping);
        assert_eq!(p.y, GROUND_Y);
        assert_eq!(p.dy, 0.0);
        assert_eq!(p.anim, PlayerAnim::Run);

        // Ascent mirrors descent around the apex
        let apex = heights
            .iter()
            .cloned()
            .fold(0.0f32, f32::max);
        let apex_idx = heights.iter().position(|&h| h == apex).unwrap();
        // Discrete steps shear the apex slightly; drift grows ~0.4px per step
        for i in 1..4 {
            let before = heights[apex_idx - i];
            let after = heights[apex_idx + i];
            assert!((before - after).abs() < 2.0, "arc asymmetric at ±{i}");
        }
    }

    #[test]
    fn no_double_jump_mid_air() {
        let t = tuning();
        let mut p = Player::new();
        p.start_jump(&t);
        p.integrate(&t, REFERENCE_FRAME_MS);
        let dy_before = p.dy;
        p.start_jump(&t); // must be ignored
        assert_eq!(p.dy, dy_before);
        assert!(p.jumping);
    }

    #[test]
    fn early_release_strictly_lowers_peak() {
        let t = tuning();
        let (held_peak, _) = run_arc(&t, None);
        let (tap_peak, _) = run_arc(&t, Some(3));
        let (mid_peak, _) = run_arc(&t, Some(8));
        assert!(tap_peak < mid_peak, "{tap_peak} !< {mid_peak}");
        assert!(mid_peak < held_peak, "{mid_peak} !< {held_peak}");
    }

    #[test]
    fn release_near_apex_changes_nothing() {
        let t = tuning();
        let mut p = Player::new();
        p.start_jump(&t);
        // Integrate until dy rises past the cut threshold
        while p.dy < t.jump_cut_threshold {
            p.integrate(&t, REFERENCE_FRAME_MS);
        }
        let dy = p.dy;
        p.end_jump(&t);
        assert_eq!(p.dy, dy);
    }

    #[test]
    fn die_animation_survives_landing() {
        let t = tuning();
        let mut p = Player::new();
        p.start_jump(&t);
        p.anim = PlayerAnim::Die;
        for _ in 0..t.jump_arc_frames() + 2 {
            p.integrate(&t, REFERENCE_FRAME_MS);
        }
        assert_eq!(p.y, GROUND_Y);
        assert_eq!(p.anim, PlayerAnim::Die);
    }

    #[test]
    fn run_frames_toggle_on_cadence() {
        let t = tuning();
        let mut p = Player::new();
        assert_eq!(p.run_frame, 0);
        // 120ms threshold at ~16.7ms frames: 8th frame crosses it
        for _ in 0..8 {
            p.integrate(&t, REFERENCE_FRAME_MS);
        }
        assert_eq!(p.run_frame, 1);
        for _ in 0..8 {
            p.integrate(&t, REFERENCE_FRAME_MS);
        }
        assert_eq!(p.run_frame, 0);
    }

    proptest! {
        /// Ground clamp holds under arbitrary press/release/tick sequences.
        #[test]
        fn feet_never_sink_below_ground(ops in prop::collection::vec(0u8..3, 1..400)) {
            let t = tuning();
            let mut p = Player::new();
            for op in ops {
                match op {
                    0 => p.start_jump(&t),
                    1 => p.end_jump(&t),
                    _ => p.integrate(&t, REFERENCE_FRAME_MS),
                }
                prop_assert!(p.y <= GROUND_Y);
            }
        }
    }
}
