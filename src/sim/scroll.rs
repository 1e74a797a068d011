//! World scrolling, speed ramp, and score accrual
//!
//! Runs only while the match is live. Speed ramps monotonically to its
//! ceiling; parallax offsets wrap modulo their tile widths so they never
//! grow unbounded; obstacles slide left and are pruned the same tick their
//! right edge passes the margin. Score is speed-proportional, coupling
//! difficulty and reward.

use crate::consts::{PRUNE_MARGIN, REFERENCE_FRAME_MS};
use crate::sim::state::SimState;

/// Advance one tick of world motion and scoring.
pub fn advance(state: &mut SimState, dt_ms: f32) {
    let tuning = &state.tuning;

    state.speed = (state.speed + tuning.acceleration).min(tuning.max_speed);
    let speed = state.speed;

    for layer in &mut state.layers {
        layer.offset = (layer.offset + speed * layer.factor) % layer.tile_width;
    }

    for obstacle in &mut state.obstacles {
        obstacle.pos.x -= speed;
        if obstacle.right() < -PRUNE_MARGIN {
            obstacle.dead = true;
        }
    }
    state.obstacles.retain(|o| !o.dead);

    state.score += f64::from(
        tuning.score_rate * (speed / tuning.initial_speed) * (dt_ms / REFERENCE_FRAME_MS),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Tuning;
    use crate::consts::WORLD_WIDTH;
    use crate::sim::state::{Obstacle, ObstacleKind};
    use glam::Vec2;

    fn state() -> SimState {
        SimState::new(Tuning::default(), 42)
    }

    fn push_obstacle(state: &mut SimState, x: f32) {
        let kind = ObstacleKind::GroundSmall;
        state.obstacles.push(Obstacle {
            kind,
            pos: Vec2::new(x, 320.0),
            size: kind.size(),
            dead: false,
        });
    }

    #[test]
    fn speed_ramps_monotonically_and_saturates() {
        let mut s = state();
        let mut prev = s.speed;
        for _ in 0..20_000 {
            advance(&mut s, REFERENCE_FRAME_MS);
            assert!(s.speed >= prev);
            assert!(s.speed <= s.tuning.max_speed);
            prev = s.speed;
        }
        assert_eq!(s.speed, s.tuning.max_speed);
    }

    #[test]
    fn obstacles_move_left_at_world_speed() {
        let mut s = state();
        push_obstacle(&mut s, 500.0);
        let before = s.obstacles[0].pos.x;
        advance(&mut s, REFERENCE_FRAME_MS);
        assert_eq!(s.obstacles[0].pos.x, before - s.speed);
    }

    #[test]
    fn off_screen_obstacles_prune_same_tick() {
        let mut s = state();
        push_obstacle(&mut s, -PRUNE_MARGIN - 40.0);
        push_obstacle(&mut s, WORLD_WIDTH / 2.0);
        advance(&mut s, REFERENCE_FRAME_MS);
        assert_eq!(s.obstacles.len(), 1);
        assert!(s.obstacles.iter().all(|o| o.right() >= -PRUNE_MARGIN));
    }

    #[test]
    fn parallax_offsets_stay_within_tile() {
        let mut s = state();
        for _ in 0..5_000 {
            advance(&mut s, REFERENCE_FRAME_MS);
            for layer in &s.layers {
                assert!(layer.offset >= 0.0 && layer.offset < layer.tile_width);
            }
        }
        // Distant layers lag near ones
        assert!(s.layers[0].factor < s.layers[2].factor);
    }

    #[test]
    fn score_scales_with_speed() {
        let mut slow = state();
        advance(&mut slow, REFERENCE_FRAME_MS);
        let base = slow.score;

        let mut fast = state();
        fast.speed = fast.tuning.max_speed;
        advance(&mut fast, REFERENCE_FRAME_MS);
        assert!(fast.score > base * 2.0);
    }

    #[test]
    fn score_scales_with_real_time() {
        let mut s = state();
        advance(&mut s, REFERENCE_FRAME_MS);
        let one_frame = s.score;

        let mut s2 = state();
        advance(&mut s2, REFERENCE_FRAME_MS * 2.0);
        assert!((s2.score - one_frame * 2.0).abs() < 1e-3);
    }
}
