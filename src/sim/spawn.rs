//! Procedural obstacle spawning
//!
//! A frame-counted cooldown drives the cadence: when it hits zero, exactly
//! one obstacle spawns fully off the right edge and the next gap is
//! resampled. Two gap regimes trade tension for relief:
//!
//! - **cluster**: safety floor plus a small uniform extra, for tight
//!   back-to-back pressure
//! - **relaxed**: a uniform pixel distance divided by current speed, so the
//!   on-screen spacing holds as the world speeds up
//!
//! Both clamp to the safety floor - the number of ticks one full jump arc
//! takes plus a reaction margin - so no sequence is ever unclearable.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::config::Tuning;
use crate::consts::{GROUND_Y, PLAYER_HEIGHT, SPAWN_MARGIN, WORLD_WIDTH};
use crate::sim::state::{Obstacle, ObstacleKind};
use glam::Vec2;

/// Spawn cadence state, owned by the match
#[derive(Debug, Clone)]
pub struct Spawner {
    /// Frames until the next spawn
    cooldown: u32,
}

impl Spawner {
    pub fn new(tuning: &Tuning, rng: &mut Pcg32) -> Self {
        // First obstacle gets a relaxed gap so the match never opens unfairly
        Self {
            cooldown: relaxed_gap(tuning, rng, tuning.initial_speed)
                .max(tuning.safety_floor_frames()),
        }
    }

    /// Advance one tick; returns the obstacle to insert, if the cooldown
    /// elapsed. Never spawns more than one per tick.
    pub fn tick(&mut self, tuning: &Tuning, rng: &mut Pcg32, speed: f32) -> Option<Obstacle> {
        if self.cooldown > 0 {
            self.cooldown -= 1;
            return None;
        }
        self.cooldown = sample_gap(tuning, rng, speed);
        Some(spawn_obstacle(tuning, rng))
    }

    #[cfg(test)]
    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }
}

/// Choose the next gap: weighted coin between the two regimes, floor-clamped.
pub fn sample_gap(tuning: &Tuning, rng: &mut Pcg32, speed: f32) -> u32 {
    let floor = tuning.safety_floor_frames();
    if rng.random::<f32>() < tuning.cluster_chance {
        floor + rng.random_range(0..=tuning.cluster_extra_frames)
    } else {
        relaxed_gap(tuning, rng, speed).max(floor)
    }
}

fn relaxed_gap(tuning: &Tuning, rng: &mut Pcg32, speed: f32) -> u32 {
    let gap_px = rng.random_range(tuning.relaxed_gap_min_px..tuning.relaxed_gap_max_px);
    (gap_px / speed).ceil() as u32
}

/// Create one obstacle just past the right edge of the world.
fn spawn_obstacle(tuning: &Tuning, rng: &mut Pcg32) -> Obstacle {
    let kind = roll_kind(tuning, rng.random::<f32>());
    let size = kind.size();
    let bottom = match kind {
        // Ground kinds rest on the ground line
        ObstacleKind::GroundSmall | ObstacleKind::GroundLarge => GROUND_Y,
        // Low flier: bottom inside a grounded player's box, must be jumped
        ObstacleKind::FlyingSmall => GROUND_Y - tuning.flying_low_offset,
        // High flier: clears a standing head, punishes jumping into it
        ObstacleKind::FlyingLarge => GROUND_Y - PLAYER_HEIGHT - tuning.flying_clearance,
    };
    Obstacle {
        kind,
        pos: Vec2::new(WORLD_WIDTH + SPAWN_MARGIN, bottom - size.y),
        size,
        dead: false,
    }
}

/// Map one uniform draw in [0,1) onto the four weighted kind bands.
pub fn roll_kind(tuning: &Tuning, roll: f32) -> ObstacleKind {
    let cum = tuning.cumulative_weights();
    if roll < cum[0] {
        ObstacleKind::GroundSmall
    } else if roll < cum[1] {
        ObstacleKind::GroundLarge
    } else if roll < cum[2] {
        ObstacleKind::FlyingSmall
    } else {
        ObstacleKind::FlyingLarge
    }
}
