//! Simulation state and core types
//!
//! One aggregate owns everything a match mutates. It is created at match
//! start, mutated only inside a tick, and dropped (or replaced) on retry.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::Tuning;
use crate::consts::*;
use crate::sim::spawn::Spawner;

/// Match lifecycle. Advances strictly left to right, once per match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Match is live: physics, scroll, spawn, collision all run
    Running,
    /// Collision happened; world is frozen while the death frame holds
    Dying,
    /// Game-over hook has fired; no further observable mutation
    Reported,
}

/// Player animation tag consumed by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAnim {
    Run,
    Jump,
    /// Terminal: never overwritten once set
    Die,
}

/// The player body.
///
/// `y` is the foot line and grows downward, so airborne means `y < GROUND_Y`
/// and the ground clamps from below: `y <= GROUND_Y` always.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Horizontal position, constant through a match
    pub x: f32,
    /// Vertical foot position
    pub y: f32,
    /// Vertical velocity, px per tick
    pub dy: f32,
    /// True from jump start until the feet next touch the ground
    pub jumping: bool,
    pub anim: PlayerAnim,
    /// Which of the two run-cycle frames is showing
    pub run_frame: u8,
    /// Time accumulated toward the next run-frame toggle, ms
    pub run_frame_elapsed_ms: f32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            x: PLAYER_X,
            y: GROUND_Y,
            dy: 0.0,
            jumping: false,
            anim: PlayerAnim::Run,
            run_frame: 0,
            run_frame_elapsed_ms: 0.0,
        }
    }

    /// Sprite box, top-left + size
    pub fn bounds(&self) -> (Vec2, Vec2) {
        (
            Vec2::new(self.x, self.y - PLAYER_HEIGHT),
            Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
        )
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Obstacle kinds. Kind and size never change after spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Low cactus-class obstacle resting on the ground
    GroundSmall,
    /// Tall/wide ground obstacle
    GroundLarge,
    /// Low flier: hits a grounded player, must be jumped
    FlyingSmall,
    /// High flier: pass beneath by staying grounded
    FlyingLarge,
}

impl ObstacleKind {
    /// Sprite size for this kind
    pub fn size(&self) -> Vec2 {
        match self {
            ObstacleKind::GroundSmall => Vec2::new(26.0, 40.0),
            ObstacleKind::GroundLarge => Vec2::new(50.0, 56.0),
            ObstacleKind::FlyingSmall => Vec2::new(40.0, 28.0),
            ObstacleKind::FlyingLarge => Vec2::new(60.0, 36.0),
        }
    }

    pub fn is_flying(&self) -> bool {
        matches!(self, ObstacleKind::FlyingSmall | ObstacleKind::FlyingLarge)
    }
}

/// A spawned obstacle (axis-aligned box, `pos` = top-left)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub pos: Vec2,
    pub size: Vec2,
    /// Marked by the scroller once fully off-screen left; pruned same tick
    pub dead: bool,
}

impl Obstacle {
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// One parallax background layer: offset wraps modulo its tile width
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollLayer {
    /// Fraction of world speed this layer moves at (< 1 = distant)
    pub factor: f32,
    /// Horizontal tile size the offset wraps against
    pub tile_width: f32,
    pub offset: f32,
}

impl ScrollLayer {
    pub fn new(factor: f32, tile_width: f32) -> Self {
        Self {
            factor,
            tile_width,
            offset: 0.0,
        }
    }
}

/// Complete match state, owned by [`crate::sim::Runner`]
#[derive(Debug, Clone)]
pub struct SimState {
    /// Match seed (kept for bug reports; replay is not a guarantee)
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: Phase,
    /// Current horizontal world speed, px per tick. Non-decreasing while
    /// running, clamped to `[initial_speed, max_speed]`.
    pub speed: f32,
    /// Score accumulator; the renderer shows `display_score()`
    pub score: f64,
    pub player: Player,
    /// Spawn order; order only matters for iteration
    pub obstacles: Vec<Obstacle>,
    pub layers: Vec<ScrollLayer>,
    pub spawner: Spawner,
    /// Real time spent in `Dying`, ms
    pub death_elapsed_ms: f32,
}

impl SimState {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let spawner = Spawner::new(&tuning, &mut rng);
        Self {
            seed,
            rng,
            speed: tuning.initial_speed,
            tuning,
            phase: Phase::Running,
            score: 0.0,
            player: Player::new(),
            obstacles: Vec::new(),
            layers: vec![
                // sky, hills, ground strip
                ScrollLayer::new(0.2, 512.0),
                ScrollLayer::new(0.5, 768.0),
                ScrollLayer::new(1.0, WORLD_WIDTH),
            ],
            spawner,
            death_elapsed_ms: 0.0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Floored integer score shown to the player and reported at game over
    pub fn display_score(&self) -> u64 {
        self.score.max(0.0) as u64
    }
}
