//! Strider - endless-runner simulation core
//!
//! Core modules:
//! - `sim`: Deterministic per-tick simulation (player physics, obstacle
//!   spawning, scrolling, collision, match lifecycle)
//! - `config`: Data-driven gameplay tuning
//!
//! The crate owns no rendering, persistence, or navigation: the host drives
//! [`sim::Runner`] once per animation frame and draws whatever the returned
//! [`sim::RenderSnapshot`] describes. The one outward side effect is the
//! injected game-over hook, invoked exactly once per match.

pub mod config;
pub mod sim;

pub use config::Tuning;
pub use sim::{RenderSnapshot, Runner};

/// Fixed world geometry (everything gameplay-tunable lives in [`Tuning`])
pub mod consts {
    /// Visible world width in pixels
    pub const WORLD_WIDTH: f32 = 800.0;
    /// Visible world height in pixels
    pub const WORLD_HEIGHT: f32 = 400.0;
    /// Ground line: the y coordinate feet rest on (y grows downward)
    pub const GROUND_Y: f32 = 360.0;

    /// Player sprite box (x is constant through a match)
    pub const PLAYER_X: f32 = 80.0;
    pub const PLAYER_WIDTH: f32 = 44.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;

    /// One frame at the 60 Hz reference rate, in milliseconds
    pub const REFERENCE_FRAME_MS: f32 = 1000.0 / 60.0;
    /// Largest delta the clock will accept as a real frame
    pub const MAX_FRAME_MS: f32 = 100.0;

    /// Obstacles spawn this far past the right edge
    pub const SPAWN_MARGIN: f32 = 40.0;
    /// Obstacles are pruned once their right edge is this far past the left edge
    pub const PRUNE_MARGIN: f32 = 80.0;
}
