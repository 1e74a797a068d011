//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Driven only by host timestamps (one tick per animation frame)
//! - Seeded RNG only, carried in the state
//! - No rendering or platform dependencies
//!
//! Tick order: clock → player physics → world scroll → spawn → collision →
//! lifecycle → snapshot.

pub mod clock;
pub mod collision;
pub mod player;
pub mod scroll;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use clock::FrameClock;
pub use collision::{Aabb, first_hit};
pub use snapshot::RenderSnapshot;
pub use spawn::Spawner;
pub use state::{Obstacle, ObstacleKind, Phase, Player, PlayerAnim, ScrollLayer, SimState};
pub use tick::{GameOverHook, Runner};
