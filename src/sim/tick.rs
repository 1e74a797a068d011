//! Match driver and lifecycle controller
//!
//! [`Runner`] owns the state, the frame clock, and the injected game-over
//! hook. The host calls `tick(timestamp_ms)` once per animation frame and
//! forwards its two input signals; everything else happens in here.
//!
//! Lifecycle: `Running -> Dying -> Reported`, strictly once per match. The
//! death frame holds for a real-time delay so the player sees what killed
//! them, then the hook fires with the floored score - exactly once, no
//! matter how many ticks the host keeps scheduling afterward.

use rand::Rng;

use crate::config::Tuning;
use crate::sim::clock::FrameClock;
use crate::sim::collision;
use crate::sim::scroll;
use crate::sim::snapshot::RenderSnapshot;
use crate::sim::state::{Phase, PlayerAnim, SimState};

/// One-shot game-over collaborator, called with the final floored score
pub type GameOverHook = Box<dyn FnMut(u64)>;

/// Owns one match from first tick to (at most) one game-over report.
pub struct Runner {
    state: SimState,
    clock: FrameClock,
    /// `take()`n at report time; `None` afterward is the exactly-once guard
    on_game_over: Option<GameOverHook>,
}

impl Runner {
    /// Start a match with an entropy seed.
    pub fn new(tuning: Tuning, on_game_over: GameOverHook) -> Self {
        Self::with_seed(tuning, rand::rng().random(), on_game_over)
    }

    /// Start a match with a fixed seed (tests, bug reproduction).
    pub fn with_seed(tuning: Tuning, seed: u64, on_game_over: GameOverHook) -> Self {
        log::info!("match start, seed {seed}");
        Self {
            state: SimState::new(tuning, seed),
            clock: FrameClock::new(),
            on_game_over: Some(on_game_over),
        }
    }

    /// The abstract press began (pointer down / touch start / key down).
    pub fn press_start(&mut self) {
        if self.state.is_running() {
            self.state.player.start_jump(&self.state.tuning);
        }
    }

    /// The abstract press ended.
    pub fn press_end(&mut self) {
        if self.state.is_running() {
            self.state.player.end_jump(&self.state.tuning);
        }
    }

    /// Advance one tick and return the drawable frame.
    pub fn tick(&mut self, timestamp_ms: f64) -> RenderSnapshot {
        // The clock runs every frame regardless of phase
        let dt_ms = self.clock.dt_ms(timestamp_ms);

        match self.state.phase {
            Phase::Running => self.tick_running(dt_ms),
            Phase::Dying => self.tick_dying(dt_ms),
            // Terminal: no observable mutation, ever
            Phase::Reported => {}
        }

        RenderSnapshot::capture(&self.state)
    }

    fn tick_running(&mut self, dt_ms: f32) {
        let state = &mut self.state;

        state.player.integrate(&state.tuning, dt_ms);
        scroll::advance(state, dt_ms);
        if let Some(obstacle) = state
            .spawner
            .tick(&state.tuning, &mut state.rng, state.speed)
        {
            state.obstacles.push(obstacle);
        }

        if let Some(idx) = collision::first_hit(&state.player, &state.obstacles, &state.tuning) {
            log::info!(
                "collision with {:?} at score {}",
                state.obstacles[idx].kind,
                state.display_score()
            );
            state.phase = Phase::Dying;
            state.player.anim = PlayerAnim::Die;
            state.death_elapsed_ms = 0.0;
        }
    }

    fn tick_dying(&mut self, dt_ms: f32) {
        let state = &mut self.state;
        state.death_elapsed_ms += dt_ms;
        if state.death_elapsed_ms < state.tuning.game_over_delay_ms {
            return;
        }

        state.phase = Phase::Reported;
        let score = state.display_score();
        if let Some(mut hook) = self.on_game_over.take() {
            log::info!("reporting game over, score {score}");
            hook(score);
        }
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }
}
