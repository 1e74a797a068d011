//! Frame clock
//!
//! Turns the host's stream of animation-frame timestamps into a bounded
//! per-tick delta. A backgrounded tab can hand us a multi-second gap; an
//! unclamped step that large would fast-forward every time accumulator in
//! one tick, so out-of-range deltas fall back to the last good one.
//!
//! The clock runs every scheduled frame regardless of match phase and never
//! touches simulation state.

use crate::consts::{MAX_FRAME_MS, REFERENCE_FRAME_MS};

#[derive(Debug, Clone)]
pub struct FrameClock {
    prev_ms: Option<f64>,
    last_good_ms: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            prev_ms: None,
            last_good_ms: REFERENCE_FRAME_MS,
        }
    }

    /// Delta for the frame at `now_ms`, in milliseconds.
    ///
    /// The first call, a non-positive delta, and a delta above
    /// [`MAX_FRAME_MS`] all yield the last accepted delta (initially one
    /// 60 Hz frame) instead of the raw difference.
    pub fn dt_ms(&mut self, now_ms: f64) -> f32 {
        let dt = match self.prev_ms {
            Some(prev) => (now_ms - prev) as f32,
            None => REFERENCE_FRAME_MS,
        };
        self.prev_ms = Some(now_ms);

        if dt > 0.0 && dt <= MAX_FRAME_MS {
            self.last_good_ms = dt;
            dt
        } else {
            self.last_good_ms
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
