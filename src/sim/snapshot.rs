//! Render snapshot
//!
//! The read-only view a renderer needs to draw one frame, emitted at the end
//! of every tick. Serializable so a host can hand it across a JS boundary as
//! JSON without reaching into simulation internals.

use serde::{Deserialize, Serialize};

use crate::consts::{PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::sim::state::{ObstacleKind, Phase, PlayerAnim, SimState};

/// Drawable player state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    /// Top-left corner of the sprite box
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub anim: PlayerAnim,
    /// Which run-cycle frame to draw while `anim` is `Run`
    pub run_frame: u8,
}

/// Drawable obstacle state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub kind: ObstacleKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub phase: Phase,
    pub player: PlayerView,
    pub obstacles: Vec<ObstacleView>,
    /// Parallax offsets, far layer first
    pub layer_offsets: Vec<f32>,
    pub score: u64,
}

impl RenderSnapshot {
    /// Capture the drawable view of the current state.
    pub fn capture(state: &SimState) -> Self {
        let (pos, _) = state.player.bounds();
        Self {
            phase: state.phase,
            player: PlayerView {
                x: pos.x,
                y: pos.y,
                width: PLAYER_WIDTH,
                height: PLAYER_HEIGHT,
                anim: state.player.anim,
                run_frame: state.player.run_frame,
            },
            obstacles: state
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    kind: o.kind,
                    x: o.pos.x,
                    y: o.pos.y,
                    width: o.size.x,
                    height: o.size.y,
                })
                .collect(),
            layer_offsets: state.layers.iter().map(|l| l.offset).collect(),
            score: state.display_score(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Tuning;
    use crate::consts::{GROUND_Y, PLAYER_X};

    #[test]
    fn capture_reflects_state() {
        let state = SimState::new(Tuning::default(), 5);
        let snap = RenderSnapshot::capture(&state);
        assert_eq!(snap.phase, Phase::Running);
        assert_eq!(snap.player.x, PLAYER_X);
        assert_eq!(snap.player.y, GROUND_Y - PLAYER_HEIGHT);
        assert_eq!(snap.player.anim, PlayerAnim::Run);
        assert_eq!(snap.layer_offsets.len(), state.layers.len());
        assert_eq!(snap.score, 0);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let state = SimState::new(Tuning::default(), 5);
        let snap = RenderSnapshot::capture(&state);
        let json = serde_json::to_string(&snap).unwrap();
        let back: RenderSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
