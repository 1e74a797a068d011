//! Gameplay tuning
//!
//! Every gameplay constant the designers iterate on lives here: physics,
//! speed ramp, spawn cadence, hitbox insets, lifecycle timing. Only the
//! *shapes* of the rules are fixed in `sim`; the numbers are data.

use serde::{Deserialize, Serialize};

/// Tunable gameplay parameters for one match.
///
/// Serializable so the host can ship balance patches as JSON without a
/// rebuild. Defaults are the shipped balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player physics (per-tick units, y grows downward) ===
    /// Downward acceleration added to `dy` every tick
    pub gravity: f32,
    /// Initial `dy` on jump (negative = upward)
    pub jump_strength: f32,
    /// Multiplier applied to `dy` when the press releases mid-ascent
    pub jump_damping: f32,
    /// Release damping only applies while `dy` is below this (still rising)
    pub jump_cut_threshold: f32,
    /// Run-cycle frame toggle interval, milliseconds
    pub run_frame_ms: f32,

    // === Speed ramp ===
    /// Horizontal world speed at match start, px per tick
    pub initial_speed: f32,
    /// Speed ceiling, px per tick
    pub max_speed: f32,
    /// Speed gained per tick until the ceiling
    pub acceleration: f32,

    // === Scoring ===
    /// Score gained per reference frame at initial speed
    pub score_rate: f32,

    // === Spawning ===
    /// Kind weights: ground-small, ground-large, flying-small, flying-large
    pub spawn_weights: [f32; 4],
    /// Chance the next gap uses the tight "cluster" regime
    pub cluster_chance: f32,
    /// Cluster regime: extra frames above the safety floor, sampled 0..=this
    pub cluster_extra_frames: u32,
    /// Relaxed regime: gap sampled in pixels, then divided by current speed
    pub relaxed_gap_min_px: f32,
    pub relaxed_gap_max_px: f32,
    /// Frames added to the jump-arc duration to form the safety floor
    pub reaction_margin_frames: u32,
    /// Flying-small bottom edge sits this far above the ground line
    pub flying_low_offset: f32,
    /// Flying-large bottom edge sits this far above a standing player's head
    pub flying_clearance: f32,

    // === Collision ===
    /// Player hitbox inset per side (sprite box minus this feels fair)
    pub player_hitbox_inset: f32,
    /// Obstacle hitbox inset per side
    pub obstacle_hitbox_inset: f32,

    // === Lifecycle ===
    /// Real-time hold on the death frame before the game-over report, ms
    pub game_over_delay_ms: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.8,
            jump_strength: -15.0,
            jump_damping: 0.45,
            jump_cut_threshold: -4.0,
            run_frame_ms: 120.0,

            initial_speed: 5.0,
            max_speed: 13.0,
            acceleration: 0.002,

            score_rate: 0.1,

            spawn_weights: [0.4, 0.3, 0.2, 0.1],
            cluster_chance: 0.3,
            cluster_extra_frames: 18,
            relaxed_gap_min_px: 550.0,
            relaxed_gap_max_px: 950.0,
            reaction_margin_frames: 8,
            flying_low_offset: 20.0,
            flying_clearance: 12.0,

            player_hitbox_inset: 6.0,
            obstacle_hitbox_inset: 4.0,

            game_over_delay_ms: 1000.0,
        }
    }
}

impl Tuning {
    /// Ticks for one full jump arc: `dy` goes from `jump_strength` back to
    /// `-jump_strength` under constant gravity.
    pub fn jump_arc_frames(&self) -> u32 {
        (2.0 * self.jump_strength.abs() / self.gravity).ceil() as u32
    }

    /// Minimum ticks between spawns. Gaps below this could place two ground
    /// obstacles closer than one jump arc, which is unclearable.
    pub fn safety_floor_frames(&self) -> u32 {
        self.jump_arc_frames() + self.reaction_margin_frames
    }

    /// Cumulative kind weights, normalized to sum 1.0
    pub fn cumulative_weights(&self) -> [f32; 4] {
        let total: f32 = self.spawn_weights.iter().sum();
        let mut acc = 0.0;
        let mut out = [0.0; 4];
        for (i, w) in self.spawn_weights.iter().enumerate() {
            acc += w / total;
            out[i] = acc;
        }
        out[3] = 1.0;
        out
    }

    /// Parse tuning from a JSON balance patch
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_jump_arc_matches_hand_calc() {
        let t = Tuning::default();
        // |−15| * 2 / 0.8 = 37.5 → 38 ticks
        assert_eq!(t.jump_arc_frames(), 38);
        assert_eq!(t.safety_floor_frames(), 38 + t.reaction_margin_frames);
    }

    #[test]
    fn cumulative_weights_normalize_and_close() {
        let mut t = Tuning::default();
        t.spawn_weights = [2.0, 2.0, 2.0, 2.0];
        let cum = t.cumulative_weights();
        assert!((cum[0] - 0.25).abs() < 1e-6);
        assert!((cum[1] - 0.5).abs() < 1e-6);
        assert!((cum[2] - 0.75).abs() < 1e-6);
        assert_eq!(cum[3], 1.0);
    }

    #[test]
    fn json_round_trip_preserves_defaults() {
        let t = Tuning::default();
        let json = t.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), t);
    }

    #[test]
    fn balance_patch_edits_gap_bounds_by_name() {
        // Hand-edited patches address the gap bounds as named fields, not a
        // positional pair
        let json = Tuning::default().to_json().unwrap();
        assert!(json.contains("relaxed_gap_min_px"));
        assert!(json.contains("relaxed_gap_max_px"));

        let t = Tuning::from_json(r#"{"relaxed_gap_min_px": 600.0}"#).unwrap();
        assert_eq!(t.relaxed_gap_min_px, 600.0);
        assert_eq!(t.relaxed_gap_max_px, Tuning::default().relaxed_gap_max_px);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let t = Tuning::from_json(r#"{"gravity": 1.2}"#).unwrap();
        assert_eq!(t.gravity, 1.2);
        assert_eq!(t.jump_strength, Tuning::default().jump_strength);
    }
}
