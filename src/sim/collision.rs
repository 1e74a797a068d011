//! AABB collision between the player and live obstacles
//!
//! Hitboxes are the sprite boxes inset by a fixed padding per side - a graze
//! that only touches sprite pixels should not read as a hit. The first
//! overlap found in a tick ends the match; later obstacles in the same tick
//! are irrelevant.

use glam::Vec2;

use crate::config::Tuning;
use crate::sim::state::{Obstacle, Player};

/// Axis-aligned box, `min` = top-left (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Shrink by `padding` on every side. Inverted boxes collapse to a point
    /// so an over-padded hitbox can never produce phantom overlaps.
    pub fn inset(&self, padding: f32) -> Self {
        let center = (self.min + self.max) * 0.5;
        Self {
            min: (self.min + Vec2::splat(padding)).min(center),
            max: (self.max - Vec2::splat(padding)).max(center),
        }
    }

    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Player hitbox: sprite box inset by the tuned padding
pub fn player_hitbox(player: &Player, tuning: &Tuning) -> Aabb {
    let (pos, size) = player.bounds();
    Aabb::new(pos, size).inset(tuning.player_hitbox_inset)
}

/// Obstacle hitbox: sprite box inset by the tuned padding
pub fn obstacle_hitbox(obstacle: &Obstacle, tuning: &Tuning) -> Aabb {
    Aabb::new(obstacle.pos, obstacle.size).inset(tuning.obstacle_hitbox_inset)
}

/// Scan live obstacles for the first hit against the player this tick.
/// Stops at the first overlap; at most one collision event matters.
pub fn first_hit(player: &Player, obstacles: &[Obstacle], tuning: &Tuning) -> Option<usize> {
    let hitbox = player_hitbox(player, tuning);
    obstacles
        .iter()
        .position(|o| hitbox.overlaps(&obstacle_hitbox(o, tuning)))
}
