//! Collision detection
//!
//! Everything here is axis-aligned boxes. Overlap uses open intervals:
//! boxes that only share an edge do not collide, matching the strict
//! comparisons in [`Actor::out_of_bounds`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::obstacle::Obstacle;

/// Axis-aligned bounding box, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from its top-left corner and size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// True if the interiors overlap (shared edges don't count)
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// True if a live actor overlaps any obstacle's solid zones
pub fn collides(actor: &Actor, obstacles: &[Obstacle], world_height: f32) -> bool {
    if !actor.alive {
        return false;
    }
    let actor_box = actor.bounding_box();
    obstacles
        .iter()
        .any(|obstacle| obstacle.overlaps(&actor_box, world_height))
}
