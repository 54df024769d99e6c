//! The player-controlled actor

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::config::Config;

/// The single gravity-bound body the player steers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left of the bounding box; x never changes after spawn
    pub pos: Vec2,
    /// Vertical velocity per reference frame (positive is down)
    pub vel_y: f32,
    pub size: Vec2,
    pub alive: bool,
}

impl Actor {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel_y: 0.0,
            size,
            alive: true,
        }
    }

    /// Fresh actor at the configured start pose
    pub fn spawn(config: &Config) -> Self {
        Self::new(config.actor_spawn(), config.actor_size())
    }

    /// Apply gravity for `frames` reference frames (velocity first, then position)
    pub fn integrate(&mut self, gravity: f32, frames: f32) {
        self.vel_y += gravity * frames;
        self.pos.y += self.vel_y * frames;
    }

    /// Overwrite vertical velocity; not additive
    pub fn impulse(&mut self, strength: f32) {
        self.vel_y = strength;
    }

    /// Left the world vertically. Horizontal position is fixed, so only y matters.
    pub fn out_of_bounds(&self, world_height: f32) -> bool {
        self.pos.y + self.size.y > world_height || self.pos.y < 0.0
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }
}
