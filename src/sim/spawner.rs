//! Periodic obstacle spawning

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;
use crate::config::Config;

/// Emits one obstacle every `spawn_interval` seconds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    /// Seconds since the last spawn (or round start)
    pub elapsed: f32,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate `dt` and, once the interval is reached, build a new obstacle
    /// at the right edge. The timer restarts from zero; leftover time is dropped.
    pub fn maybe_spawn<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        config: &Config,
        rng: &mut R,
        id: u32,
    ) -> Option<Obstacle> {
        self.elapsed += dt;
        if self.elapsed < config.spawn_interval {
            return None;
        }
        self.elapsed = 0.0;

        // Config::validate rejects this up front
        let Some(range) = config.gap_top_range() else {
            log::warn!("Gap range is empty, skipping spawn");
            return None;
        };
        let gap_top = rng.random_range(range);
        Some(Obstacle::new(
            id,
            config.world_width,
            config.obstacle_width,
            gap_top,
            gap_top + config.gap_size,
        ))
    }
}
