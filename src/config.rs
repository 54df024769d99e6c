//! Tuning constants
//!
//! Every physics and spawning constant is data, not code, so tests can run
//! with deterministic values and hosts can load variants from JSON.

use std::ops::RangeInclusive;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Simulation tuning. Missing JSON fields fall back to the defaults in [`crate::consts`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === World ===
    pub world_width: f32,
    pub world_height: f32,
    /// Ticks per second the per-frame constants are tuned for
    pub reference_rate: f32,

    // === Actor ===
    /// Downward acceleration per reference frame²
    pub gravity: f32,
    /// Vertical velocity a flap sets (negative is up)
    pub flap_strength: f32,
    pub actor_width: f32,
    pub actor_height: f32,

    // === Obstacles ===
    /// Horizontal distance per reference frame
    pub obstacle_speed: f32,
    pub obstacle_width: f32,
    pub gap_size: f32,
    /// Minimum solid height above and below every gap
    pub min_gap_margin: f32,
    /// Seconds between spawns
    pub spawn_interval: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            reference_rate: REFERENCE_RATE,

            gravity: GRAVITY,
            flap_strength: FLAP_STRENGTH,
            actor_width: ACTOR_SIZE,
            actor_height: ACTOR_SIZE,

            obstacle_speed: OBSTACLE_SPEED,
            obstacle_width: OBSTACLE_WIDTH,
            gap_size: GAP_SIZE,
            min_gap_margin: MIN_GAP_MARGIN,
            spawn_interval: SPAWN_INTERVAL,
        }
    }
}

impl Config {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("reference_rate", self.reference_rate),
            ("gravity", self.gravity),
            ("actor_width", self.actor_width),
            ("actor_height", self.actor_height),
            ("obstacle_speed", self.obstacle_speed),
            ("obstacle_width", self.obstacle_width),
            ("gap_size", self.gap_size),
            ("spawn_interval", self.spawn_interval),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        // Flap may take any sign but never NaN/inf
        if !self.flap_strength.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "flap_strength",
                value: self.flap_strength,
            });
        }

        if !(self.min_gap_margin.is_finite() && self.min_gap_margin >= 0.0) {
            return Err(ConfigError::NegativeMargin(self.min_gap_margin));
        }

        // The actor must start inside the world
        let spawn = self.actor_spawn();
        if spawn.x + self.actor_width > self.world_width
            || spawn.y + self.actor_height > self.world_height
        {
            return Err(ConfigError::ActorTooLarge {
                width: self.actor_width,
                height: self.actor_height,
            });
        }

        if self.gap_top_range().is_none() {
            return Err(ConfigError::EmptyGapRange {
                gap_size: self.gap_size,
                min_margin: self.min_gap_margin,
                world_height: self.world_height,
            });
        }

        Ok(())
    }

    /// Range `gap_top` is drawn from, `None` when the gap plus margins overflow the world
    pub fn gap_top_range(&self) -> Option<RangeInclusive<f32>> {
        let lo = self.min_gap_margin;
        let hi = self.world_height - self.gap_size - self.min_gap_margin;
        (lo <= hi).then_some(lo..=hi)
    }

    /// Where a fresh actor appears (top-left of its box)
    pub fn actor_spawn(&self) -> Vec2 {
        Vec2::new(self.world_width / 4.0, self.world_height / 2.0)
    }

    pub fn actor_size(&self) -> Vec2 {
        Vec2::new(self.actor_width, self.actor_height)
    }

    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.world_width, self.world_height)
    }

    /// Convert a tick duration in seconds to reference frames
    #[inline]
    pub fn frames(&self, dt: f32) -> f32 {
        dt * self.reference_rate
    }
}
