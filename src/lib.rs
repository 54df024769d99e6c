//! Flappy core - simulation for a side-scrolling flap-and-dodge game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, lifecycle)
//! - `config`: Data-driven tuning constants with validation
//! - `error`: Configuration errors
//!
//! Rendering, audio and windowing live outside this crate. Hosts feed
//! [`sim::InputEvent`]s and frame deltas in, and read a
//! [`sim::RenderSnapshot`] back out.

pub mod config;
pub mod error;
pub mod sim;

pub use config::Config;
pub use error::ConfigError;

/// Game configuration defaults
pub mod consts {
    /// Fixed simulation timestep (60 Hz, the rate the physics constants are tuned for)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Ticks per second the per-frame constants below are expressed in
    pub const REFERENCE_RATE: f32 = 60.0;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 400.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Downward acceleration (units per reference frame²)
    pub const GRAVITY: f32 = 0.25;
    /// Vertical velocity set by a flap (negative is up)
    pub const FLAP_STRENGTH: f32 = -6.5;

    /// Actor bounding box
    pub const ACTOR_SIZE: f32 = 34.0;

    /// Obstacle defaults
    pub const OBSTACLE_SPEED: f32 = 3.0;
    pub const OBSTACLE_WIDTH: f32 = 52.0;
    pub const GAP_SIZE: f32 = 150.0;
    /// Minimum solid height kept above and below every gap
    pub const MIN_GAP_MARGIN: f32 = 50.0;
    /// Seconds between obstacle spawns
    pub const SPAWN_INTERVAL: f32 = 1.5;
}
