//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (obstacles in spawn order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod clock;
pub mod collision;
pub mod input;
pub mod obstacle;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use actor::Actor;
pub use clock::Stepper;
pub use collision::{Aabb, collides};
pub use input::{InputEvent, InputQueue, TickInput};
pub use obstacle::Obstacle;
pub use snapshot::RenderSnapshot;
pub use spawner::Spawner;
pub use state::{DeathCause, GameEvent, GamePhase, Round, Session};
pub use tick::tick;
