//! Session state and lifecycle
//!
//! A [`Session`] owns the tuning, the seeded RNG and the current [`Round`].
//! Resetting swaps in a brand-new round; the RNG stream keeps going so
//! consecutive rounds see different obstacles while a given seed and input
//! sequence still replays exactly.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::obstacle::Obstacle;
use super::spawner::Spawner;
use crate::config::Config;
use crate::error::ConfigError;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Actor died; world is frozen until a reset
    GameOver,
}

/// Why the actor died
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    /// Hit an obstacle's solid zone
    Collision,
    /// Left the world through the top or bottom
    OutOfBounds,
}

/// Things that happened during the last tick (for audio/HUD hosts)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Flapped,
    Spawned { id: u32 },
    Scored { score: u32 },
    Died { cause: DeathCause },
    Reset,
}

/// Everything that belongs to one play-through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub actor: Actor,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Obstacles passed this round
    pub score: u32,
    pub phase: GamePhase,
    pub spawner: Spawner,
    /// Ticks simulated while playing
    pub ticks: u64,
    /// Next obstacle ID
    pub(super) next_id: u32,
}

impl Round {
    pub fn new(config: &Config) -> Self {
        Self {
            actor: Actor::spawn(config),
            obstacles: Vec::new(),
            score: 0,
            phase: GamePhase::Playing,
            spawner: Spawner::new(),
            ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new obstacle ID
    pub(super) fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// A play session: tuning, random source and the current round
#[derive(Debug, Clone)]
pub struct Session {
    pub(super) config: Config,
    seed: u64,
    pub(super) rng: Pcg32,
    pub(super) round: Round,
    pub(super) events: Vec<GameEvent>,
}

impl Session {
    /// Validate `config` and start the first round
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!("New session (seed {seed})");
        Ok(Self {
            round: Round::new(&config),
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn actor(&self) -> &Actor {
        &self.round.actor
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.round.obstacles
    }

    pub fn score(&self) -> u32 {
        self.round.score
    }

    pub fn phase(&self) -> GamePhase {
        self.round.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.round.phase == GamePhase::GameOver
    }

    /// Events recorded by the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Impulse the actor. No-op unless playing with a live actor.
    pub fn flap(&mut self) -> bool {
        if self.round.phase != GamePhase::Playing || !self.round.actor.alive {
            return false;
        }
        self.round.actor.impulse(self.config.flap_strength);
        self.events.push(GameEvent::Flapped);
        true
    }

    /// Start a fresh round. No-op while still playing.
    pub fn reset(&mut self) -> bool {
        if self.round.phase != GamePhase::GameOver {
            return false;
        }
        log::info!(
            "Round over after {} ticks with score {}, resetting",
            self.round.ticks,
            self.round.score
        );
        self.round = Round::new(&self.config);
        self.events.push(GameEvent::Reset);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_initial_state() {
        let session = Session::new(Config::default(), 1).unwrap();
        assert_eq!(session.seed(), 1);
        assert_eq!(session.phase(), GamePhase::Playing);
        assert_eq!(session.score(), 0);
        assert!(session.obstacles().is_empty());
        assert!(session.actor().alive);
        assert_eq!(session.actor().vel_y, 0.0);
        assert_eq!(session.actor().pos, session.config().actor_spawn());
        assert_eq!(session.round().spawner.elapsed, 0.0);
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let config = Config {
            gap_size: 550.0,
            ..Default::default()
        };
        assert!(matches!(
            Session::new(config, 1),
            Err(ConfigError::EmptyGapRange { .. })
        ));
    }

    #[test]
    fn test_reset_while_playing_is_noop() {
        let mut session = Session::new(Config::default(), 1).unwrap();
        session.round.actor.vel_y = 3.0;
        assert!(!session.reset());
        assert_eq!(session.actor().vel_y, 3.0);
        assert!(session.events().is_empty());
    }

    #[test]
    fn test_flap_while_game_over_is_noop() {
        let mut session = Session::new(Config::default(), 1).unwrap();
        session.round.actor.kill();
        session.round.phase = GamePhase::GameOver;
        assert!(!session.flap());
        assert_eq!(session.actor().vel_y, 0.0);
    }

    #[test]
    fn test_reset_restores_fresh_round() {
        let mut session = Session::new(Config::default(), 9).unwrap();
        let fresh = session.round().clone();

        session.round.actor.pos.y = 12.0;
        session.round.actor.kill();
        session.round.score = 4;
        session.round.ticks = 300;
        session.round.spawner.elapsed = 0.7;
        let id = session.round.next_obstacle_id();
        session.round.obstacles.push(Obstacle::new(id, 50.0, 52.0, 100.0, 250.0));
        session.round.phase = GamePhase::GameOver;

        assert!(session.reset());
        assert_eq!(session.round(), &fresh);
        assert_eq!(session.events(), &[GameEvent::Reset]);
    }

    #[test]
    fn test_obstacle_ids_are_sequential() {
        let mut round = Round::new(&Config::default());
        assert_eq!(round.next_obstacle_id(), 1);
        assert_eq!(round.next_obstacle_id(), 2);
    }
}
