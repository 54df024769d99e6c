//! Render snapshot handed to the host after each tick
//!
//! An owned copy: the renderer can hold on to it while the next step runs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::obstacle::Obstacle;
use super::state::{GamePhase, Session};

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub world_size: Vec2,
    pub actor: Actor,
    /// Obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub phase: GamePhase,
}

impl RenderSnapshot {
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    /// Banner shown over a frozen world
    pub fn banner(&self) -> Option<&'static str> {
        match self.phase {
            GamePhase::Playing => None,
            GamePhase::GameOver => Some("Game Over! Press R to restart"),
        }
    }
}

impl Session {
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            world_size: self.config.world_size(),
            actor: self.round.actor.clone(),
            obstacles: self.round.obstacles.clone(),
            score: self.round.score,
            phase: self.round.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_snapshot_mirrors_session() {
        let config = Config {
            spawn_interval: 0.1,
            ..Default::default()
        };
        let mut session = Session::new(config, 3).unwrap();
        for _ in 0..12 {
            tick(&mut session, &TickInput::flap(), crate::consts::SIM_DT);
        }
        let snapshot = session.snapshot();
        assert_eq!(snapshot.world_size, Vec2::new(400.0, 600.0));
        assert_eq!(&snapshot.actor, session.actor());
        assert_eq!(snapshot.obstacles.as_slice(), session.obstacles());
        assert_eq!(snapshot.score, session.score());
        assert_eq!(snapshot.phase, GamePhase::Playing);
        assert_eq!(snapshot.banner(), None);
        assert_eq!(snapshot.score_text(), "Score: 0");
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut session = Session::new(Config::default(), 3).unwrap();
        let before = session.snapshot();
        tick(&mut session, &TickInput::default(), crate::consts::SIM_DT);
        assert_ne!(before.actor.pos, session.actor().pos);
    }

    #[test]
    fn test_snapshot_serializes() {
        let session = Session::new(Config::default(), 3).unwrap();
        let json = serde_json::to_string(&session.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"Playing\""));
        let back: RenderSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session.snapshot());
    }
}
