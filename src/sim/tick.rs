//! Fixed timestep simulation tick
//!
//! Per-tick order:
//! 1. apply queued input in arrival order
//! 2. integrate the actor, killing it if it leaves the world
//! 3. spawner check, possibly appending one obstacle
//! 4. advance every obstacle, then test collision and passes against the
//!    actor's post-integration box
//! 5. a death this tick moves the round to `GameOver`
//! 6. prune obstacles that scrolled off the left edge

use super::collision::collides;
use super::input::{InputEvent, TickInput};
use super::state::{DeathCause, GameEvent, GamePhase, Session};

/// Advance the session by one step of `dt` seconds
pub fn tick(session: &mut Session, input: &TickInput, dt: f32) {
    session.events.clear();

    for event in &input.events {
        match event {
            InputEvent::Flap => {
                session.flap();
            }
            InputEvent::Reset => {
                session.reset();
            }
            // Owned by the host
            InputEvent::Quit => {}
        }
    }

    // Frozen world
    if session.round.phase == GamePhase::GameOver {
        return;
    }

    let Session {
        config,
        rng,
        round,
        events,
        ..
    } = session;

    round.ticks += 1;
    let frames = config.frames(dt);

    round.actor.integrate(config.gravity, frames);

    let death = if round.actor.out_of_bounds(config.world_height) {
        Some(DeathCause::OutOfBounds)
    } else {
        if let Some(obstacle) = round.spawner.maybe_spawn(dt, config, rng, round.next_id) {
            let id = round.next_obstacle_id();
            debug_assert_eq!(id, obstacle.id);
            log::debug!("Spawned obstacle {id} with gap at {:.1}", obstacle.gap_top);
            events.push(GameEvent::Spawned { id });
            round.obstacles.push(obstacle);
        }

        let distance = config.obstacle_speed * frames;
        for obstacle in &mut round.obstacles {
            obstacle.advance(distance);
        }

        if collides(&round.actor, &round.obstacles, config.world_height) {
            Some(DeathCause::Collision)
        } else {
            let actor_x = round.actor.pos.x;
            for obstacle in &mut round.obstacles {
                if obstacle.mark_passed_if_ready(actor_x) {
                    round.score += 1;
                    log::debug!("Passed obstacle {}, score {}", obstacle.id, round.score);
                    events.push(GameEvent::Scored { score: round.score });
                }
            }
            None
        }
    };

    if let Some(cause) = death {
        round.actor.kill();
        round.phase = GamePhase::GameOver;
        log::debug!("Actor died ({cause:?}) with score {}", round.score);
        events.push(GameEvent::Died { cause });
    }

    round.obstacles.retain(|obstacle| !obstacle.off_screen());
}
