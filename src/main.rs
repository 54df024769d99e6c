//! Flappy core headless runner
//!
//! Drives a session the way a windowed host would: wall-clock frames feed a
//! fixed-step clock, a scripted pilot stands in for the keyboard, and the
//! final frame is reported instead of drawn.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use clap::Parser;

    use flappy_core::consts::SIM_DT;
    use flappy_core::sim::{GameEvent, InputEvent, InputQueue, Session, Stepper, tick};
    use flappy_core::{Config, ConfigError};

    #[derive(Parser)]
    #[command(name = "flappy-core")]
    #[command(about = "Run the flap-and-dodge simulation headless with a scripted pilot")]
    struct Args {
        /// JSON tuning file (defaults when omitted)
        config: Option<PathBuf>,
        /// RNG seed for obstacle gaps
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Fixed simulation steps to run
        #[arg(long, default_value_t = 3600)]
        ticks: u64,
        /// Wall-clock seconds per host frame
        #[arg(long, default_value_t = SIM_DT, value_parser = parse_frame_dt)]
        frame_dt: f32,
        /// Quit after this many rounds end
        #[arg(long)]
        max_rounds: Option<u32>,
        /// Print the final render snapshot as JSON
        #[arg(long)]
        json: bool,
    }

    /// Frame deltas must advance the clock, or the run never ends
    fn parse_frame_dt(s: &str) -> Result<f32, String> {
        let dt: f32 = s.parse().map_err(|e| format!("{e}"))?;
        if dt.is_finite() && dt > 0.0 {
            Ok(dt)
        } else {
            Err(format!("frame dt must be positive and finite, got {s}"))
        }
    }

    /// Flap when the actor's centre sinks below the gap it is heading for
    fn pilot_wants_flap(session: &Session) -> bool {
        let actor = session.actor();
        let config = session.config();
        let target = session
            .obstacles()
            .iter()
            .find(|o| o.right_edge() >= actor.pos.x)
            .map(|o| (o.gap_top + o.gap_bottom) / 2.0)
            .unwrap_or(config.world_height / 2.0);
        let centre = actor.pos.y + actor.size.y / 2.0;
        actor.vel_y >= 0.0 && centre > target + config.gap_size / 6.0
    }

    fn run(args: Args) -> Result<(), ConfigError> {
        let config = match &args.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        let mut session = Session::new(config, args.seed)?;
        let mut stepper = Stepper::default();
        let mut queue = InputQueue::new();

        let mut steps = 0u64;
        let mut rounds_over = 0u32;
        let mut best = 0u32;

        'frames: while steps < args.ticks {
            for _ in 0..stepper.advance(args.frame_dt) {
                if session.is_game_over() {
                    if args.max_rounds.is_some_and(|max| rounds_over >= max) {
                        queue.push(InputEvent::Quit);
                    } else {
                        queue.push(InputEvent::Reset);
                    }
                } else if pilot_wants_flap(&session) {
                    queue.push(InputEvent::Flap);
                }

                let input = queue.drain();
                if input.quit_requested() {
                    log::info!("Quit after {rounds_over} rounds");
                    break 'frames;
                }

                tick(&mut session, &input, stepper.step());
                steps += 1;

                for event in session.events() {
                    if let GameEvent::Died { cause } = event {
                        rounds_over += 1;
                        best = best.max(session.score());
                        log::info!(
                            "Round {rounds_over} ended ({cause:?}) with score {}",
                            session.score()
                        );
                    }
                }
                if steps >= args.ticks {
                    break 'frames;
                }
            }
        }
        best = best.max(session.score());

        let snapshot = session.snapshot();
        println!("Seed:        {}", session.seed());
        println!("Ticks:       {steps}");
        println!("Rounds over: {rounds_over}");
        println!("Best score:  {best}");
        println!("{}", snapshot.score_text());
        if let Some(banner) = snapshot.banner() {
            println!("{banner}");
        }
        if args.json {
            match serde_json::to_string_pretty(&snapshot) {
                Ok(json) => println!("{json}"),
                Err(e) => log::error!("Failed to encode snapshot: {e}"),
            }
        }
        Ok(())
    }

    pub fn main() -> ExitCode {
        env_logger::init();
        log::info!("Flappy core (headless) starting...");

        match run(Args::parse()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                log::error!("{e}");
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_frame_dt_must_advance_clock() {
            assert_eq!(parse_frame_dt("0.02"), Ok(0.02));
            assert!(parse_frame_dt("0").is_err());
            assert!(parse_frame_dt("-0.5").is_err());
            assert!(parse_frame_dt("NaN").is_err());
            assert!(parse_frame_dt("inf").is_err());
            assert!(parse_frame_dt("fast").is_err());
        }

        #[test]
        fn test_args_reject_zero_frame_dt() {
            assert!(Args::try_parse_from(["flappy-core", "--frame-dt", "0"]).is_err());
            let args = Args::try_parse_from(["flappy-core", "--ticks", "10"]).unwrap();
            assert_eq!(args.frame_dt, SIM_DT);
        }

        #[test]
        fn test_short_run_finishes() {
            let args =
                Args::try_parse_from(["flappy-core", "--ticks", "120", "--seed", "5"]).unwrap();
            assert!(run(args).is_ok());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    headless::main()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive the library directly
}
