//! Swarm Pong entry point
//!
//! Headless native runner: builds a simulation, drives it for a number of
//! frames and prints the final snapshot as JSON.
//!
//! ```text
//! swarm-pong [--config <path>] [--frames <n>] [--seed <n>] [--hold-up] [--hold-down] [--realtime]
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::Parser;
    use swarm_pong::{ConfigError, InputState, RenderState, Renderer};

    /// Headless many-ball Pong runner
    #[derive(Parser, Debug, Clone, PartialEq)]
    #[command(version, about)]
    pub struct Args {
        /// JSON settings file (defaults apply to missing fields)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Frames to run (600 is 10 s at 60 Hz)
        #[arg(long, default_value_t = 600)]
        frames: usize,

        /// Override the seed from the settings
        #[arg(long)]
        seed: Option<u64>,

        /// Hold the player paddle's up key for the whole run
        #[arg(long)]
        hold_up: bool,

        /// Hold the player paddle's down key for the whole run
        #[arg(long)]
        hold_down: bool,

        /// Pace frames against the wall clock instead of running flat out
        #[arg(long)]
        realtime: bool,
    }

    impl Args {
        fn input(&self) -> InputState {
            InputState {
                move_up: self.hold_up,
                move_down: self.hold_down,
            }
        }
    }

    #[derive(Debug, thiserror::Error)]
    pub enum RunError {
        #[error(transparent)]
        Config(#[from] ConfigError),
        #[error("failed to encode final snapshot: {0}")]
        Encode(#[from] serde_json::Error),
    }

    /// Logs the left-exit counter whenever it changes and keeps the last frame
    #[derive(Default)]
    pub struct LogRenderer {
        last: RenderState,
    }

    impl Renderer for LogRenderer {
        fn present(&mut self, state: &RenderState) {
            if state.left_exits != self.last.left_exits {
                log::info!("Frame {}: lost {}", state.frame, state.left_exits);
            }
            self.last.clone_from(state);
        }
    }

    pub fn run(args: Args) -> Result<(), RunError> {
        use std::time::{Duration, Instant};

        use swarm_pong::consts::FRAME_DT;
        use swarm_pong::{Driver, SimConfig, Simulation};

        let mut config = match &args.config {
            Some(path) => SimConfig::load(path)?,
            None => SimConfig::default(),
        };
        if let Some(seed) = args.seed {
            config.seed = seed;
        }

        let sim = Simulation::new(config)?;
        let mut driver = Driver::new(sim, args.input(), LogRenderer::default());

        if args.realtime {
            let frame_time = Duration::from_secs_f32(FRAME_DT);
            let mut last = Instant::now();
            for _ in 0..args.frames {
                std::thread::sleep(frame_time.saturating_sub(last.elapsed()));
                let now = Instant::now();
                driver.frame(now.duration_since(last).as_secs_f32());
                last = now;
            }
        } else {
            let summary = driver.run_frames(args.frames, FRAME_DT);
            log::info!(
                "Ran {} steps: {} lost left, {} out right, {} paddle hits, {} wall hits",
                summary.steps,
                summary.report.left_exits,
                summary.report.right_exits,
                summary.report.paddle_hits,
                summary.report.wall_hits
            );
        }

        let json = serde_json::to_string_pretty(&driver.renderer().last)?;
        println!("{json}");
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn args(list: &[&str]) -> Result<Args, clap::Error> {
            Args::try_parse_from(std::iter::once("swarm-pong").chain(list.iter().copied()))
        }

        #[test]
        fn test_defaults() {
            let parsed = args(&[]).expect("no args");
            assert_eq!(parsed.config, None);
            assert_eq!(parsed.frames, 600);
            assert_eq!(parsed.seed, None);
            assert_eq!(parsed.input(), InputState::default());
            assert!(!parsed.realtime);
        }

        #[test]
        fn test_all_flags() {
            let parsed = args(&[
                "--config", "arena.json", "--frames", "120", "--seed", "7", "--hold-up", "--hold-down",
                "--realtime",
            ])
            .expect("valid args");
            assert_eq!(parsed.config, Some(PathBuf::from("arena.json")));
            assert_eq!(parsed.frames, 120);
            assert_eq!(parsed.seed, Some(7));
            assert!(parsed.input().move_up && parsed.input().move_down);
            assert!(parsed.realtime);
        }

        #[test]
        fn test_equals_form_accepted() {
            let parsed = args(&["--frames=120", "--seed=5"]).expect("valid args");
            assert_eq!(parsed.frames, 120);
            assert_eq!(parsed.seed, Some(5));
        }

        #[test]
        fn test_bad_numbers_rejected() {
            assert!(args(&["--frames", "many"]).is_err());
            assert!(args(&["--seed"]).is_err());
            assert!(args(&["--seed", "-3"]).is_err());
        }

        #[test]
        fn test_unknown_args_rejected() {
            assert!(args(&["--fullscreen"]).is_err());
            assert!(args(&["--sed", "5"]).is_err());
        }

        #[test]
        fn test_missing_config_file_fails_run() {
            let parsed = args(&["--config", "/nonexistent/swarm-pong.json", "--frames", "1"])
                .expect("valid args");
            assert!(matches!(run(parsed), Err(RunError::Config(ConfigError::Io(_)))));
        }

        #[test]
        fn test_encode_failure_is_an_error() {
            let err = serde_json::from_str::<RenderState>("{").expect_err("truncated json");
            let err = RunError::from(err);
            assert!(matches!(err, RunError::Encode(_)));
            assert!(err.to_string().starts_with("failed to encode final snapshot"));
        }

        #[test]
        fn test_log_renderer_keeps_last_frame() {
            let mut renderer = LogRenderer::default();
            let state = RenderState {
                frame: 3,
                left_exits: 2,
                ..RenderState::default()
            };
            renderer.present(&state);
            assert_eq!(renderer.last, state);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    env_logger::init();
    log::info!("Swarm Pong (headless) starting...");

    let args = match <native::Args as clap::Parser>::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Help and version requests print here and exit 0
            let _ = e.print();
            return if e.use_stderr() {
                std::process::ExitCode::FAILURE
            } else {
                std::process::ExitCode::SUCCESS
            };
        }
    };

    match native::run(args) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless runner on wasm; embedders drive `swarm_pong::Driver` directly
}
