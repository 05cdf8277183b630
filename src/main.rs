//! Block Breaker entry point
//!
//! Runs the simulation headless with an autopilot on a simulated 60 fps
//! clock. Usage: `block-breaker [seed] [config.json]`. Set `RUST_LOG=info`
//! to follow levels and lost lives.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use block_breaker::sim::{GamePhase, GameState};
    use block_breaker::{FrameDriver, GameConfig, InputSampler, Key};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Ten minutes of play
    const MAX_FRAMES: u64 = 60 * 60 * 10;
    const DEFAULT_SEED: u64 = 0x5EED;

    fn load_config(path: Option<String>) -> GameConfig {
        let Some(path) = path else {
            return GameConfig::default();
        };
        let parsed = std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| GameConfig::from_json(&json).map_err(|e| e.to_string()));
        match parsed {
            Ok(config) => {
                log::info!("Loaded config from {path}");
                config
            }
            Err(e) => {
                log::error!("Config {path} unusable ({e}), using defaults");
                GameConfig::default()
            }
        }
    }

    /// Chase the ball with a drifting offset so bounces vary
    fn autopilot(state: &GameState, input: &mut InputSampler, frame: u64) {
        let ball = state.ball();
        let half_paddle = state.paddle().size.width / 2.0;
        let t = frame as f32 * 0.01;
        let offset = (t.sin() * 0.6 + (t * 0.7).sin() * 0.3) * half_paddle;
        let lead = ball.vel.x * 4.0;
        input.pointer_moved(ball.pos.x + lead + offset);
    }

    pub fn run() {
        let mut args = std::env::args().skip(1);
        let seed = args
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SEED);
        let config = load_config(args.next());

        log::info!("Block Breaker (headless) starting, seed {seed}");

        let mut state = GameState::with_config(seed, config);
        let mut input = InputSampler::new();
        let mut driver = FrameDriver::new();
        input.key_down(Key::Start);

        let mut frame = 0;
        while frame < MAX_FRAMES {
            autopilot(&state, &mut input, frame);
            driver.frame(&mut state, &mut input, frame as f64 * FRAME_MS);
            if state.phase() == GamePhase::GameOver {
                break;
            }
            frame += 1;
        }

        let stats = state.stats();
        println!(
            "{:?} after {} ticks: score {}, level {}, lives {}, blocks {}/{}",
            state.phase(),
            state.time_ticks(),
            stats.score,
            stats.level,
            stats.lives,
            stats.blocks_remaining(),
            stats.total_blocks
        );

        match state.snapshot().to_json() {
            Ok(json) => log::debug!("Final snapshot: {json}"),
            Err(e) => log::warn!("Snapshot serialization failed: {e}"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The host page drives the simulation through the library API
}
