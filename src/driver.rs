//! Fixed timestep frame driver
//!
//! The host calls [`FrameDriver::frame`] from its per-frame callback with a
//! millisecond clock. Start/pause edges and pointer moves are applied once
//! per frame, then the simulation runs as many 60 Hz ticks as the elapsed
//! time covers. Held keys move the paddle once per tick, so keyboard speed
//! does not depend on the display rate.

use crate::consts::{MAX_FRAME_MS, MAX_SUBSTEPS, SIM_DT_MS};
use crate::input::InputSampler;
use crate::sim::{GamePhase, GameState, handle_commands, steer_paddle, tick};

#[derive(Debug, Clone, Default)]
pub struct FrameDriver {
    accumulator: f64,
    last_time: Option<f64>,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one displayed frame. Returns the number of ticks executed.
    pub fn frame(&mut self, state: &mut GameState, input: &mut InputSampler, now_ms: f64) -> u32 {
        let sample = input.sample();
        handle_commands(state, &sample);
        input.clear_edges();
        if sample.pointer_x > 0.0 {
            steer_paddle(state, &sample);
        }

        let elapsed = self
            .last_time
            .map_or(0.0, |last| (now_ms - last).clamp(0.0, MAX_FRAME_MS));
        self.last_time = Some(now_ms);

        if !advances(state.phase()) {
            // Stopped: the resume frame starts a fresh clock
            self.accumulator = 0.0;
            self.last_time = None;
            return 0;
        }

        self.accumulator += elapsed;
        let mut substeps = 0;
        while self.accumulator >= SIM_DT_MS && substeps < MAX_SUBSTEPS {
            steer_paddle(state, &sample);
            tick(state);
            self.accumulator -= SIM_DT_MS;
            substeps += 1;

            if !advances(state.phase()) {
                self.accumulator = 0.0;
                break;
            }
        }

        if substeps == MAX_SUBSTEPS {
            // Too slow to keep up; drop the backlog instead of spiraling
            self.accumulator = self.accumulator.min(SIM_DT_MS);
        }

        substeps
    }
}

fn advances(phase: GamePhase) -> bool {
    matches!(phase, GamePhase::Playing | GamePhase::LevelComplete)
}
