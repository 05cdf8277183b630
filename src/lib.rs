//! Block Breaker - Breakout-style arcade simulation
//!
//! Core modules:
//! - `sim`: Fixed-step simulation (physics, collisions, levels, game phases)
//! - `input`: Per-frame input sampling with one-shot edges
//! - `driver`: Fixed timestep accumulator for the host's frame callback
//! - `config`: Data-driven game balance
//!
//! Rendering is left to the host: it reads [`sim::GameState`] or a
//! [`sim::Snapshot`] once per displayed frame.

pub mod config;
pub mod driver;
pub mod input;
pub mod sim;

pub use config::GameConfig;
pub use driver::FrameDriver;
pub use input::{InputSample, InputSampler, Key};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (60 Hz)
    pub const SIM_DT_MS: f64 = 1000.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame gap fed into the accumulator (tab switches, breakpoints)
    pub const MAX_FRAME_MS: f64 = 100.0;

    /// Paddle bounce angle bounds, measured from +x (30° and 150°)
    pub const MIN_BOUNCE_ANGLE: f32 = std::f32::consts::PI / 6.0;
    pub const MAX_BOUNCE_ANGLE: f32 = 5.0 * std::f32::consts::PI / 6.0;

    /// Difficulty caps at this many block rows
    pub const MAX_BLOCK_ROWS: u32 = 8;
    /// Rows on level 1 are `BASE_BLOCK_ROWS + 1`
    pub const BASE_BLOCK_ROWS: u32 = 3;

    /// Ball spawns this far above the paddle's top edge
    pub const BALL_SPAWN_ABOVE_PADDLE: f32 = 20.0;
    /// Respawn horizontal velocity is drawn from `[-SPREAD/2, SPREAD/2)`
    pub const BALL_SPAWN_SPREAD: f32 = 4.0;
    /// Fallback speed when a bounce sees a stationary ball
    pub const BALL_MIN_SPEED: f32 = 1.0;

    /// Delay between clearing a level and building the next (1 second)
    pub const LEVEL_COMPLETE_DELAY_TICKS: u32 = 60;
}
