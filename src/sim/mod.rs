//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (row-major blocks)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{
    block_bounce, circle_rect_overlap, clamp_paddle_x, is_out_of_bounds, paddle_bounce,
};
pub use level::{create_blocks, rows_for_level};
pub use state::{Ball, Block, GamePhase, GameState, GameStats, Paddle, Size, Snapshot};
pub use tick::{handle_commands, handle_input, steer_paddle, tick};
