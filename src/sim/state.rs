//! Game state and core simulation types
//!
//! `GameState` is the single owner of every entity. Hosts mutate it only
//! through the commands below and [`super::tick`], and read it through
//! getters or an owned [`Snapshot`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::clamp_paddle_x;
use super::level::create_blocks;
use crate::config::GameConfig;
use crate::consts::*;
use crate::input::InputSample;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for start
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Run ended, waiting for start
    GameOver,
    /// Level cleared, next level builds when the delay runs out
    LevelComplete,
    /// Reserved for a final-level ending; never entered by the core loop
    Victory,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The ball. `pos` is its center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
    /// Launch speed for the current level
    pub speed: f32,
}

/// The player's paddle. `pos` is its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Size,
    /// Keyboard movement per tick while a direction is held
    pub speed: f32,
}

impl Paddle {
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.width / 2.0
    }
}

/// A destructible block. `pos` is its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Unique per (row, col) within a level
    pub id: String,
    pub pos: Vec2,
    pub size: Size,
    /// 0xRRGGBB
    pub color: u32,
    pub points: u64,
    /// Once set, never cleared
    pub destroyed: bool,
}

impl Block {
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.size.width / 2.0, self.size.height / 2.0)
    }
}

/// Scoreboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub score: u64,
    pub level: u32,
    pub lives: u8,
    pub blocks_destroyed: u32,
    pub total_blocks: u32,
}

impl GameStats {
    pub fn new(initial_lives: u8) -> Self {
        Self {
            score: 0,
            level: 1,
            lives: initial_lives,
            blocks_destroyed: 0,
            total_blocks: 0,
        }
    }

    pub fn blocks_remaining(&self) -> u32 {
        self.total_blocks.saturating_sub(self.blocks_destroyed)
    }
}

/// Read-only copy of everything a renderer draws
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub stats: GameStats,
    pub ball: Ball,
    pub paddle: Paddle,
    pub blocks: Vec<Block>,
}

impl Snapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) rng: Pcg32,
    pub(crate) phase: GamePhase,
    pub(crate) stats: GameStats,
    pub(crate) ball: Ball,
    pub(crate) paddle: Paddle,
    pub(crate) blocks: Vec<Block>,
    /// Ticks left before the next level is built
    pub(crate) level_complete_ticks: u32,
    /// Simulation tick counter
    pub(crate) time_ticks: u64,
}

impl GameState {
    /// Create a game sitting in the menu, with the default balance
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, GameConfig::default())
    }

    pub fn with_config(seed: u64, config: GameConfig) -> Self {
        let ball = Ball {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: config.ball.radius,
            speed: config.launch_speed(1),
        };
        let paddle = Paddle {
            pos: Vec2::new(config.paddle_home_x(), config.paddle.y),
            size: Size::new(config.paddle.width, config.paddle.height),
            speed: config.paddle.speed,
        };
        let mut state = Self {
            stats: GameStats::new(config.rules.initial_lives),
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            ball,
            paddle,
            blocks: Vec::new(),
            level_complete_ticks: 0,
            time_ticks: 0,
            config,
        };
        state.reset_ball();
        state
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            stats: self.stats,
            ball: self.ball.clone(),
            paddle: self.paddle.clone(),
            blocks: self.blocks.clone(),
        }
    }

    /// Begin a fresh run. Only valid from the menu or after game over.
    pub fn start_game(&mut self) {
        if !matches!(self.phase, GamePhase::Menu | GamePhase::GameOver) {
            return;
        }
        self.stats = GameStats::new(self.config.rules.initial_lives);
        self.init_level(1);
        self.phase = GamePhase::Playing;
        log::info!("New game started ({} blocks)", self.stats.total_blocks);
    }

    /// Toggle between playing and paused; any other phase is left alone
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            other => other,
        };
    }

    /// Move the paddle from one input sample.
    ///
    /// An active pointer (x > 0) centers the paddle under it and wins over
    /// the arrow keys. The result is always clamped on-canvas.
    pub fn update_paddle(&mut self, input: &InputSample) {
        let paddle = &mut self.paddle;
        let target = if input.pointer_x > 0.0 {
            input.pointer_x - paddle.size.width / 2.0
        } else if input.left_held {
            paddle.pos.x - paddle.speed
        } else if input.right_held {
            paddle.pos.x + paddle.speed
        } else {
            paddle.pos.x
        };
        paddle.pos.x = clamp_paddle_x(target, paddle.size.width, self.config.canvas.width);
    }

    /// Build blocks for `level` and put ball and paddle back home
    pub(crate) fn init_level(&mut self, level: u32) {
        self.blocks = create_blocks(level, &self.config.palette, &self.config);
        self.stats.level = level;
        self.stats.total_blocks = self.blocks.len() as u32;
        self.stats.blocks_destroyed = 0;
        self.ball.speed = self.config.launch_speed(level);
        self.reset_ball();
        self.paddle.pos = Vec2::new(self.config.paddle_home_x(), self.config.paddle.y);
        log::info!(
            "Level {}: {} blocks, launch speed {}",
            level,
            self.blocks.len(),
            self.ball.speed
        );
    }

    /// Put the ball above the paddle with a random sideways drift
    pub(crate) fn reset_ball(&mut self) {
        let half_spread = BALL_SPAWN_SPREAD / 2.0;
        self.ball.pos = Vec2::new(
            self.config.canvas.width / 2.0,
            self.config.paddle.y - BALL_SPAWN_ABOVE_PADDLE,
        );
        self.ball.vel = Vec2::new(
            self.rng.random_range(-half_spread..half_spread),
            -self.ball.speed,
        )
        .clamp_length_max(self.config.ball.max_speed);
    }

    pub(crate) fn all_blocks_destroyed(&self) -> bool {
        !self.blocks.is_empty() && self.blocks.iter().all(|b| b.destroyed)
    }
}
