//! Game balance configuration
//!
//! Defaults reproduce the classic layout: 800x600 canvas, ten columns of
//! blocks, three lives. Hosts may load overrides from JSON.

use serde::{Deserialize, Serialize};

/// Row colors as 0xRRGGBB, cycled top to bottom
pub const BLOCK_COLORS: [u32; 8] = [
    0xFF6B6B, // Red
    0x4ECDC4, // Teal
    0x45B7D1, // Blue
    0x96CEB4, // Green
    0xFFEAA7, // Yellow
    0xDDA0DD, // Plum
    0xFFB347, // Orange
    0x87CEEB, // Sky Blue
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    /// Launch speed on level 1 (pixels per tick)
    pub initial_speed: f32,
    pub max_speed: f32,
    /// Launch speed gained per level cleared
    pub speed_increment: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 8.0,
            initial_speed: 5.0,
            max_speed: 12.0,
            speed_increment: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub width: f32,
    pub height: f32,
    /// Keyboard movement per tick
    pub speed: f32,
    /// Top edge of the paddle
    pub y: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 12.0,
            speed: 8.0,
            y: 500.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockGridConfig {
    pub width: f32,
    pub height: f32,
    pub cols: u32,
    pub padding: f32,
    /// Distance from the canvas top to the first row
    pub margin: f32,
}

impl Default for BlockGridConfig {
    fn default() -> Self {
        Self {
            width: 70.0,
            height: 20.0,
            cols: 10,
            padding: 4.0,
            margin: 60.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub initial_lives: u8,
    /// Points for a bottom-row block; row `n` is worth `(n + 1)` times this
    pub points_per_block: u64,
    pub level_complete_bonus: u64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            initial_lives: 3,
            points_per_block: 10,
            level_complete_bonus: 500,
        }
    }
}

/// Complete balance sheet for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub canvas: CanvasConfig,
    pub ball: BallConfig,
    pub paddle: PaddleConfig,
    pub blocks: BlockGridConfig,
    pub rules: RulesConfig,
    pub palette: Vec<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            ball: BallConfig::default(),
            paddle: PaddleConfig::default(),
            blocks: BlockGridConfig::default(),
            rules: RulesConfig::default(),
            palette: BLOCK_COLORS.to_vec(),
        }
    }
}

impl GameConfig {
    /// Parse a config, filling missing sections and fields with defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Ball launch speed for a 1-based level, capped at `max_speed`
    pub fn launch_speed(&self, level: u32) -> f32 {
        let gained = self.ball.speed_increment * level.saturating_sub(1) as f32;
        (self.ball.initial_speed + gained).min(self.ball.max_speed)
    }

    /// Paddle x that centers it on the canvas
    pub fn paddle_home_x(&self) -> f32 {
        self.canvas.width / 2.0 - self.paddle.width / 2.0
    }
}
