//! Level layout generation
//!
//! Each level is a uniform grid. Deeper levels add rows until the cap; the
//! top rows pay the most.

use glam::Vec2;

use super::state::{Block, Size};
use crate::config::GameConfig;
use crate::consts::{BASE_BLOCK_ROWS, MAX_BLOCK_ROWS};

/// Number of block rows on a 1-based level
pub fn rows_for_level(level: u32) -> u32 {
    BASE_BLOCK_ROWS.saturating_add(level).min(MAX_BLOCK_ROWS)
}

/// Lay out the blocks for `level`, row-major from the top-left
///
/// Colors cycle through `palette` by row. Block ids are `block-{row}-{col}`.
pub fn create_blocks(level: u32, palette: &[u32], config: &GameConfig) -> Vec<Block> {
    let grid = &config.blocks;
    let rows = rows_for_level(level);
    let mut blocks = Vec::with_capacity((rows * grid.cols) as usize);

    for row in 0..rows {
        let color = if palette.is_empty() {
            0xFFFFFF
        } else {
            palette[row as usize % palette.len()]
        };
        let points = config.rules.points_per_block * u64::from(row + 1);
        let y = row as f32 * (grid.height + grid.padding) + grid.margin;

        for col in 0..grid.cols {
            let x = col as f32 * (grid.width + grid.padding) + grid.padding;
            blocks.push(Block {
                id: format!("block-{row}-{col}"),
                pos: Vec2::new(x, y),
                size: Size::new(grid.width, grid.height),
                color,
                points,
                destroyed: false,
            });
        }
    }

    log::debug!("Generated {} blocks ({} rows) for level {}", blocks.len(), rows, level);
    blocks
}
