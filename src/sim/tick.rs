//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation by one 60 Hz step.

use super::collision::{block_bounce, circle_rect_overlap, is_out_of_bounds, paddle_bounce};
use super::state::{GamePhase, GameState};
use crate::consts::LEVEL_COMPLETE_DELAY_TICKS;
use crate::input::InputSample;

/// Apply one input sample: start/pause edges, then paddle movement
///
/// Callers clear the sample's edges afterwards.
pub fn handle_input(state: &mut GameState, input: &InputSample) {
    handle_commands(state, input);
    steer_paddle(state, input);
}

/// Start/pause edges only
pub fn handle_commands(state: &mut GameState, input: &InputSample) {
    if input.pause_edge {
        state.toggle_pause();
    }
    if input.start_edge {
        state.start_game();
    }
}

/// Move the paddle for one tick of held keys, or onto the pointer
///
/// Only lands while playing; a paused game keeps its paddle where it was.
pub fn steer_paddle(state: &mut GameState, input: &InputSample) {
    if state.phase == GamePhase::Playing {
        state.update_paddle(input);
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState) {
    match state.phase {
        GamePhase::Playing => {}
        GamePhase::LevelComplete => {
            state.level_complete_ticks = state.level_complete_ticks.saturating_sub(1);
            if state.level_complete_ticks == 0 {
                state.init_level(state.stats.level);
                state.phase = GamePhase::Playing;
            }
            return;
        }
        GamePhase::Menu | GamePhase::Paused | GamePhase::GameOver | GamePhase::Victory => return,
    }

    state.time_ticks += 1;
    let canvas = state.config.canvas;

    // Integrate, reverting the axis that crossed a wall
    let ball = &mut state.ball;
    let old_pos = ball.pos;
    let mut pos = old_pos + ball.vel;
    if pos.x <= ball.radius || pos.x >= canvas.width - ball.radius {
        ball.vel.x = -ball.vel.x;
        pos.x = old_pos.x;
    }
    if pos.y <= ball.radius {
        ball.vel.y = -ball.vel.y;
        pos.y = old_pos.y;
    }
    ball.pos = pos;

    // The floor is open
    if is_out_of_bounds(ball, canvas.height) {
        lose_life(state);
        return;
    }

    let paddle = &state.paddle;
    if circle_rect_overlap(state.ball.pos, state.ball.radius, paddle.pos, paddle.size) {
        state.ball.vel = paddle_bounce(&state.ball, paddle);
    }

    // First live block in row-major order wins; at most one per tick
    let ball = &mut state.ball;
    let hit = state
        .blocks
        .iter_mut()
        .find(|b| !b.destroyed && circle_rect_overlap(ball.pos, ball.radius, b.pos, b.size));
    let Some(block) = hit else {
        return;
    };
    ball.vel = block_bounce(ball, block);
    block.destroyed = true;
    state.stats.score += block.points;
    state.stats.blocks_destroyed += 1;

    if state.all_blocks_destroyed() {
        complete_level(state);
    }
}

fn lose_life(state: &mut GameState) {
    state.stats.lives = state.stats.lives.saturating_sub(1);
    log::debug!("Ball lost, {} lives left", state.stats.lives);
    if state.stats.lives == 0 {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over: score {} on level {}",
            state.stats.score,
            state.stats.level
        );
    }
    state.reset_ball();
}

fn complete_level(state: &mut GameState) {
    state.stats.score += state.config.rules.level_complete_bonus;
    state.stats.level += 1;
    state.level_complete_ticks = LEVEL_COMPLETE_DELAY_TICKS;
    state.phase = GamePhase::LevelComplete;
    log::info!(
        "Level cleared, score {}; level {} up next",
        state.stats.score,
        state.stats.level
    );
}
