//! Collision detection and response for axis-aligned geometry
//!
//! The ball is a circle; paddle and blocks are rectangles given by their
//! top-left corner and size. Everything here is stateless.

use glam::Vec2;

use super::state::{Ball, Block, Paddle, Size};
use crate::consts::{BALL_MIN_SPEED, MAX_BOUNCE_ANGLE, MIN_BOUNCE_ANGLE};

/// Check whether a circle overlaps a rectangle
///
/// Clamps the circle center into the rectangle on each axis to find the
/// nearest point, then compares squared distances. Touching is not overlap.
#[inline]
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect_pos: Vec2, rect_size: Size) -> bool {
    let nearest = Vec2::new(
        center.x.clamp(rect_pos.x, rect_pos.x + rect_size.width),
        center.y.clamp(rect_pos.y, rect_pos.y + rect_size.height),
    );
    center.distance_squared(nearest) < radius * radius
}

/// Outgoing velocity after the ball strikes the paddle
///
/// The hit offset from paddle center, normalized to [-1, 1], picks an angle
/// between 30° and 150° from +x. Speed is preserved and the result always
/// points up the screen. A dead-center hit goes straight up.
pub fn paddle_bounce(ball: &Ball, paddle: &Paddle) -> Vec2 {
    let half_width = (paddle.size.width / 2.0).max(f32::EPSILON);
    let hit = ((ball.pos.x - paddle.center_x()) / half_width).clamp(-1.0, 1.0);

    let angle =
        hit * (MAX_BOUNCE_ANGLE - MIN_BOUNCE_ANGLE) / 2.0 + std::f32::consts::FRAC_PI_2;

    let mut speed = ball.vel.length();
    if !speed.is_finite() || speed <= f32::EPSILON {
        // Stationary ball: relaunch at the reference speed
        speed = if ball.speed > f32::EPSILON {
            ball.speed
        } else {
            BALL_MIN_SPEED
        };
    }

    Vec2::new(angle.cos(), -angle.sin()) * speed
}

/// Outgoing velocity after the ball strikes a block
///
/// Picks the dominant axis by comparing center offsets normalized by block
/// size, then flips only that velocity component. Not a true reflection:
/// corner hits resolve to whichever face the center is relatively further
/// past.
pub fn block_bounce(ball: &Ball, block: &Block) -> Vec2 {
    let delta = ball.pos - block.center();
    let x_ratio = delta.x.abs() / block.size.width.max(f32::EPSILON);
    let y_ratio = delta.y.abs() / block.size.height.max(f32::EPSILON);

    if x_ratio < y_ratio {
        // Top or bottom face
        Vec2::new(ball.vel.x, -ball.vel.y)
    } else {
        Vec2::new(-ball.vel.x, ball.vel.y)
    }
}

/// Ball has fallen fully below the canvas
#[inline]
pub fn is_out_of_bounds(ball: &Ball, canvas_height: f32) -> bool {
    ball.pos.y > canvas_height + ball.radius
}

/// Keep a paddle's left edge within `[0, canvas_width - paddle_width]`
#[inline]
pub fn clamp_paddle_x(x: f32, paddle_width: f32, canvas_width: f32) -> f32 {
    x.min(canvas_width - paddle_width).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ball_at(pos: Vec2, vel: Vec2) -> Ball {
        Ball {
            pos,
            vel,
            radius: 8.0,
            speed: 5.0,
        }
    }

    fn paddle_at(x: f32) -> Paddle {
        Paddle {
            pos: Vec2::new(x, 500.0),
            size: Size::new(100.0, 12.0),
            speed: 8.0,
        }
    }

    fn block_at(x: f32, y: f32) -> Block {
        Block {
            id: "block-0-0".to_string(),
            pos: Vec2::new(x, y),
            size: Size::new(70.0, 20.0),
            color: 0xFF6B6B,
            points: 10,
            destroyed: false,
        }
    }

    #[test]
    fn test_overlap_inside_and_outside() {
        let rect = Size::new(70.0, 20.0);
        let origin = Vec2::new(100.0, 100.0);

        // Center inside the rectangle
        assert!(circle_rect_overlap(Vec2::new(130.0, 110.0), 8.0, origin, rect));
        // Just above the top edge
        assert!(circle_rect_overlap(Vec2::new(130.0, 95.0), 8.0, origin, rect));
        // Far away
        assert!(!circle_rect_overlap(Vec2::new(300.0, 300.0), 8.0, origin, rect));
        // Exactly touching is not overlap
        assert!(!circle_rect_overlap(Vec2::new(130.0, 92.0), 8.0, origin, rect));
    }

    #[test]
    fn test_overlap_corner_uses_euclidean_distance() {
        let rect = Size::new(70.0, 20.0);
        let origin = Vec2::new(100.0, 100.0);
        // 6 px off on both axes from the corner: distance ~8.49 > 8
        assert!(!circle_rect_overlap(Vec2::new(94.0, 94.0), 8.0, origin, rect));
        // 5 px off on both axes: distance ~7.07 < 8
        assert!(circle_rect_overlap(Vec2::new(95.0, 95.0), 8.0, origin, rect));
    }

    #[test]
    fn test_paddle_center_hit_goes_straight_up() {
        let paddle = paddle_at(350.0);
        let ball = ball_at(Vec2::new(400.0, 495.0), Vec2::new(3.0, 4.0));
        let vel = paddle_bounce(&ball, &paddle);
        assert!(vel.x.abs() < 1e-5);
        assert!((vel.y + 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_paddle_edge_hits_use_angle_bounds() {
        let paddle = paddle_at(350.0);

        // Left edge maps to 30°
        let ball = ball_at(Vec2::new(350.0, 495.0), Vec2::new(0.0, 5.0));
        let vel = paddle_bounce(&ball, &paddle);
        let expected = Vec2::new(MIN_BOUNCE_ANGLE.cos(), -MIN_BOUNCE_ANGLE.sin()) * 5.0;
        assert!(vel.distance(expected) < 1e-4);

        // Right edge maps to 150°
        let ball = ball_at(Vec2::new(450.0, 495.0), Vec2::new(0.0, 5.0));
        let vel = paddle_bounce(&ball, &paddle);
        let expected = Vec2::new(MAX_BOUNCE_ANGLE.cos(), -MAX_BOUNCE_ANGLE.sin()) * 5.0;
        assert!(vel.distance(expected) < 1e-4);
    }

    #[test]
    fn test_paddle_offset_clamped_past_edges() {
        let paddle = paddle_at(350.0);
        // Ball center beyond the right edge still within radius
        let beyond = ball_at(Vec2::new(456.0, 495.0), Vec2::new(0.0, 5.0));
        let at_edge = ball_at(Vec2::new(450.0, 495.0), Vec2::new(0.0, 5.0));
        assert_eq!(paddle_bounce(&beyond, &paddle), paddle_bounce(&at_edge, &paddle));
    }

    #[test]
    fn test_paddle_bounce_stationary_ball() {
        let paddle = paddle_at(350.0);
        let ball = ball_at(Vec2::new(400.0, 495.0), Vec2::ZERO);
        let vel = paddle_bounce(&ball, &paddle);
        assert!((vel.length() - 5.0).abs() < 1e-5);
        assert!(vel.y < 0.0);

        let mut still = ball.clone();
        still.speed = 0.0;
        let vel = paddle_bounce(&still, &paddle);
        assert!((vel.length() - BALL_MIN_SPEED).abs() < 1e-5);
        assert!(vel.y < 0.0);
    }

    #[test]
    fn test_block_bounce_from_below_flips_y() {
        let block = block_at(100.0, 100.0);
        // Ball just under the block's middle, moving up
        let ball = ball_at(Vec2::new(135.0, 126.0), Vec2::new(2.0, -4.0));
        assert_eq!(block_bounce(&ball, &block), Vec2::new(2.0, 4.0));
    }

    #[test]
    fn test_block_bounce_from_side_flips_x() {
        let block = block_at(100.0, 100.0);
        // Ball at the left face, vertically centered
        let ball = ball_at(Vec2::new(94.0, 110.0), Vec2::new(4.0, -1.0));
        assert_eq!(block_bounce(&ball, &block), Vec2::new(-4.0, -1.0));
    }

    #[test]
    fn test_out_of_bounds_threshold() {
        let mut ball = ball_at(Vec2::new(400.0, 608.0), Vec2::ZERO);
        assert!(!is_out_of_bounds(&ball, 600.0));
        ball.pos.y = 608.5;
        assert!(is_out_of_bounds(&ball, 600.0));
    }

    #[test]
    fn test_clamp_paddle_bounds() {
        assert_eq!(clamp_paddle_x(-50.0, 100.0, 800.0), 0.0);
        assert_eq!(clamp_paddle_x(800.0, 100.0, 800.0), 700.0);
        assert_eq!(clamp_paddle_x(321.0, 100.0, 800.0), 321.0);
    }

    proptest! {
        #[test]
        fn prop_paddle_bounce_keeps_speed_and_goes_up(
            offset in -1.0f32..=1.0,
            vx in -8.0f32..8.0,
            vy in 0.5f32..8.0,
        ) {
            let paddle = paddle_at(350.0);
            let ball = ball_at(Vec2::new(400.0 + offset * 50.0, 495.0), Vec2::new(vx, vy));
            let out = paddle_bounce(&ball, &paddle);
            prop_assert!((out.length() - ball.vel.length()).abs() < 1e-3);
            prop_assert!(out.y < 0.0);
        }

        #[test]
        fn prop_block_bounce_flips_exactly_one_axis(
            bx in 90.0f32..180.0,
            by in 90.0f32..130.0,
            vx in prop::sample::select(vec![-6.0f32, -2.5, 1.5, 4.0]),
            vy in prop::sample::select(vec![-5.0f32, -1.0, 2.0, 3.5]),
        ) {
            let block = block_at(100.0, 100.0);
            let ball = ball_at(Vec2::new(bx, by), Vec2::new(vx, vy));
            prop_assume!(circle_rect_overlap(ball.pos, ball.radius, block.pos, block.size));

            let out = block_bounce(&ball, &block);
            let flipped_x = out.x == -vx && out.y == vy;
            let flipped_y = out.x == vx && out.y == -vy;
            prop_assert!(flipped_x ^ flipped_y);
            prop_assert!((out.length() - ball.vel.length()).abs() < 1e-5);
        }

        #[test]
        fn prop_overlap_translation_invariant(
            cx in -50.0f32..150.0,
            cy in -50.0f32..150.0,
            dx in prop::sample::select(vec![-256.0f32, -32.0, 0.0, 64.0, 512.0]),
            dy in prop::sample::select(vec![-128.0f32, 0.0, 16.0, 1024.0]),
        ) {
            // Power-of-two shifts keep the float arithmetic exact
            let rect = Size::new(64.0, 32.0);
            let origin = Vec2::new(0.0, 0.0);
            let shift = Vec2::new(dx, dy);
            let center = Vec2::new(cx.round(), cy.round());
            prop_assert_eq!(
                circle_rect_overlap(center, 8.0, origin, rect),
                circle_rect_overlap(center + shift, 8.0, origin + shift, rect)
            );
        }

        #[test]
        fn prop_no_overlap_when_far_on_both_axes(
            gap_x in 8.01f32..100.0,
            gap_y in 8.01f32..100.0,
            left in any::<bool>(),
            above in any::<bool>(),
        ) {
            let rect = Size::new(70.0, 20.0);
            let origin = Vec2::new(100.0, 100.0);
            let x = if left { origin.x - gap_x } else { origin.x + rect.width + gap_x };
            let y = if above { origin.y - gap_y } else { origin.y + rect.height + gap_y };
            prop_assert!(!circle_rect_overlap(Vec2::new(x, y), 8.0, origin, rect));
        }
    }
}
