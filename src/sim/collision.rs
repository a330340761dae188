//! Collision tests against bricks, the paddle and the playfield walls
//!
//! Brick hits only consider the ball's center point, not its radius, so a
//! ball can visibly overlap a brick edge without breaking it. Walls are
//! tested against the prospective (next-tick) position, inset by the radius.

use glam::Vec2;

use super::state::{Ball, Brick, Paddle};
use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

/// Which walls a prospective position would touch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    /// Left or right wall
    pub side: bool,
    pub top: bool,
    pub bottom: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.side || self.top || self.bottom
    }
}

/// Strict point-in-rectangle test (edges don't count)
#[inline]
pub fn point_in_rect(point: Vec2, min: Vec2, size: Vec2) -> bool {
    point.x > min.x && point.x < min.x + size.x && point.y > min.y && point.y < min.y + size.y
}

/// Does the ball's center lie inside this brick?
#[inline]
pub fn ball_hits_brick(ball: &Ball, brick: &Brick) -> bool {
    brick.active && point_in_rect(ball.pos, brick.pos, Brick::size())
}

/// Is the ball horizontally within the paddle span (strict)?
#[inline]
pub fn ball_over_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.x > paddle.x && ball.pos.x < paddle.right()
}

/// Wall contacts for the ball's prospective position
pub fn wall_contact(ball: &Ball) -> WallContact {
    let next = ball.prospective();
    let r = ball.radius;
    let top = next.y < r;
    WallContact {
        side: next.x > PLAYFIELD_WIDTH - r || next.x < r,
        top,
        // The bottom is only considered when the top is not touched
        bottom: !top && next.y > PLAYFIELD_HEIGHT - r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        let mut ball = Ball::launch();
        ball.pos = Vec2::new(x, y);
        ball.vel = Vec2::new(vx, vy);
        ball
    }

    #[test]
    fn test_point_in_rect_is_strict() {
        let min = Vec2::new(10.0, 10.0);
        let size = Vec2::new(10.0, 5.0);
        assert!(point_in_rect(Vec2::new(15.0, 12.0), min, size));
        assert!(!point_in_rect(Vec2::new(10.0, 12.0), min, size));
        assert!(!point_in_rect(Vec2::new(20.0, 12.0), min, size));
        assert!(!point_in_rect(Vec2::new(15.0, 15.0), min, size));
    }

    #[test]
    fn test_brick_hit_ignores_radius() {
        let brick = Brick {
            pos: Vec2::new(120.0, 50.0),
            active: true,
        };
        // Center inside
        assert!(ball_hits_brick(&ball_at(125.0, 55.0, 1.0, -2.0), &brick));
        // Center just below the brick but the radius overlaps it
        assert!(!ball_hits_brick(&ball_at(125.0, 75.0, 1.0, -2.0), &brick));
    }

    #[test]
    fn test_inactive_brick_never_hits() {
        let brick = Brick {
            pos: Vec2::new(120.0, 50.0),
            active: false,
        };
        assert!(!ball_hits_brick(&ball_at(125.0, 55.0, 1.0, -2.0), &brick));
    }

    #[test]
    fn test_paddle_span() {
        let paddle = Paddle::default(); // 392.5 .. 487.5
        assert!(ball_over_paddle(&ball_at(440.0, 590.0, 0.0, 2.0), &paddle));
        assert!(!ball_over_paddle(&ball_at(392.5, 590.0, 0.0, 2.0), &paddle));
        assert!(!ball_over_paddle(&ball_at(500.0, 590.0, 0.0, 2.0), &paddle));
    }

    #[test]
    fn test_wall_contacts() {
        assert!(!wall_contact(&ball_at(440.0, 300.0, 1.0, -2.0)).any());
        assert!(wall_contact(&ball_at(859.5, 300.0, 1.0, -2.0)).side);
        assert!(wall_contact(&ball_at(20.5, 300.0, -1.0, -2.0)).side);
        assert!(wall_contact(&ball_at(440.0, 21.0, 1.0, -2.0)).top);
        let bottom = wall_contact(&ball_at(440.0, 599.0, 1.0, 2.0));
        assert!(bottom.bottom && !bottom.top);
    }
}
