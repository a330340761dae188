//! Per-frame simulation tick
//!
//! Core game loop step that advances the session deterministically.

use thiserror::Error;

use super::collision::{ball_hits_brick, ball_over_paddle, wall_contact};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::PADDLE_SPEED;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
}

/// Faults raised by [`tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TickError {
    /// The session already ended; it must be reset before ticking again
    #[error("session already ended in {0:?}, reset before ticking")]
    SessionOver(GamePhase),
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> Result<(), TickError> {
    if state.phase.is_terminal() {
        return Err(TickError::SessionOver(state.phase));
    }

    state.events.clear();
    state.time_ticks += 1;

    // Paddle: right wins when both are held
    let moved_right = input.move_right && state.paddle.step_right();
    if !moved_right && input.move_left {
        state.paddle.step_left();
    }

    // Bricks: scan the whole grid, every hit counts
    let max_score = state.max_score();
    for ((column, row), brick) in state.bricks.iter_mut() {
        if !ball_hits_brick(&state.ball, brick) {
            continue;
        }
        state.ball.vel.y = -state.ball.vel.y;
        brick.active = false;
        state.score += 1;
        state.events.push(GameEvent::BrickDestroyed { column, row });

        if state.score == max_score {
            state.phase = GamePhase::Victory;
            state.events.push(GameEvent::Victory);
            return Ok(());
        }
    }

    // Walls, using the position the ball is about to reach
    let contact = wall_contact(&state.ball);
    if contact.side {
        state.ball.vel.x = -state.ball.vel.x;
        state.events.push(GameEvent::WallBounce);
    }
    if contact.top {
        state.ball.vel.y = -state.ball.vel.y;
        state.events.push(GameEvent::WallBounce);
    } else if contact.bottom {
        if ball_over_paddle(&state.ball, &state.paddle) {
            state.ball.vel.y = -state.ball.vel.y;
            state.events.push(GameEvent::PaddleBounce);
        } else {
            state.lives = state.lives.saturating_sub(1);
            state.events.push(GameEvent::LifeLost {
                remaining: state.lives,
            });
            if state.lives == 0 {
                state.phase = GamePhase::GameOver;
                state.events.push(GameEvent::GameOver);
                return Ok(());
            }
            state.ball.respawn();
            state.paddle.recenter();
        }
    }

    state.ball.pos += state.ball.vel;

    Ok(())
}

/// Demo player: keep the paddle center under the ball
///
/// Holds still while the ball is within one paddle step of the center so
/// the paddle doesn't jitter around it.
pub fn autopilot_input(state: &GameState) -> TickInput {
    let offset = state.ball.pos.x - state.paddle.center_x();
    TickInput {
        move_left: offset < -PADDLE_SPEED,
        move_right: offset > PADDLE_SPEED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;

    fn idle() -> TickInput {
        TickInput::default()
    }

    /// Park the ball at the bottom edge, away from the paddle
    fn set_up_miss(state: &mut GameState) {
        state.paddle.x = 0.0;
        state.ball.pos = Vec2::new(700.0, 599.0);
        state.ball.vel = Vec2::new(1.0, 2.0);
    }

    #[test]
    fn test_brick_hit_scenario() {
        let mut state = GameState::new();
        state.ball.pos = Vec2::new(125.0, 55.0);
        state.ball.vel = Vec2::new(1.0, -2.0);

        tick(&mut state, &idle()).unwrap();

        assert!(!state.bricks.get(0, 0).unwrap().active);
        assert_eq!(state.score, 1);
        assert_eq!(state.ball.vel.y, 2.0);
        assert_eq!(state.ball.pos, Vec2::new(126.0, 57.0));
        assert!(state
            .events
            .contains(&GameEvent::BrickDestroyed { column: 0, row: 0 }));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_last_life_ends_session_without_reset() {
        let mut state = GameState::new();
        state.lives = 1;
        set_up_miss(&mut state);

        tick(&mut state, &idle()).unwrap();

        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        // No reset and no integration
        assert_eq!(state.ball.pos, Vec2::new(700.0, 599.0));
        assert_eq!(state.ball.vel, Vec2::new(1.0, 2.0));
        assert_eq!(state.paddle.x, 0.0);
        assert_eq!(state.events.last(), Some(&GameEvent::GameOver));
    }

    #[test]
    fn test_lost_life_resets_ball_and_paddle() {
        let mut state = GameState::new();
        state.lives = 3;
        set_up_miss(&mut state);

        tick(&mut state, &idle()).unwrap();

        assert_eq!(state.lives, 2);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));
        // Respawned at (440, 590) then integrated once
        assert_eq!(state.ball.pos, Vec2::new(442.0, 588.0));
        assert_eq!(state.paddle.x, (PLAYFIELD_WIDTH - PADDLE_WIDTH) / 2.0);
        assert!(state.events.contains(&GameEvent::LifeLost { remaining: 2 }));
    }

    #[test]
    fn test_paddle_bounce() {
        let mut state = GameState::new();
        state.ball.pos = Vec2::new(440.0, 599.0);
        state.ball.vel = Vec2::new(1.0, 2.0);

        tick(&mut state, &idle()).unwrap();

        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.ball.vel, Vec2::new(1.0, -2.0));
        assert_eq!(state.ball.pos, Vec2::new(441.0, 597.0));
        assert!(state.events.contains(&GameEvent::PaddleBounce));
    }

    #[test]
    fn test_victory_on_last_brick() {
        let mut state = GameState::new();
        for (_, brick) in state.bricks.iter_mut() {
            brick.active = false;
        }
        if let Some(brick) = state.bricks.get_mut(4, 4) {
            brick.active = true;
        }
        state.score = 24;
        state.ball.pos = Vec2::new(630.0, 215.0);
        state.ball.vel = Vec2::new(1.0, -2.0);

        tick(&mut state, &idle()).unwrap();

        assert_eq!(state.score, 25);
        assert_eq!(state.phase, GamePhase::Victory);
        // Velocity flipped by the hit, but no integration afterwards
        assert_eq!(state.ball.pos, Vec2::new(630.0, 215.0));
        assert_eq!(state.ball.vel, Vec2::new(1.0, 2.0));
        assert_eq!(state.events.last(), Some(&GameEvent::Victory));
    }

    #[test]
    fn test_tick_after_terminal_is_fault() {
        let mut state = GameState::new();
        state.phase = GamePhase::GameOver;
        let before = state.clone();

        let result = tick(&mut state, &idle());

        assert_eq!(result, Err(TickError::SessionOver(GamePhase::GameOver)));
        assert_eq!(state.ball, before.ball);
        assert_eq!(state.time_ticks, before.time_ticks);
    }

    #[test]
    fn test_overlapping_bricks_both_score() {
        let mut state = GameState::new();
        // Stack a second brick on top of (0, 0)
        let pos = state.bricks.get(0, 0).unwrap().pos;
        state.bricks.get_mut(0, 1).unwrap().pos = pos;
        state.ball.pos = Vec2::new(125.0, 55.0);
        state.ball.vel = Vec2::new(1.0, -2.0);

        tick(&mut state, &idle()).unwrap();

        assert_eq!(state.score, 2);
        // Flipped twice
        assert_eq!(state.ball.vel.y, -2.0);
        assert!(!state.bricks.get(0, 0).unwrap().active);
        assert!(!state.bricks.get(0, 1).unwrap().active);
    }

    #[test]
    fn test_side_wall_bounce() {
        let mut state = GameState::new();
        state.ball.pos = Vec2::new(859.5, 300.0);
        state.ball.vel = Vec2::new(1.0, -2.0);

        tick(&mut state, &idle()).unwrap();

        assert_eq!(state.ball.vel.x, -1.0);
        assert_eq!(state.ball.pos, Vec2::new(858.5, 298.0));
    }

    #[test]
    fn test_paddle_movement() {
        let mut state = GameState::new();
        let start = state.paddle.x;

        let right = TickInput {
            move_right: true,
            ..Default::default()
        };
        tick(&mut state, &right).unwrap();
        assert_eq!(state.paddle.x, start + PADDLE_SPEED);

        let left = TickInput {
            move_left: true,
            ..Default::default()
        };
        tick(&mut state, &left).unwrap();
        assert_eq!(state.paddle.x, start);

        // Both held: right wins
        let both = TickInput {
            move_left: true,
            move_right: true,
        };
        tick(&mut state, &both).unwrap();
        assert_eq!(state.paddle.x, start + PADDLE_SPEED);
    }

    #[test]
    fn test_both_held_against_right_wall_moves_left() {
        let mut state = GameState::new();
        state.paddle.x = PLAYFIELD_WIDTH - PADDLE_WIDTH;
        let both = TickInput {
            move_left: true,
            move_right: true,
        };
        tick(&mut state, &both).unwrap();
        assert_eq!(state.paddle.x, PLAYFIELD_WIDTH - PADDLE_WIDTH - PADDLE_SPEED);
    }

    #[test]
    fn test_autopilot_keeps_lives() {
        let mut state = GameState::new();
        for _ in 0..20_000 {
            let input = autopilot_input(&state);
            tick(&mut state, &input).unwrap();
            if state.phase.is_terminal() {
                break;
            }
        }
        assert_eq!(state.lives, STARTING_LIVES);
        assert_ne!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_determinism() {
        let inputs = [
            TickInput {
                move_right: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                move_left: true,
                ..Default::default()
            },
        ];
        let mut state1 = GameState::new();
        let mut state2 = GameState::new();
        for i in 0..3_000 {
            let input = inputs[i % inputs.len()];
            let r1 = tick(&mut state1, &input);
            let r2 = tick(&mut state2, &input);
            assert_eq!(r1, r2);
            if r1.is_err() {
                break;
            }
        }
        assert_eq!(state1.ball, state2.ball);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.lives, state2.lives);
    }
}
