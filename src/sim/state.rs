//! Game state and core simulation types
//!
//! Everything a session needs lives in [`GameState`]; the tick function
//! mutates it in place and nothing else holds gameplay data.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Every brick destroyed
    Victory,
    /// Last life lost
    GameOver,
}

impl GamePhase {
    /// Victory and GameOver end the session
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Something noteworthy that happened during the last tick (not gameplay-affecting)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    BrickDestroyed { column: usize, row: usize },
    WallBounce,
    PaddleBounce,
    LifeLost { remaining: u32 },
    Victory,
    GameOver,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Spawn point: horizontally centered, just above the paddle
    pub fn spawn_pos() -> Vec2 {
        Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT - BALL_START_OFFSET_Y)
    }

    /// Ball at the spawn point with the session launch velocity
    pub fn launch() -> Self {
        Self {
            pos: Self::spawn_pos(),
            vel: Vec2::from(BALL_LAUNCH_VEL),
            radius: BALL_RADIUS,
        }
    }

    /// Put the ball back on the spawn point after a lost life
    pub fn respawn(&mut self) {
        self.pos = Self::spawn_pos();
        self.vel = Vec2::from(BALL_RESET_VEL);
    }

    /// Where the ball would be after integrating once
    #[inline]
    pub fn prospective(&self) -> Vec2 {
        self.pos + self.vel
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::launch()
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: Self::centered_x(),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }
}

impl Paddle {
    fn centered_x() -> f32 {
        (PLAYFIELD_WIDTH - PADDLE_WIDTH) / 2.0
    }

    /// Top edge (the paddle never leaves the bottom of the playfield)
    pub fn y(&self) -> f32 {
        PLAYFIELD_HEIGHT - self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn recenter(&mut self) {
        self.x = Self::centered_x();
    }

    /// Shift right one step, unless already touching the right wall
    pub fn step_right(&mut self) -> bool {
        if self.right() < PLAYFIELD_WIDTH {
            self.x += PADDLE_SPEED;
            true
        } else {
            false
        }
    }

    /// Shift left one step, unless already touching the left wall
    pub fn step_left(&mut self) -> bool {
        if self.x > 0.0 {
            self.x -= PADDLE_SPEED;
            true
        } else {
            false
        }
    }
}

/// A single brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub active: bool,
}

impl Brick {
    pub fn size() -> Vec2 {
        Vec2::new(BRICK_WIDTH, BRICK_HEIGHT)
    }
}

/// Fixed grid of bricks, stored column-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    columns: usize,
    rows: usize,
    bricks: Vec<Brick>,
}

impl Default for BrickGrid {
    fn default() -> Self {
        Self::new(BRICK_COLUMNS, BRICK_ROWS)
    }
}

impl BrickGrid {
    /// Lay out a full grid of active bricks
    pub fn new(columns: usize, rows: usize) -> Self {
        let mut bricks = Vec::with_capacity(columns * rows);
        for column in 0..columns {
            for row in 0..rows {
                bricks.push(Brick {
                    pos: Self::layout_pos(column, row),
                    active: true,
                });
            }
        }
        Self {
            columns,
            rows,
            bricks,
        }
    }

    /// Top-left corner of the brick at (column, row)
    pub fn layout_pos(column: usize, row: usize) -> Vec2 {
        Vec2::new(
            column as f32 * (BRICK_WIDTH + BRICK_SPACING) + BRICK_LEFT_OFFSET,
            row as f32 * (BRICK_HEIGHT + BRICK_SPACING) + BRICK_TOP_OFFSET,
        )
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of bricks (the winning score)
    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn get(&self, column: usize, row: usize) -> Option<&Brick> {
        if column < self.columns && row < self.rows {
            self.bricks.get(column * self.rows + row)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, column: usize, row: usize) -> Option<&mut Brick> {
        if column < self.columns && row < self.rows {
            self.bricks.get_mut(column * self.rows + row)
        } else {
            None
        }
    }

    /// All bricks with their (column, row), in column-major order
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Brick)> {
        let rows = self.rows;
        self.bricks
            .iter()
            .enumerate()
            .map(move |(i, b)| ((i / rows, i % rows), b))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = ((usize, usize), &mut Brick)> {
        let rows = self.rows;
        self.bricks
            .iter_mut()
            .enumerate()
            .map(move |(i, b)| ((i / rows, i % rows), b))
    }

    pub fn active_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.active).count()
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    /// Bricks destroyed so far
    pub score: u32,
    pub lives: u32,
    /// Tick counter (drives colour cycling only)
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh session: full grid, full lives, ball on the spawn point
    pub fn new() -> Self {
        Self {
            ball: Ball::launch(),
            paddle: Paddle::default(),
            bricks: BrickGrid::default(),
            score: 0,
            lives: STARTING_LIVES,
            time_ticks: 0,
            phase: GamePhase::Playing,
            events: Vec::new(),
        }
    }

    /// Reinitialise in place for a new session
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Score at which the session is won
    pub fn max_score(&self) -> u32 {
        self.bricks.len() as u32
    }
}
