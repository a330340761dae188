//! Neon Bricks - a single-screen ball-and-paddle brick game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, session phase)
//! - `color`: Time-based colour cycling shared by every drawn entity
//! - `input`: Keyboard latch feeding the simulation
//! - `renderer`: Drawing-surface abstraction and scene drawing
//! - `game`: Frame driver tying input, simulation and rendering together

pub mod color;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use color::{Rgb, dynamic_color};
pub use game::{Outcome, Session};
pub use input::InputLatch;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (origin top-left, y down)
    pub const PLAYFIELD_WIDTH: f32 = 880.0;
    pub const PLAYFIELD_HEIGHT: f32 = 620.0;

    /// Paddle defaults - sits on the bottom edge
    pub const PADDLE_WIDTH: f32 = 95.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Horizontal distance covered per tick while a direction is held
    pub const PADDLE_SPEED: f32 = 7.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 20.0;
    /// Spawn height above the bottom edge
    pub const BALL_START_OFFSET_Y: f32 = 30.0;
    /// Velocity at session start
    pub const BALL_LAUNCH_VEL: (f32, f32) = (1.0, -2.0);
    /// Velocity after a lost life (faster sideways than the launch)
    pub const BALL_RESET_VEL: (f32, f32) = (2.0, -2.0);

    /// Brick grid layout
    pub const BRICK_COLUMNS: usize = 5;
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_WIDTH: f32 = 105.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_SPACING: f32 = 20.0;
    pub const BRICK_TOP_OFFSET: f32 = 50.0;
    pub const BRICK_LEFT_OFFSET: f32 = 120.0;

    /// Lives at session start
    pub const STARTING_LIVES: u32 = 5;
}
