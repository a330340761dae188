//! Keyboard latch
//!
//! Key events arrive whenever the host delivers them; the simulation reads
//! a snapshot once at the start of each tick.

use crate::sim::TickInput;

/// Logical paddle direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Map a DOM `KeyboardEvent.key` value (legacy names included)
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Direction::Left),
            "ArrowRight" | "Right" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Held/released state of both directions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputLatch {
    left: bool,
    right: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    /// Latch a key press. Returns false for keys that don't steer the paddle.
    pub fn key_down(&mut self, key: &str) -> bool {
        self.apply(key, true)
    }

    /// Release a key. Returns false for keys that don't steer the paddle.
    pub fn key_up(&mut self, key: &str) -> bool {
        self.apply(key, false)
    }

    fn apply(&mut self, key: &str, held: bool) -> bool {
        match Direction::from_key(key) {
            Some(direction) => {
                self.set(direction, held);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Snapshot for the next tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            move_left: self.left,
            move_right: self.right,
        }
    }
}
