//! Frame driver
//!
//! One frame reads the input latch, ticks the simulation and draws the
//! result. When the session ends the outcome is reported once; the host
//! shows it and calls [`Session::restart`].

use crate::color::{Rgb, dynamic_color};
use crate::input::InputLatch;
use crate::renderer::{Surface, render};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TickError, autopilot_input, tick};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    GameOver,
}

impl Outcome {
    fn from_phase(phase: GamePhase) -> Option<Self> {
        match phase {
            GamePhase::Playing => None,
            GamePhase::Victory => Some(Outcome::Victory),
            GamePhase::GameOver => Some(Outcome::GameOver),
        }
    }

    /// Message shown to the player
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Victory => "Victory! You won the game!",
            Outcome::GameOver => "Game Over!",
        }
    }
}

/// A running game: state, input and settings
pub struct Session {
    pub state: GameState,
    pub latch: InputLatch,
    pub settings: Settings,
    sessions_played: u32,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: GameState::new(),
            latch: InputLatch::new(),
            settings,
            sessions_played: 0,
        }
    }

    /// Colour for the current frame
    pub fn color(&self) -> Rgb {
        if self.settings.color_cycle {
            dynamic_color(self.state.time_ticks)
        } else {
            dynamic_color(0)
        }
    }

    /// Run one frame: tick then draw.
    ///
    /// Returns the outcome on the frame the session ends. Calling again
    /// before [`Session::restart`] is an error.
    pub fn frame<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
    ) -> Result<Option<Outcome>, TickError> {
        let input = if self.settings.autopilot {
            autopilot_input(&self.state)
        } else {
            self.latch.tick_input()
        };

        tick(&mut self.state, &input)?;
        self.log_events();

        render(
            &self.state,
            self.color(),
            &self.settings.render_options(),
            surface,
        );

        let outcome = Outcome::from_phase(self.state.phase);
        if let Some(outcome) = outcome {
            log::info!(
                "Session {} ended: {:?} (score {}, lives {}, {} ticks)",
                self.sessions_played + 1,
                outcome,
                self.state.score,
                self.state.lives,
                self.state.time_ticks
            );
        }
        Ok(outcome)
    }

    /// Start a fresh session in place
    pub fn restart(&mut self) {
        self.sessions_played += 1;
        self.state.reset();
        self.latch.clear();
        log::info!("Session {} started", self.sessions_played + 1);
    }

    /// Number of sessions that have been restarted
    pub fn sessions_played(&self) -> u32 {
        self.sessions_played
    }

    fn log_events(&self) {
        for event in &self.state.events {
            match event {
                GameEvent::BrickDestroyed { column, row } => {
                    log::debug!(
                        "Brick ({}, {}) destroyed, score {}",
                        column,
                        row,
                        self.state.score
                    );
                }
                GameEvent::LifeLost { remaining } => {
                    log::info!("Ball lost, {} lives left", remaining);
                }
                GameEvent::WallBounce | GameEvent::PaddleBounce => {
                    log::trace!("{:?} at {:?}", event, self.state.ball.pos);
                }
                GameEvent::Victory | GameEvent::GameOver => {}
            }
        }
    }
}
