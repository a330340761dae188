//! Scene rendering
//!
//! The scene is drawn through the [`Surface`] trait so any backend that can
//! fill rectangles and circles and print text can host the game: the browser
//! canvas on wasm, a recording [`DrawList`] everywhere else.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod draw_list;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use draw_list::{DrawCommand, DrawList};

use glam::Vec2;

use crate::color::Rgb;
use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::sim::{Brick, GameState};

/// HUD text style
pub const HUD_FONT: &str = "16px Arial";
/// Baseline of the HUD text
const HUD_Y: f32 = 20.0;
const SCORE_X: f32 = 8.0;
/// Lives readout sits this far left of the right edge
const LIVES_INSET: f32 = 65.0;

/// A 2D drawing target
pub trait Surface {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Rgb);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb);
    /// Draw text with its baseline-left corner at `pos`
    fn fill_text(&mut self, text: &str, pos: Vec2, color: Rgb);
    /// Ambient glow around the playfield (`None` turns it off)
    fn set_glow(&mut self, _color: Option<Rgb>) {}
}

/// Per-frame rendering switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub glow: bool,
    pub show_hud: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            glow: true,
            show_hud: true,
        }
    }
}

/// Draw one frame. Reads state only.
pub fn render<S: Surface + ?Sized>(
    state: &GameState,
    color: Rgb,
    options: &RenderOptions,
    surface: &mut S,
) {
    surface.set_glow(options.glow.then_some(color));

    // Background
    surface.fill_rect(
        Vec2::ZERO,
        Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
        Rgb::BLACK,
    );

    for (_, brick) in state.bricks.iter().filter(|(_, b)| b.active) {
        surface.fill_rect(brick.pos, Brick::size(), color);
    }

    surface.fill_circle(state.ball.pos, state.ball.radius, color);

    let paddle = &state.paddle;
    surface.fill_rect(
        Vec2::new(paddle.x, paddle.y()),
        Vec2::new(paddle.width, paddle.height),
        color,
    );

    if options.show_hud {
        surface.fill_text(
            &format!("Score: {}", state.score),
            Vec2::new(SCORE_X, HUD_Y),
            Rgb::WHITE,
        );
        surface.fill_text(
            &format!("Lives: {}", state.lives),
            Vec2::new(PLAYFIELD_WIDTH - LIVES_INSET, HUD_Y),
            Rgb::WHITE,
        );
    }
}
