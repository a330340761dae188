//! Recording surface
//!
//! Captures draw calls instead of rasterizing them. Used for headless runs
//! and for checking what a frame would put on screen.

use glam::Vec2;

use super::Surface;
use crate::color::Rgb;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect { pos: Vec2, size: Vec2, color: Rgb },
    Circle { center: Vec2, radius: f32, color: Rgb },
    Text { text: String, pos: Vec2, color: Rgb },
    Glow(Option<Rgb>),
}

#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Forget the previous frame
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for DrawList {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Rgb) {
        self.commands.push(DrawCommand::Rect { pos, size, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, color: Rgb) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            color,
        });
    }

    fn set_glow(&mut self, color: Option<Rgb>) {
        self.commands.push(DrawCommand::Glow(color));
    }
}
