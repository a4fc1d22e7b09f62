//! Recorded draw calls
//!
//! A [`RenderSink`] that keeps the last presented frame as a list of
//! commands. Used by the headless binary and by tests.

use glam::Vec2;

use super::{Color, RenderSink, SpriteId};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Sprite {
        sprite: SpriteId,
        pos: Vec2,
        rotation: f32,
    },
    Text {
        text: String,
        pos: Vec2,
        color: Color,
    },
}

/// Records draw calls; `present` moves them into the finished frame
#[derive(Debug, Default)]
pub struct CommandBuffer {
    pending: Vec<DrawCommand>,
    frame: Vec<DrawCommand>,
    /// Frames presented so far
    pub frames_presented: u64,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls of the last presented frame
    pub fn frame(&self) -> &[DrawCommand] {
        &self.frame
    }

    /// Text lines of the last presented frame, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.frame.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Sprites of the last presented frame, in draw order
    pub fn sprites(&self) -> impl Iterator<Item = SpriteId> + '_ {
        self.frame.iter().filter_map(|cmd| match cmd {
            DrawCommand::Sprite { sprite, .. } => Some(*sprite),
            _ => None,
        })
    }
}

impl RenderSink for CommandBuffer {
    fn clear(&mut self, color: Color) {
        self.pending.push(DrawCommand::Clear(color));
    }

    fn draw_sprite(&mut self, sprite: SpriteId, pos: Vec2, rotation: f32) {
        self.pending.push(DrawCommand::Sprite {
            sprite,
            pos,
            rotation,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, color: Color) {
        self.pending.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            color,
        });
    }

    fn present(&mut self) {
        self.frame = std::mem::take(&mut self.pending);
        self.frames_presented += 1;
    }
}
