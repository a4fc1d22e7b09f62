//! Rendering interface
//!
//! The core never talks to a window or GPU directly. Scenes describe each
//! frame as draw calls against a [`RenderSink`] supplied by the host.

pub mod commands;

use glam::Vec2;

pub use commands::{CommandBuffer, DrawCommand};

/// RGBA color, components in 0-1
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
    /// Dark red used for prompts (#8B2323)
    pub const BLOOD: Color = [139.0 / 255.0, 35.0 / 255.0, 35.0 / 255.0, 1.0];
    /// Start screen backdrop (#1A1A1A)
    pub const CHARCOAL: Color = [26.0 / 255.0, 26.0 / 255.0, 26.0 / 255.0, 1.0];
}

/// Opaque handles for the images the host loads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Player,
    Collectible,
    /// Main scene backdrop
    Background,
    StartBackground,
    DeathBackground,
}

/// Destination for draw calls. Assumed synchronous and infallible.
pub trait RenderSink {
    /// Fill the whole frame with a color
    fn clear(&mut self, color: Color);

    /// Draw a sprite with its top-left corner at `pos`, rotated
    /// counter-clockwise by `rotation` degrees
    fn draw_sprite(&mut self, sprite: SpriteId, pos: Vec2, rotation: f32);

    /// Draw a line of text with its top-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, color: Color);

    /// Flip the finished frame to the screen
    fn present(&mut self);
}
