//! Game over screen

use glam::Vec2;

use super::SceneContext;
use crate::audio::{MusicCommand, SoundCue};
use crate::input::{Action, InputEvent};
use crate::renderer::{RenderSink, SpriteId, colors};
use crate::sim::{Score, Text};

const SCORE_POS: Vec2 = Vec2::new(550.0, 100.0);
const HIGH_SCORE_POS: Vec2 = Vec2::new(550.0, 150.0);

#[derive(Debug, Clone)]
pub struct DeathScene {
    prompt: Text,
}

impl Default for DeathScene {
    fn default() -> Self {
        Self::new()
    }
}

impl DeathScene {
    pub fn new() -> Self {
        Self {
            prompt: Text::new(
                300.0,
                500.0,
                "Press R to restart, or Q to exit game.",
                colors::BLOOD,
            ),
        }
    }

    /// Silence the soundtrack and play the death cue
    pub fn enter(&mut self, ctx: &mut SceneContext) {
        ctx.music(MusicCommand::Pause);
        ctx.play(SoundCue::Death);
    }

    pub fn poll_input(&mut self, events: &[InputEvent], ctx: &mut SceneContext) {
        for event in events {
            match event {
                InputEvent::Pressed(Action::Restart) => ctx.request_restart(),
                InputEvent::Pressed(Action::Quit) => ctx.request_quit(),
                _ => {}
            }
        }
    }

    pub fn render(&self, sink: &mut impl RenderSink, score: &Score) {
        sink.clear(colors::BLACK);
        sink.draw_sprite(SpriteId::DeathBackground, Vec2::ZERO, 0.0);
        self.prompt.render(sink);
        let current = format!("Score: {}", score.text());
        let high = format!("Highscore: {}", score.high());
        sink.draw_text(&current, SCORE_POS, colors::WHITE);
        sink.draw_text(&high, HIGH_SCORE_POS, colors::WHITE);
    }
}
