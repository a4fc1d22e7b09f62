//! Title screen

use glam::Vec2;

use super::{SceneContext, SceneId};
use crate::input::{Action, InputEvent};
use crate::renderer::{RenderSink, SpriteId, colors};
use crate::sim::Text;

#[derive(Debug, Clone)]
pub struct StartScene {
    title: Text,
    prompt: Text,
}

impl Default for StartScene {
    fn default() -> Self {
        Self::new()
    }
}

impl StartScene {
    pub fn new() -> Self {
        Self {
            title: Text::new(450.0, 200.0, "Welcome Mortal", colors::BLOOD),
            prompt: Text::new(400.0, 300.0, "Press SPACE to start!", colors::WHITE),
        }
    }

    pub fn poll_input(&mut self, events: &[InputEvent], ctx: &mut SceneContext) {
        if events.contains(&InputEvent::Pressed(Action::Confirm)) {
            ctx.request_transition(SceneId::Main);
        }
    }

    pub fn render(&self, sink: &mut impl RenderSink) {
        sink.clear(colors::CHARCOAL);
        sink.draw_sprite(SpriteId::StartBackground, Vec2::ZERO, 0.0);
        self.title.render(sink);
        self.prompt.render(sink);
    }
}
