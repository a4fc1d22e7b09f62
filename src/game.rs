//! Game loop
//!
//! One frame = apply queued transition → poll input → update → render.
//! The loop ends after the frame in which quit was requested.

use crate::audio::{AudioSink, SoundCue};
use crate::input::InputEvent;
use crate::platform::{Clock, InputSource};
use crate::renderer::RenderSink;
use crate::scene::{SceneId, SceneManager};
use crate::settings::Settings;

/// Game instance holding all state
#[derive(Debug)]
pub struct Game {
    manager: SceneManager,
    frames: u64,
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        Self {
            manager: SceneManager::new(settings),
            frames: 0,
        }
    }

    pub fn manager(&self) -> &SceneManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut SceneManager {
        &mut self.manager
    }

    pub fn active(&self) -> SceneId {
        self.manager.active()
    }

    pub fn is_running(&self) -> bool {
        !self.manager.is_quit()
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run a single frame at clock reading `now`.
    ///
    /// Returns `false` once quit has been requested.
    pub fn frame(
        &mut self,
        events: &[InputEvent],
        now: f64,
        render: &mut impl RenderSink,
        audio: &mut impl AudioSink,
    ) -> bool {
        if self.frames == 0 {
            log::info!("Starting soundtrack");
            audio.play(SoundCue::Soundtrack);
        }
        self.manager.apply_pending(audio, now);
        self.manager.poll_input(events, audio, now);
        self.manager.update(audio, now);
        self.manager.render(render);
        render.present();
        self.frames += 1;

        self.is_running()
    }

    /// Run frames until quit. Returns the number of frames run.
    pub fn run(
        &mut self,
        input: &mut impl InputSource,
        clock: &impl Clock,
        render: &mut impl RenderSink,
        audio: &mut impl AudioSink,
    ) -> u64 {
        log::info!("Game loop starting");
        let start = self.frames;
        loop {
            let events = input.poll_events();
            if !self.frame(&events, clock.now(), render, audio) {
                break;
            }
        }
        let ran = self.frames - start;
        log::info!(
            "Game loop finished after {ran} frames (high score {})",
            self.manager.score().high()
        );
        ran
    }
}
