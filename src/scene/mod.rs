//! Scene state machine
//!
//! Three mutually exclusive scenes: Start → Main → Death → (Main | quit).
//! Scenes never switch themselves; they file requests through a
//! [`SceneContext`] and the [`SceneManager`] applies them at the start of
//! the next frame.

pub mod death;
pub mod main_scene;
pub mod manager;
pub mod start;

use std::fmt;
use std::str::FromStr;

use rand_pcg::Pcg32;
use thiserror::Error;

use crate::audio::{AudioSink, MusicCommand, SoundCue};
use crate::input::InputEvent;
use crate::renderer::RenderSink;
use crate::settings::Settings;
use crate::sim::Score;

pub use death::DeathScene;
pub use main_scene::MainScene;
pub use manager::SceneManager;
pub use start::StartScene;

/// Scene names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SceneId {
    Start,
    Main,
    Death,
}

impl SceneId {
    pub const ALL: [SceneId; 3] = [SceneId::Start, SceneId::Main, SceneId::Death];

    pub fn as_str(&self) -> &'static str {
        match self {
            SceneId::Start => "start",
            SceneId::Main => "main",
            SceneId::Death => "death",
        }
    }

    /// Slot in the manager's scene table
    pub(crate) fn index(&self) -> usize {
        match self {
            SceneId::Start => 0,
            SceneId::Main => 1,
            SceneId::Death => 2,
        }
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scene name that isn't one of start/main/death
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scene `{0}`")]
pub struct UnknownScene(pub String);

impl FromStr for SceneId {
    type Err = UnknownScene;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SceneId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownScene(s.to_string()))
    }
}

/// Requests filed by scenes during a frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneRequests {
    /// Scene to switch to at the start of the next frame
    pub next: Option<SceneId>,
    /// Rebuild the Main scene before switching
    pub reset_main: bool,
}

/// Everything a scene may touch while handling input or updating
pub struct SceneContext<'a> {
    pub score: &'a mut Score,
    pub rng: &'a mut Pcg32,
    pub settings: &'a Settings,
    pub audio: &'a mut dyn AudioSink,
    /// Clock reading for this frame (seconds)
    pub now: f64,
    requests: &'a mut SceneRequests,
    quit: &'a mut bool,
}

impl SceneContext<'_> {
    pub fn request_transition(&mut self, next: SceneId) {
        self.requests.next = Some(next);
    }

    /// Reset the Main scene and switch to it
    pub fn request_restart(&mut self) {
        self.requests.reset_main = true;
        self.requests.next = Some(SceneId::Main);
    }

    pub fn request_quit(&mut self) {
        if !*self.quit {
            log::info!("Quit requested");
        }
        *self.quit = true;
    }

    pub fn play(&mut self, cue: SoundCue) {
        self.audio.play(cue);
    }

    pub fn music(&mut self, command: MusicCommand) {
        self.audio.music(command);
    }
}

/// One of the three scenes
#[derive(Debug, Clone)]
pub enum Scene {
    Start(StartScene),
    Main(MainScene),
    Death(DeathScene),
}

impl Scene {
    pub fn id(&self) -> SceneId {
        match self {
            Scene::Start(_) => SceneId::Start,
            Scene::Main(_) => SceneId::Main,
            Scene::Death(_) => SceneId::Death,
        }
    }

    /// Called when the scene becomes active
    pub fn enter(&mut self, ctx: &mut SceneContext) {
        match self {
            Scene::Start(_) | Scene::Main(_) => {}
            Scene::Death(scene) => scene.enter(ctx),
        }
    }

    pub fn poll_input(&mut self, events: &[InputEvent], ctx: &mut SceneContext) {
        match self {
            Scene::Start(scene) => scene.poll_input(events, ctx),
            Scene::Main(scene) => scene.poll_input(events, ctx),
            Scene::Death(scene) => scene.poll_input(events, ctx),
        }
    }

    pub fn update(&mut self, ctx: &mut SceneContext) {
        match self {
            Scene::Start(_) | Scene::Death(_) => {}
            Scene::Main(scene) => scene.update(ctx),
        }
    }

    pub fn render(&self, sink: &mut impl RenderSink, score: &Score) {
        match self {
            Scene::Start(scene) => scene.render(sink),
            Scene::Main(scene) => scene.render(sink, score),
            Scene::Death(scene) => scene.render(sink, score),
        }
    }
}

/// Owned backing state for building a [`SceneContext`] in scene tests
#[cfg(test)]
pub(crate) struct TestEnv {
    pub score: Score,
    pub rng: Pcg32,
    pub settings: Settings,
    pub audio: crate::audio::CueRecorder,
    pub requests: SceneRequests,
    pub quit: bool,
}

#[cfg(test)]
impl TestEnv {
    pub fn new() -> Self {
        use rand::SeedableRng;
        Self {
            score: Score::new(),
            rng: Pcg32::seed_from_u64(1234),
            settings: Settings::default(),
            audio: crate::audio::CueRecorder::new(),
            requests: SceneRequests::default(),
            quit: false,
        }
    }

    pub fn ctx(&mut self, now: f64) -> SceneContext<'_> {
        SceneContext {
            score: &mut self.score,
            rng: &mut self.rng,
            settings: &self.settings,
            audio: &mut self.audio,
            now,
            requests: &mut self.requests,
            quit: &mut self.quit,
        }
    }
}
