//! Scene manager
//!
//! Owns every scene, the shared score, the collectible RNG and the quit
//! flag. Transition requests are queued and applied by [`apply_pending`]
//! at the start of the following frame.
//!
//! [`apply_pending`]: SceneManager::apply_pending

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::{
    DeathScene, MainScene, Scene, SceneContext, SceneId, SceneRequests, StartScene, UnknownScene,
};
use crate::audio::{AudioSink, MusicCommand};
use crate::input::{Action, InputEvent};
use crate::renderer::RenderSink;
use crate::settings::Settings;
use crate::sim::Score;

#[derive(Debug)]
pub struct SceneManager {
    /// Indexed by `SceneId::index`
    scenes: [Scene; 3],
    active: SceneId,
    requests: SceneRequests,
    quit: bool,
    score: Score,
    rng: Pcg32,
    settings: Settings,
}

impl SceneManager {
    /// Build all scenes with Start active
    pub fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Collectible RNG seed: {seed}");
        let mut rng = Pcg32::seed_from_u64(seed);

        let main = MainScene::new(&mut rng);
        Self {
            scenes: [
                Scene::Start(StartScene::new()),
                Scene::Main(main),
                Scene::Death(DeathScene::new()),
            ],
            active: SceneId::Start,
            requests: SceneRequests::default(),
            quit: false,
            score: Score::new(),
            rng,
            settings,
        }
    }

    pub fn active(&self) -> SceneId {
        self.active
    }

    pub fn active_scene(&self) -> &Scene {
        self.scene(self.active)
    }

    pub fn scene(&self, id: SceneId) -> &Scene {
        &self.scenes[id.index()]
    }

    /// The gameplay scene (active or not)
    pub fn main_scene(&self) -> Option<&MainScene> {
        match &self.scenes[SceneId::Main.index()] {
            Scene::Main(scene) => Some(scene),
            _ => None,
        }
    }

    pub fn main_scene_mut(&mut self) -> Option<&mut MainScene> {
        match &mut self.scenes[SceneId::Main.index()] {
            Scene::Main(scene) => Some(scene),
            _ => None,
        }
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_quit(&self) -> bool {
        self.quit
    }

    /// Transition queued for the next frame, if any
    pub fn pending(&self) -> Option<SceneId> {
        self.requests.next
    }

    /// Queue a switch to `next`; it happens at the start of the next frame
    pub fn request_transition(&mut self, next: SceneId) {
        self.requests.next = Some(next);
    }

    /// Queue a switch by scene name
    pub fn request_transition_named(&mut self, name: &str) -> Result<(), UnknownScene> {
        let next = name.parse()?;
        self.request_transition(next);
        Ok(())
    }

    pub fn request_quit(&mut self) {
        if !self.quit {
            log::info!("Quit requested");
        }
        self.quit = true;
    }

    /// Replace the Main scene with a fresh run and zero the score
    pub fn reset_main(&mut self) {
        self.score.reset();
        self.scenes[SceneId::Main.index()] = Scene::Main(MainScene::new(&mut self.rng));
        log::info!("Main scene reset (high score {})", self.score.high());
    }

    /// Active scene plus a context over the rest of the manager
    fn split<'a>(
        &'a mut self,
        audio: &'a mut dyn AudioSink,
        now: f64,
    ) -> (&'a mut Scene, SceneContext<'a>) {
        let scene = &mut self.scenes[self.active.index()];
        let ctx = SceneContext {
            score: &mut self.score,
            rng: &mut self.rng,
            settings: &self.settings,
            audio,
            now,
            requests: &mut self.requests,
            quit: &mut self.quit,
        };
        (scene, ctx)
    }

    /// Apply the transition queued during the previous frame.
    ///
    /// Returns the newly entered scene, if the active scene changed.
    pub fn apply_pending(&mut self, audio: &mut dyn AudioSink, now: f64) -> Option<SceneId> {
        let requests = std::mem::take(&mut self.requests);
        if requests.reset_main {
            self.reset_main();
            audio.music(MusicCommand::Resume);
        }

        let next = requests.next?;
        if next == self.active {
            return None;
        }

        log::info!("Scene transition: {} -> {}", self.active, next);
        self.active = next;
        let (scene, mut ctx) = self.split(audio, now);
        scene.enter(&mut ctx);
        Some(next)
    }

    /// Route this frame's input. Close quits from any scene.
    pub fn poll_input(&mut self, events: &[InputEvent], audio: &mut dyn AudioSink, now: f64) {
        if events.contains(&InputEvent::Pressed(Action::Close)) {
            self.request_quit();
        }
        let (scene, mut ctx) = self.split(audio, now);
        scene.poll_input(events, &mut ctx);
    }

    pub fn update(&mut self, audio: &mut dyn AudioSink, now: f64) {
        let (scene, mut ctx) = self.split(audio, now);
        scene.update(&mut ctx);
    }

    pub fn render(&self, sink: &mut impl RenderSink) {
        self.active_scene().render(sink, &self.score);
    }
}
