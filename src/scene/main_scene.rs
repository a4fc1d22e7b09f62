//! Gameplay scene
//!
//! Each update:
//! 1. Advance the player by the wall-clock time since the last update
//! 2. Leaving the field requests the Death scene and ends the frame
//! 3. Touching the collectible moves it, speeds the player up, scores a point
//! 4. Newly reached milestones replace the on-screen message

use glam::Vec2;
use rand::Rng;

use super::{SceneContext, SceneId};
use crate::audio::SoundCue;
use crate::consts::SPEED_INCREMENT;
use crate::input::InputEvent;
use crate::renderer::{RenderSink, SpriteId, colors};
use crate::sim::{Collectible, MilestoneTracker, Player, Score, StepOutcome, Text};

/// Where the score counter is drawn
const SCORE_POS: Vec2 = Vec2::new(600.0, 80.0);
/// Where milestone messages are drawn
const MESSAGE_POS: Vec2 = Vec2::new(80.0, 30.0);

#[derive(Debug, Clone)]
pub struct MainScene {
    pub player: Player,
    pub collectible: Collectible,
    milestones: MilestoneTracker,
    message: Option<Text>,
    /// Clock reading of the previous update; `None` until the first one
    previous_time: Option<f64>,
}

impl MainScene {
    /// Fresh run: player at spawn, collectible somewhere random
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            player: Player::default(),
            collectible: Collectible::spawn(rng),
            milestones: MilestoneTracker::new(),
            message: None,
            previous_time: None,
        }
    }

    /// Latest milestone message, if any was reached this run
    pub fn displayed_message(&self) -> Option<&str> {
        self.message.as_ref().map(|m| m.text.as_str())
    }

    pub fn milestones(&self) -> &MilestoneTracker {
        &self.milestones
    }

    pub fn poll_input(&mut self, events: &[InputEvent], ctx: &mut SceneContext) {
        for event in events {
            match *event {
                InputEvent::Pressed(action) => {
                    if let Some(heading) = action.heading() {
                        self.player.set_heading(heading);
                        self.player.moving = true;
                    }
                }
                InputEvent::Released(action) => {
                    let releases_heading = action.heading() == Some(self.player.heading);
                    if ctx.settings.stop_on_release && releases_heading {
                        self.player.moving = false;
                    }
                }
            }
        }
    }

    /// Seconds since the previous update, clamped; zero on the first update
    fn frame_dt(&mut self, now: f64, max_dt: f32) -> f32 {
        let dt = match self.previous_time {
            Some(prev) => (now - prev).max(0.0) as f32,
            None => 0.0,
        };
        self.previous_time = Some(now);
        dt.min(max_dt)
    }

    pub fn update(&mut self, ctx: &mut SceneContext) {
        let dt = self.frame_dt(ctx.now, ctx.settings.max_frame_dt);

        if self.player.step(dt) == StepOutcome::OutOfBounds || self.player.is_dead() {
            log::info!(
                "Player died at ({:.0}, {:.0}) with score {}",
                self.player.position().x,
                self.player.position().y,
                ctx.score.value()
            );
            ctx.request_transition(SceneId::Death);
            return;
        }

        if self.player.bounds().overlaps(&self.collectible.bounds()) {
            self.collectible.relocate(&mut *ctx.rng);
            self.player.speed += SPEED_INCREMENT;
            ctx.play(SoundCue::Collect);
            ctx.score.increment();
            log::debug!(
                "Collected! score={} speed={}",
                ctx.score.value(),
                self.player.speed
            );
        }

        if let Some(message) = self.milestones.evaluate(ctx.score.value()) {
            log::info!("Milestone reached: {message}");
            let text = Text::new(MESSAGE_POS.x, MESSAGE_POS.y, message, colors::WHITE);
            self.message = Some(text);
        }
    }

    pub fn render(&self, sink: &mut impl RenderSink, score: &Score) {
        sink.clear(colors::BLACK);
        sink.draw_sprite(SpriteId::Background, Vec2::ZERO, 0.0);
        self.player.render(sink);
        self.collectible.render(sink);
        sink.draw_text(&score.text(), SCORE_POS, colors::WHITE);
        if let Some(message) = &self.message {
            message.render(sink);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::input::Action;
    use crate::renderer::CommandBuffer;
    use crate::scene::TestEnv;
    use crate::sim::Heading;

    fn scene(env: &mut TestEnv) -> MainScene {
        MainScene::new(&mut env.rng)
    }

    /// Park the collectible on top of the player
    fn bait(scene: &mut MainScene) {
        scene.collectible.entity.pos = scene.player.position();
    }

    #[test]
    fn test_first_update_does_not_move() {
        let mut env = TestEnv::new();
        let mut scene = scene(&mut env);
        scene.player.moving = true;

        scene.update(&mut env.ctx(50.0));
        let spawn = Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y);
        assert_eq!(scene.player.position(), spawn);

        // 0.05 s later at 200 px/s
        scene.update(&mut env.ctx(50.05));
        let moved = PLAYER_SPAWN_Y - scene.player.position().y;
        assert!((moved - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_long_stall_is_clamped() {
        let mut env = TestEnv::new();
        let mut scene = scene(&mut env);
        scene.player.moving = true;

        scene.update(&mut env.ctx(0.0));
        scene.update(&mut env.ctx(30.0));
        let moved = PLAYER_SPAWN_Y - scene.player.position().y;
        let expected = PLAYER_START_SPEED * DEFAULT_MAX_FRAME_DT;
        assert!((moved - expected).abs() < 0.01);
        assert!(env.requests.next.is_none());
    }

    #[test]
    fn test_direction_press_turns_and_moves() {
        let mut env = TestEnv::new();
        let mut scene = scene(&mut env);

        scene.poll_input(&[InputEvent::Pressed(Action::Left)], &mut env.ctx(0.0));
        assert_eq!(scene.player.heading, Heading::Left);
        assert!(scene.player.moving);
        assert_eq!(scene.player.rotation(), 90.0);

        // Release keeps moving by default
        scene.poll_input(&[InputEvent::Released(Action::Left)], &mut env.ctx(0.0));
        assert!(scene.player.moving);
    }

    #[test]
    fn test_release_stops_when_configured() {
        let mut env = TestEnv::new();
        env.settings.stop_on_release = true;
        let mut scene = scene(&mut env);

        scene.poll_input(&[InputEvent::Pressed(Action::Down)], &mut env.ctx(0.0));
        // Releasing a different direction changes nothing
        scene.poll_input(&[InputEvent::Released(Action::Up)], &mut env.ctx(0.0));
        assert!(scene.player.moving);

        scene.poll_input(&[InputEvent::Released(Action::Down)], &mut env.ctx(0.0));
        assert!(!scene.player.moving);
    }

    #[test]
    fn test_collection() {
        let mut env = TestEnv::new();
        let mut scene = scene(&mut env);
        bait(&mut scene);

        scene.update(&mut env.ctx(0.0));

        assert_eq!(env.score.value(), 1);
        assert_eq!(env.score.high(), 1);
        assert_eq!(scene.player.speed, PLAYER_START_SPEED + SPEED_INCREMENT);
        assert_eq!(env.audio.count(SoundCue::Collect), 1);
        let pos = scene.collectible.position();
        assert!((60.0..=1220.0).contains(&pos.x));
        assert!((60.0..=650.0).contains(&pos.y));
    }

    #[test]
    fn test_no_collection_when_apart() {
        let mut env = TestEnv::new();
        let mut scene = scene(&mut env);
        scene.collectible.entity.pos = Vec2::new(60.0, 60.0);

        scene.update(&mut env.ctx(0.0));
        assert_eq!(env.score.value(), 0);
        assert!(env.audio.played.is_empty());
    }

    #[test]
    fn test_out_of_bounds_requests_death() {
        let mut env = TestEnv::new();
        let mut scene = scene(&mut env);
        scene.player.set_position(Vec2::new(1300.0, 300.0));
        // Even sitting on the collectible, a dead player scores nothing
        bait(&mut scene);

        scene.update(&mut env.ctx(0.0));
        assert_eq!(env.requests.next, Some(SceneId::Death));
        assert!(scene.player.is_dead());
        assert_eq!(env.score.value(), 0);
    }

    #[test]
    fn test_milestone_message() {
        let mut env = TestEnv::new();
        let mut scene = scene(&mut env);
        assert_eq!(scene.displayed_message(), None);

        for i in 0..5 {
            bait(&mut scene);
            scene.update(&mut env.ctx(i as f64));
        }
        assert_eq!(env.score.value(), 5);
        assert_eq!(scene.displayed_message(), Some("Penta Kill!"));
    }

    #[test]
    fn test_milestone_burst_shows_highest() {
        let mut env = TestEnv::new();
        let mut scene = scene(&mut env);
        for _ in 0..12 {
            env.score.increment();
        }
        scene.update(&mut env.ctx(0.0));
        assert_eq!(scene.displayed_message(), Some("Killing Frenzy!"));
        assert!(scene.milestones().is_displayed(5));
    }

    #[test]
    fn test_render_draws_score_and_message() {
        let mut env = TestEnv::new();
        let mut scene = scene(&mut env);
        for _ in 0..5 {
            env.score.increment();
        }
        scene.update(&mut env.ctx(0.0));

        let mut sink = CommandBuffer::new();
        scene.render(&mut sink, &env.score);
        sink.present();

        let texts: Vec<_> = sink.texts().collect();
        assert_eq!(texts, vec!["5", "Penta Kill!"]);
        let sprites: Vec<_> = sink.sprites().collect();
        assert_eq!(
            sprites,
            vec![
                SpriteId::Background,
                SpriteId::Player,
                SpriteId::Collectible,
            ]
        );
    }
}
