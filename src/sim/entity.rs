//! Game entities: the player, the collectible, and floating text
//!
//! Bounds are always derived from the current position, never stored.

use glam::Vec2;
use rand::Rng;

use super::rect::Rect;
use crate::consts::*;
use crate::renderer::{Color, RenderSink, SpriteId};

/// A positioned sprite with a fixed-size bounding box
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub pos: Vec2,
    pub sprite: SpriteId,
    pub width: u32,
    pub height: u32,
}

impl Entity {
    pub fn new(pos: Vec2, sprite: SpriteId, width: u32, height: u32) -> Self {
        Self {
            pos,
            sprite,
            width,
            height,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// Bounding box with origin at the floored position
    pub fn bounds(&self) -> Rect {
        Rect::at(self.pos, self.width, self.height)
    }

    pub fn render(&self, sink: &mut impl RenderSink) {
        sink.draw_sprite(self.sprite, self.pos, 0.0);
    }
}

/// Facing / movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Right,
    Down,
    Left,
}

impl Heading {
    /// Sprite facing angle in degrees (counter-clockwise, up = 0)
    pub fn angle(&self) -> f32 {
        match self {
            Heading::Up => 0.0,
            Heading::Right => 270.0,
            Heading::Down => 180.0,
            Heading::Left => 90.0,
        }
    }

    /// Unit movement vector in screen space (y down)
    pub fn direction(&self) -> Vec2 {
        match self {
            Heading::Up => Vec2::NEG_Y,
            Heading::Right => Vec2::X,
            Heading::Down => Vec2::Y,
            Heading::Left => Vec2::NEG_X,
        }
    }
}

/// Result of advancing the player one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    InBounds,
    /// Position left the play box; the player is dead
    OutOfBounds,
}

/// The player's sprite
#[derive(Debug, Clone)]
pub struct Player {
    pub entity: Entity,
    pub heading: Heading,
    /// Pixels per second
    pub speed: f32,
    pub moving: bool,
    pub health: i32,
    /// Angle of the currently facing sprite
    angle: f32,
    /// Accumulated sprite rotation applied so far (degrees)
    rotation: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y))
    }
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            entity: Entity::new(pos, SpriteId::Player, PLAYER_WIDTH, PLAYER_HEIGHT),
            heading: Heading::Up,
            speed: PLAYER_START_SPEED,
            moving: false,
            health: PLAYER_START_HEALTH,
            angle: Heading::Up.angle(),
            rotation: 0.0,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.entity.pos
    }

    /// Teleport (tests and debugging)
    pub fn set_position(&mut self, pos: Vec2) {
        self.entity.pos = pos;
    }

    pub fn bounds(&self) -> Rect {
        self.entity.bounds()
    }

    /// Current sprite rotation in degrees
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Face a new direction.
    ///
    /// The sprite turns by the signed difference between the new and old
    /// facing angles, so repeating the same heading is a no-op.
    pub fn set_heading(&mut self, heading: Heading) {
        let new_angle = heading.angle();
        self.rotation += new_angle - self.angle;
        self.angle = new_angle;
        self.heading = heading;
    }

    /// Advance along the heading by `speed * dt` if moving, then check the
    /// play box. Leaving it drops health to zero.
    pub fn step(&mut self, dt: f32) -> StepOutcome {
        if self.moving {
            self.entity.pos += self.heading.direction() * self.speed * dt;
        }

        if self.in_bounds() {
            StepOutcome::InBounds
        } else {
            self.health = 0;
            StepOutcome::OutOfBounds
        }
    }

    pub fn in_bounds(&self) -> bool {
        let pos = self.entity.pos;
        (PLAY_MIN_X..=PLAY_MAX_X).contains(&pos.x) && (PLAY_MIN_Y..=PLAY_MAX_Y).contains(&pos.y)
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn render(&self, sink: &mut impl RenderSink) {
        sink.draw_sprite(self.entity.sprite, self.entity.pos, self.rotation);
    }
}

/// The item the player chases. Moved, never recreated, when picked up.
#[derive(Debug, Clone)]
pub struct Collectible {
    pub entity: Entity,
}

impl Default for Collectible {
    fn default() -> Self {
        Self::new(Vec2::new(COLLECTIBLE_START_X, COLLECTIBLE_START_Y))
    }
}

impl Collectible {
    pub fn new(pos: Vec2) -> Self {
        Self {
            entity: Entity::new(
                pos,
                SpriteId::Collectible,
                COLLECTIBLE_WIDTH,
                COLLECTIBLE_HEIGHT,
            ),
        }
    }

    /// Spawn at a random position inside the safe respawn area
    pub fn spawn(rng: &mut impl Rng) -> Self {
        let mut collectible = Self::default();
        collectible.relocate(rng);
        collectible
    }

    pub fn position(&self) -> Vec2 {
        self.entity.pos
    }

    pub fn bounds(&self) -> Rect {
        self.entity.bounds()
    }

    /// Jump to a uniformly random whole-pixel position in the respawn area
    pub fn relocate(&mut self, rng: &mut impl Rng) {
        let x = rng.random_range(SPAWN_MIN_X..=SPAWN_MAX_X);
        let y = rng.random_range(SPAWN_MIN_Y..=SPAWN_MAX_Y);
        self.entity.pos = Vec2::new(x as f32, y as f32);
        log::debug!("Collectible relocated to ({x}, {y})");
    }

    pub fn render(&self, sink: &mut impl RenderSink) {
        self.entity.render(sink);
    }
}

/// A line of text drawn at a fixed spot
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub pos: Vec2,
    pub text: String,
    pub color: Color,
}

impl Text {
    pub fn new(x: f32, y: f32, text: impl Into<String>, color: Color) -> Self {
        Self {
            pos: Vec2::new(x, y),
            text: text.into(),
            color,
        }
    }

    pub fn render(&self, sink: &mut impl RenderSink) {
        sink.draw_text(&self.text, self.pos, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use crate::renderer::{CommandBuffer, DrawCommand};

    #[test]
    fn test_step_up_moves_only_y() {
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        player.moving = true;
        player.step(0.1);

        assert_eq!(player.position().x, 100.0);
        assert!(player.position().y < 100.0);
    }

    #[test]
    fn test_step_idle_player_stays_put() {
        let mut player = Player::default();
        assert_eq!(player.step(1.0), StepOutcome::InBounds);
        let spawn = Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y);
        assert_eq!(player.position(), spawn);
    }

    #[test]
    fn test_bounds_follow_position() {
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        player.set_heading(Heading::Right);
        player.moving = true;
        player.speed = 10.0;
        player.step(0.25);

        assert_eq!(player.position().x, 102.5);
        let expected = Rect::new(102, 100, PLAYER_WIDTH, PLAYER_HEIGHT);
        assert_eq!(player.bounds(), expected);
    }

    #[test]
    fn test_player_touching_collectible() {
        let player = Player::new(Vec2::new(100.0, 100.0));
        let collectible = Collectible::new(Vec2::new(105.0, 105.0));
        assert!(player.bounds().overlaps(&collectible.bounds()));
    }

    #[test]
    fn test_leaving_field_kills() {
        let mut player = Player::default();
        player.set_position(Vec2::new(1300.0, 300.0));
        assert_eq!(player.step(0.0), StepOutcome::OutOfBounds);
        assert!(player.is_dead());

        let mut player = Player::new(Vec2::new(PLAY_MIN_X + 1.0, 300.0));
        player.set_heading(Heading::Left);
        player.moving = true;
        assert_eq!(player.step(0.01), StepOutcome::OutOfBounds);
        assert_eq!(player.health, 0);
    }

    #[test]
    fn test_edge_of_field_is_safe() {
        for corner in [(PLAY_MIN_X, PLAY_MIN_Y), (PLAY_MAX_X, PLAY_MAX_Y)] {
            let mut player = Player::new(Vec2::new(corner.0, corner.1));
            assert_eq!(player.step(0.0), StepOutcome::InBounds);
            assert_eq!(player.health, PLAYER_START_HEALTH);
        }
    }

    #[test]
    fn test_just_past_lower_edge_kills() {
        let mut player = Player::new(Vec2::new(19.9, 20.0));
        assert_eq!(player.step(0.0), StepOutcome::OutOfBounds);
        assert!(player.is_dead());

        let mut player = Player::new(Vec2::new(20.0, 19.9));
        assert_eq!(player.step(0.0), StepOutcome::OutOfBounds);
    }

    #[test]
    fn test_set_heading_rotates_by_delta() {
        let mut player = Player::default();
        player.set_heading(Heading::Left);
        assert_eq!(player.rotation(), 90.0);

        player.set_heading(Heading::Down);
        assert_eq!(player.rotation(), 180.0);
        assert_eq!(player.heading, Heading::Down);

        // Back to up undoes all rotation
        player.set_heading(Heading::Up);
        assert_eq!(player.rotation(), 0.0);
    }

    #[test]
    fn test_set_heading_idempotent() {
        let mut once = Player::default();
        once.set_heading(Heading::Right);

        let mut twice = Player::default();
        twice.set_heading(Heading::Right);
        twice.set_heading(Heading::Right);

        assert_eq!(once.rotation(), twice.rotation());
        assert_eq!(once.heading, twice.heading);
    }

    #[test]
    fn test_player_renders_rotated_sprite() {
        let mut player = Player::default();
        player.set_heading(Heading::Right);

        let mut sink = CommandBuffer::new();
        player.render(&mut sink);
        sink.present();
        assert_eq!(
            sink.frame(),
            &[DrawCommand::Sprite {
                sprite: SpriteId::Player,
                pos: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
                rotation: 270.0,
            }]
        );
    }

    #[test]
    fn test_relocate_keeps_identity() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut collectible = Collectible::default();
        let before = collectible.entity.sprite;
        collectible.relocate(&mut rng);
        assert_eq!(collectible.entity.sprite, before);
        assert_eq!(collectible.position().fract(), Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn prop_step_single_axis(dt in 0.0f32..0.1, heading_idx in 0usize..4) {
            let heading = [Heading::Up, Heading::Right, Heading::Down, Heading::Left][heading_idx];
            let start = Vec2::new(640.0, 360.0);
            let mut player = Player::new(start);
            player.set_heading(heading);
            player.moving = true;
            player.step(dt);
            let pos = player.position();

            match heading {
                Heading::Up => {
                    prop_assert_eq!(pos.x, start.x);
                    prop_assert!(pos.y <= start.y);
                    if dt > 1e-3 { prop_assert!(pos.y < start.y); }
                }
                Heading::Down => {
                    prop_assert_eq!(pos.x, start.x);
                    prop_assert!(pos.y >= start.y);
                    if dt > 1e-3 { prop_assert!(pos.y > start.y); }
                }
                Heading::Left => {
                    prop_assert_eq!(pos.y, start.y);
                    prop_assert!(pos.x <= start.x);
                    if dt > 1e-3 { prop_assert!(pos.x < start.x); }
                }
                Heading::Right => {
                    prop_assert_eq!(pos.y, start.y);
                    prop_assert!(pos.x >= start.x);
                    if dt > 1e-3 { prop_assert!(pos.x > start.x); }
                }
            }
        }

        #[test]
        fn prop_relocate_in_range(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut collectible = Collectible::default();
            for _ in 0..16 {
                collectible.relocate(&mut rng);
                let pos = collectible.position();
                prop_assert!((60.0..=1220.0).contains(&pos.x));
                prop_assert!((60.0..=650.0).contains(&pos.y));
                prop_assert_eq!(collectible.bounds().x as f32, pos.x);
            }
        }
    }
}
