//! Idle/demo mode - the computer plays the game
//!
//! Confirms the title screen, chases the collectible until a target score,
//! then steers into the nearest wall. After each death it restarts until
//! its run budget is spent, then quits.

use crate::consts::*;
use crate::input::{Action, InputEvent};
use crate::scene::{SceneId, SceneManager};
use crate::sim::{Heading, Player};

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Restarts left after the current run
    runs_left: u32,
    /// Score at which a run deliberately ends
    target_score: u32,
    /// Deaths observed so far
    deaths: u32,
    last_scene: SceneId,
}

impl Autopilot {
    pub fn new(runs: u32, target_score: u32) -> Self {
        Self {
            runs_left: runs.saturating_sub(1),
            target_score,
            deaths: 0,
            last_scene: SceneId::Start,
        }
    }

    pub fn deaths(&self) -> u32 {
        self.deaths
    }

    /// Input for the next frame
    pub fn decide(&mut self, manager: &SceneManager) -> Vec<InputEvent> {
        let scene = manager.active();
        let entered = scene != self.last_scene;
        self.last_scene = scene;

        match scene {
            SceneId::Start => vec![InputEvent::Pressed(Action::Confirm)],
            SceneId::Main => {
                if manager.pending().is_some() {
                    return Vec::new();
                }
                let Some(main) = manager.main_scene() else {
                    return Vec::new();
                };
                let heading = if manager.score().value() >= self.target_score {
                    nearest_wall(&main.player)
                } else {
                    chase(&main.player, main.collectible.bounds().center())
                };
                if main.player.moving && main.player.heading == heading {
                    Vec::new()
                } else {
                    vec![InputEvent::Pressed(heading_action(heading))]
                }
            }
            SceneId::Death => {
                if entered {
                    self.deaths += 1;
                    log::info!(
                        "Autopilot run {} over with score {}",
                        self.deaths,
                        manager.score().value()
                    );
                }
                if manager.pending().is_some() || manager.is_quit() {
                    Vec::new()
                } else if self.runs_left > 0 {
                    self.runs_left -= 1;
                    vec![InputEvent::Pressed(Action::Restart)]
                } else {
                    vec![InputEvent::Pressed(Action::Quit)]
                }
            }
        }
    }
}

/// Close the larger axis gap between the player's and the target's centers
fn chase(player: &Player, target: glam::Vec2) -> Heading {
    let delta = target - player.bounds().center();
    if delta.x.abs() >= delta.y.abs() {
        if delta.x >= 0.0 {
            Heading::Right
        } else {
            Heading::Left
        }
    } else if delta.y >= 0.0 {
        Heading::Down
    } else {
        Heading::Up
    }
}

fn nearest_wall(player: &Player) -> Heading {
    let pos = player.position();
    [
        (pos.y - PLAY_MIN_Y, Heading::Up),
        (PLAY_MAX_X - pos.x, Heading::Right),
        (PLAY_MAX_Y - pos.y, Heading::Down),
        (pos.x - PLAY_MIN_X, Heading::Left),
    ]
    .into_iter()
    .min_by(|a, b| a.0.total_cmp(&b.0))
    .map(|(_, heading)| heading)
    .unwrap_or(Heading::Up)
}

fn heading_action(heading: Heading) -> Action {
    match heading {
        Heading::Up => Action::Up,
        Heading::Right => Action::Right,
        Heading::Down => Action::Down,
        Heading::Left => Action::Left,
    }
}
