//! Boom Snake entry point
//!
//! Headless native runner: the autopilot plays a few rounds against a
//! recording renderer and a logging audio sink. Real window, image and sound
//! backends plug in through the same `RenderSink` / `AudioSink` traits.
//!
//! Usage: `boom-snake [settings.json] [keys.txt]`
//!
//! With a key script the runner replays it (one frame per line) instead of
//! using the autopilot, and stops when the script runs out.

use std::time::Duration;

use boom_snake::Game;
use boom_snake::audio::{AudioSink, MusicCommand, SoundCue};
use boom_snake::demo::Autopilot;
use boom_snake::platform::{Clock, InputSource, ScriptedInput, SystemClock};
use boom_snake::renderer::CommandBuffer;
use boom_snake::settings::Settings;

/// Score at which an autopilot run steers into a wall
const DEMO_TARGET_SCORE: u32 = 12;
/// Hard stop for the headless runner (10 minutes at 60 fps)
const MAX_FRAMES: u64 = 60 * 60 * 10;

/// Logs each cue with the volume a mixer would use
struct LogAudio {
    settings: Settings,
}

impl AudioSink for LogAudio {
    fn play(&mut self, cue: SoundCue) {
        log::debug!(
            "play {:?} at volume {:.2}",
            cue,
            self.settings.effective_volume(cue)
        );
    }

    fn music(&mut self, command: MusicCommand) {
        log::debug!("music {command:?}");
    }
}

fn main() {
    env_logger::init();
    log::info!("Boom Snake (headless) starting...");

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .unwrap_or_else(|| Settings::FILE_NAME.to_string());
    let settings = Settings::load_or_default(&path);

    let mut script = match args.next() {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(text) => {
                log::info!("Replaying key script {path}");
                Some(ScriptedInput::from_key_script(&text))
            }
            Err(e) => {
                log::error!("Cannot read key script {path}: {e}");
                return;
            }
        },
        None => None,
    };

    let frame_time = Duration::from_secs_f64(1.0 / settings.target_fps as f64);
    let mut pilot = Autopilot::new(settings.demo_runs, DEMO_TARGET_SCORE);
    let mut audio = LogAudio {
        settings: settings.clone(),
    };
    let mut render = CommandBuffer::new();
    let clock = SystemClock::new();
    let mut game = Game::new(settings);

    while game.frames() < MAX_FRAMES {
        let events = match script.as_mut() {
            Some(input) if input.is_exhausted() => break,
            Some(input) => input.poll_events(),
            None => pilot.decide(game.manager()),
        };
        if !game.frame(&events, clock.now(), &mut render, &mut audio) {
            break;
        }
        log::trace!(
            "frame {}: {} draw calls",
            game.frames(),
            render.frame().len()
        );
        std::thread::sleep(frame_time);
    }

    if game.is_running() && script.is_none() {
        log::warn!("Frame limit reached before the autopilot quit");
    }
    log::info!(
        "Done: {} frames, {} runs, high score {}",
        game.frames(),
        pilot.deaths(),
        game.manager().score().high()
    );
}
