//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Time (monotonic seconds)
//! - Input events

use std::collections::VecDeque;
use std::time::Instant;

use crate::input::{InputEvent, bind_key};

/// Monotonic time source, in seconds
pub trait Clock {
    fn now(&self) -> f64;
}

/// Wall-clock time since creation
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Source of input events, drained once per frame
pub trait InputSource {
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// Replays a fixed list of per-frame event batches, then reports nothing
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Parse a key script: one frame per line, key names separated by
    /// whitespace, a leading `-` marks a release. Unbound keys are skipped.
    pub fn from_key_script(script: &str) -> Self {
        let frames = script.lines().map(|line| {
            line.split_whitespace()
                .filter_map(|token| {
                    let (released, key) = match token.strip_prefix('-') {
                        Some(key) => (true, key),
                        None => (false, token),
                    };
                    let Some(action) = bind_key(key) else {
                        log::warn!("Unbound key `{key}` in script");
                        return None;
                    };
                    Some(if released {
                        InputEvent::Released(action)
                    } else {
                        InputEvent::Pressed(action)
                    })
                })
                .collect::<Vec<_>>()
        });
        Self::new(frames)
    }

    pub fn is_exhausted(&self) -> bool {
        self.frames.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.frames.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Action;

    #[test]
    fn test_scripted_input_replays_in_order() {
        let mut input = ScriptedInput::new([
            vec![InputEvent::Pressed(Action::Confirm)],
            vec![],
            vec![
                InputEvent::Pressed(Action::Up),
                InputEvent::Released(Action::Up),
            ],
        ]);
        let confirm = vec![InputEvent::Pressed(Action::Confirm)];
        assert_eq!(input.poll_events(), confirm);
        assert!(input.poll_events().is_empty());
        assert_eq!(input.poll_events().len(), 2);
        assert!(input.is_exhausted());
        assert!(input.poll_events().is_empty());
    }

    #[test]
    fn test_key_script() {
        let mut input = ScriptedInput::from_key_script("space\n\nd -d\nx q\n");
        let confirm = vec![InputEvent::Pressed(Action::Confirm)];
        assert_eq!(input.poll_events(), confirm);
        assert!(input.poll_events().is_empty());
        assert_eq!(
            input.poll_events(),
            vec![
                InputEvent::Pressed(Action::Right),
                InputEvent::Released(Action::Right),
            ]
        );
        // Unbound `x` is dropped
        let quit = vec![InputEvent::Pressed(Action::Quit)];
        assert_eq!(input.poll_events(), quit);
        assert!(input.is_exhausted());
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
