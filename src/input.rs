//! Input actions
//!
//! Hosts translate raw keys and window events into [`InputEvent`]s.

use crate::sim::Heading;

/// Abstract input actions the scenes understand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Right,
    Down,
    Left,
    /// Leave the start screen
    Confirm,
    /// Play again from the death screen
    Restart,
    /// Exit from the death screen
    Quit,
    /// Window closed; exits from any scene
    Close,
}

impl Action {
    /// Heading for movement actions
    pub fn heading(&self) -> Option<Heading> {
        match self {
            Action::Up => Some(Heading::Up),
            Action::Right => Some(Heading::Right),
            Action::Down => Some(Heading::Down),
            Action::Left => Some(Heading::Left),
            _ => None,
        }
    }
}

/// A press or release of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(Action),
    Released(Action),
}

/// Default key bindings, by lowercase key name
pub fn bind_key(key: &str) -> Option<Action> {
    match key.to_lowercase().as_str() {
        "w" | "up" => Some(Action::Up),
        "d" | "right" => Some(Action::Right),
        "s" | "down" => Some(Action::Down),
        "a" | "left" => Some(Action::Left),
        "space" => Some(Action::Confirm),
        "r" => Some(Action::Restart),
        "q" => Some(Action::Quit),
        _ => None,
    }
}
