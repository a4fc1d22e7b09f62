//! Session score and high score

use std::fmt;

/// Collection counter plus the best count reached this session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Score {
    value: u32,
    high: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn high(&self) -> u32 {
        self.high
    }

    /// Count one collection and raise the high score if needed
    pub fn increment(&mut self) {
        self.value += 1;
        self.high = self.high.max(self.value);
    }

    /// Start a new run. The high score is kept.
    pub fn reset(&mut self) {
        self.value = 0;
    }

    /// Text form of the current score, built fresh on every call
    pub fn text(&self) -> String {
        self.value.to_string()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
