//! Score milestones and their one-shot announcements

use std::collections::BTreeSet;

/// A score threshold with its celebratory message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub score: u32,
    pub message: &'static str,
}

impl Milestone {
    pub const fn new(score: u32, message: &'static str) -> Self {
        Self { score, message }
    }
}

/// Ordered small → large
pub const MILESTONES: &[Milestone] = &[
    Milestone::new(5, "Penta Kill!"),
    Milestone::new(10, "Killing Frenzy!"),
    Milestone::new(15, "Murder Spree!"),
    Milestone::new(20, "Killtastrophe!"),
    Milestone::new(25, "Mother of god..."),
    Milestone::new(30, "Nuclear!!!"),
    Milestone::new(40, "George Bush would be proud"),
    Milestone::new(50, "G E N O C I D E"),
    Milestone::new(60, "Genghis Khan reincarnate"),
    Milestone::new(70, "BLACK DEATH"),
    Milestone::new(100, "G O D L I K E"),
];

/// Remembers which milestones one play session has already announced
#[derive(Debug, Clone, Default)]
pub struct MilestoneTracker {
    displayed: BTreeSet<u32>,
}

impl MilestoneTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark every reached, unannounced milestone as displayed.
    ///
    /// Returns the message of the highest milestone crossed by this call,
    /// or `None` when nothing new was reached.
    pub fn evaluate(&mut self, score: u32) -> Option<&'static str> {
        let mut latest = None;
        for milestone in MILESTONES.iter().take_while(|m| m.score <= score) {
            if self.displayed.insert(milestone.score) {
                latest = Some(milestone.message);
            }
        }
        latest
    }

    pub fn is_displayed(&self, threshold: u32) -> bool {
        self.displayed.contains(&threshold)
    }

    pub fn displayed_count(&self) -> usize {
        self.displayed.len()
    }
}
