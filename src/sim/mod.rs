//! Simulation module
//!
//! Entities, bounding boxes, score and milestones. Nothing in here renders,
//! plays sound, or reads the clock; callers pass time and randomness in.

pub mod entity;
pub mod milestones;
pub mod rect;
pub mod score;

pub use entity::{Collectible, Entity, Heading, Player, StepOutcome, Text};
pub use milestones::{MILESTONES, Milestone, MilestoneTracker};
pub use rect::Rect;
pub use score::Score;
