//! Scored prerequisite trees: reconstruction from flat rows and prompt rendering.

pub mod build;
pub mod render;

pub use build::{ScoredSkillRow, SkillScoreTree};
pub use render::{to_ai_string, to_ai_string_no_levels, to_ai_string_no_levels_with, LEVEL_ORDER};
