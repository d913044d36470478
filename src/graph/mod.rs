//! Skill graph ordering.

pub mod order;

pub use order::{sort_skills, sort_skills_by, ProposedSkill, LEVEL_NEW};
