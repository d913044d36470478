use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SgError {
    #[error("Dependency cycle detected among: {0}")]
    CycleDetected(String),

    #[error("Skill not found: {0}")]
    SkillNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SgError>;
