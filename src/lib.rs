pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod test_utils;
pub mod tree;

pub use error::{Result, SgError};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
