use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::error::{Result, SgError};

/// CLI defaults loaded from an optional TOML file.
///
/// Load order: an explicit `--config` path, then the `SG_CONFIG` env var,
/// then `<config dir>/sg/config.toml`. A missing file yields defaults; a
/// malformed one is an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub tree: TreeConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format when no flag is given.
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Base indent level for rendered trees.
    pub indent: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self { indent: 0 }
    }
}

impl Config {
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("SG_CONFIG").ok().map(PathBuf::from));

        let path = match explicit {
            Some(path) => path,
            None => match dirs::config_dir() {
                Some(dir) => dir.join("sg/config.toml"),
                None => return Ok(Self::default()),
            },
        };

        Self::load_file(&path)
    }

    fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|e| SgError::Config(format!("{}: {e}", path.display())))
    }
}
