//! Command handlers.

use std::io::Read;
use std::path::Path;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::error::Result;

pub mod sort;
pub mod tree;

pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    match &cli.command {
        Commands::Sort(args) => sort::run(cli, config, args),
        Commands::Tree(args) => tree::run(cli, config, args),
    }
}

/// Read JSON input from a file, or stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
