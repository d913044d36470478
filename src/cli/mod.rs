//! CLI module - command-line interface definitions and handlers.
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod output;

use crate::config::Config;

/// Skill graph engine - order proposed skills and render scored prerequisite trees
#[derive(Parser, Debug)]
#[command(name = "sg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, plain)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Machine-readable JSON output (shorthand for --output-format=json)
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Force plain output (no colors)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/sg/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Topologically order proposed skills, dependencies first
    Sort(commands::sort::SortArgs),
    /// Rebuild a scored prerequisite tree and render it
    Tree(commands::tree::TreeArgs),
}

impl Cli {
    /// Effective output format.
    ///
    /// Priority: `--plain`, then `--output-format`, then `--machine`, then
    /// the config file default, then human.
    #[must_use]
    pub fn output_format(&self, config: &Config) -> OutputFormat {
        if self.plain {
            return OutputFormat::Plain;
        }
        if let Some(fmt) = self.output_format {
            return fmt;
        }
        if self.machine {
            return OutputFormat::Json;
        }
        config.output.format.unwrap_or_default()
    }
}
