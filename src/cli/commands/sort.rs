//! sg sort - dependency-order proposed skills.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use tracing::info;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::graph::{sort_skills, ProposedSkill, LEVEL_NEW};

#[derive(Args, Debug)]
pub struct SortArgs {
    /// JSON array of proposed skills (default: stdin)
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}

pub fn run(cli: &Cli, config: &Config, args: &SortArgs) -> Result<()> {
    let raw = super::read_input(args.input.as_deref())?;
    let skills: Vec<ProposedSkill> = serde_json::from_str(&raw)?;

    let sorted = sort_skills(&skills)?;
    info!(
        input = skills.len(),
        output = sorted.len(),
        "sorted proposed skills"
    );

    let format = cli.output_format(config);
    if format.is_machine_readable() {
        println!("{}", serde_json::to_string_pretty(&sorted)?);
        return Ok(());
    }

    for (i, skill) in sorted.iter().enumerate() {
        let level = if format.use_colors() {
            if skill.level == LEVEL_NEW {
                skill.level.as_str().yellow().to_string()
            } else {
                skill.level.as_str().cyan().to_string()
            }
        } else {
            skill.level.clone()
        };
        println!("{:>3}. {} [{}]", i + 1, skill.name, level);
    }

    Ok(())
}
