//! sg tree - rebuild and render a scored prerequisite tree.

use std::path::PathBuf;

use clap::Args;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::tree::{to_ai_string, to_ai_string_no_levels, to_ai_string_no_levels_with};
use crate::tree::{ScoredSkillRow, SkillScoreTree};

#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Root skill id to rebuild the tree for
    pub skill_id: String,

    /// JSON array of scored skill rows (default: stdin)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Omit the [LEVEL Subskills] group headers
    #[arg(long)]
    pub no_levels: bool,

    /// Append average score and sample count to each line (implies --no-levels)
    #[arg(long)]
    pub scores: bool,

    /// Base indent level (default from config)
    #[arg(long)]
    pub indent: Option<usize>,
}

pub fn run(cli: &Cli, config: &Config, args: &TreeArgs) -> Result<()> {
    let raw = super::read_input(args.input.as_deref())?;
    let rows: Vec<ScoredSkillRow> = serde_json::from_str(&raw)?;

    let tree = SkillScoreTree::from_rows(&rows, &args.skill_id)?;

    if cli.output_format(config).is_machine_readable() {
        println!("{}", serde_json::to_string_pretty(&tree)?);
        return Ok(());
    }

    let indent = args.indent.unwrap_or(config.tree.indent);
    let rendered = if args.scores {
        to_ai_string_no_levels_with(&tree, indent, |node| {
            format!(
                "{} (avg {:.2}, n={})",
                node.skill_name,
                node.average_normalized_score_upstream,
                node.activity_result_count_upstream
            )
        })
    } else if args.no_levels {
        to_ai_string_no_levels(&tree, indent)
    } else {
        to_ai_string(&tree, indent)
    };
    println!("{rendered}");

    Ok(())
}
