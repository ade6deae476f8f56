//! CLI argument parsing for the leaderboard workflow.
//!
//! The CLI is intentionally thin: it selects kinds and directories and
//! hands off to the workflow functions, so the same core logic stays
//! reusable from the library.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint for leaderboard management.
#[derive(Parser, Debug)]
#[command(
    name = "ldb",
    version,
    about = "Manage leaderboard indexes, entries, and site assets",
    after_help = "Commands:\n  build-index -n <name>     Aggregate entry directories into <kind>/index.json\n  split-index -n <name>     Explode an index into per-entry directories\n  check-entries -n <name>   Validate every entry payload without building\n  make-html -n <name>       Render table snippet, preview page, and js\n\nExamples:\n  ldb build-index -n zrc_prosaudit -d ./leaderboards\n  ldb check-entries -n all\n  ldb make-html -n zrc_prosaudit --force-update -t ./static\n  ldb split-index -n zrc_prosaudit",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level workflow commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    BuildIndex(BuildIndexArgs),
    SplitIndex(SplitIndexArgs),
    CheckEntries(CheckEntriesArgs),
    MakeHtml(MakeHtmlArgs),
}

/// Build one index per selected kind from its entry directories.
#[derive(Parser, Debug)]
#[command(about = "Aggregate entry directories into an index file")]
pub struct BuildIndexArgs {
    /// Leaderboard name, or "all" for every registered leaderboard
    #[arg(short = 'n', long, value_name = "NAME")]
    pub name: String,

    /// Directory holding one subdirectory per leaderboard
    #[arg(short = 'd', long, value_name = "DIR", default_value = "leaderboards")]
    pub data_dir: PathBuf,
}

/// Explode an index back into per-entry directories.
#[derive(Parser, Debug)]
#[command(about = "Split an index into per-entry directories with readmes")]
pub struct SplitIndexArgs {
    /// Leaderboard name, or "all" for every registered leaderboard
    #[arg(short = 'n', long, value_name = "NAME")]
    pub name: String,

    /// Directory holding one subdirectory per leaderboard
    #[arg(short = 'd', long, value_name = "DIR", default_value = "leaderboards")]
    pub data_dir: PathBuf,
}

/// Validate entry payloads without touching the index.
#[derive(Parser, Debug)]
#[command(about = "Validate every entry payload of the selected leaderboards")]
pub struct CheckEntriesArgs {
    /// Leaderboard name, or "all" for every registered leaderboard
    #[arg(short = 'n', long, value_name = "NAME")]
    pub name: String,

    /// Directory holding one subdirectory per leaderboard
    #[arg(short = 'd', long, value_name = "DIR", default_value = "leaderboards")]
    pub data_dir: PathBuf,
}

/// Render site assets from the validated leaderboard data.
#[derive(Parser, Debug)]
#[command(about = "Render table snippet, preview page, and bootstrap js")]
pub struct MakeHtmlArgs {
    /// Leaderboard name, or "all" for every registered leaderboard
    #[arg(short = 'n', long, value_name = "NAME")]
    pub name: String,

    /// Directory holding one subdirectory per leaderboard
    #[arg(short = 'd', long, value_name = "DIR", default_value = "leaderboards")]
    pub data_dir: PathBuf,

    /// Output directory for snippets, previews, and js
    #[arg(short = 't', long, value_name = "DIR", default_value = "static")]
    pub target_dir: PathBuf,

    /// Rebuild the index from entry directories before rendering
    #[arg(long)]
    pub force_update: bool,

    /// Load templates from this directory instead of the embedded ones
    #[arg(long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,
}
