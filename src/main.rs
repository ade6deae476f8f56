use anyhow::Result;
use clap::Parser;
use leaderboard_builder::cli::{Command, RootArgs};
use leaderboard_builder::workflow;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = RootArgs::parse();
    match args.command {
        Command::BuildIndex(args) => workflow::run_build_index(args),
        Command::SplitIndex(args) => workflow::run_split_index(args),
        Command::CheckEntries(args) => workflow::run_check_entries(args),
        Command::MakeHtml(args) => workflow::run_make_html(args),
    }
}
