//! Command implementations behind the CLI.
//!
//! Each command resolves its kind selector, loops the selected kinds, and
//! drives the registry operations; user-facing output goes to stdout,
//! diagnostics to the tracing subscriber.

use crate::cli::{BuildIndexArgs, CheckEntriesArgs, MakeHtmlArgs, SplitIndexArgs};
use crate::index::SystemClock;
use crate::kind::{self, KindSelector};
use crate::render::{self, TemplateStore};
use crate::store::LeaderboardPaths;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

pub fn run_build_index(args: BuildIndexArgs) -> Result<()> {
    let selector: KindSelector = args.name.parse()?;
    let clock = SystemClock;
    for kind in selector.kinds() {
        let paths = LeaderboardPaths::new(&args.data_dir, kind);
        let report = (kind::ops(kind).build_index)(&paths, &clock)?;
        println!(
            "wrote {} ({} entries, {} skipped)",
            report.index_path.display(),
            report.entries,
            report.skipped
        );
    }
    Ok(())
}

pub fn run_make_html(args: MakeHtmlArgs) -> Result<()> {
    let selector: KindSelector = args.name.parse()?;
    let templates = template_store(&args.template_dir);
    let clock = SystemClock;
    for kind in selector.kinds() {
        let paths = LeaderboardPaths::new(&args.data_dir, kind);
        let table_html =
            (kind::ops(kind).render_table)(&paths, &templates, args.force_update, &clock)?;

        write_asset(
            &args.target_dir.join("snippets"),
            &format!("{kind}.html"),
            &table_html,
        )?;

        let preview_html = render::render_preview(&templates, kind, &table_html)?;
        write_asset(
            &args.target_dir.join("preview"),
            &format!("{kind}.html"),
            &preview_html,
        )?;

        let script = render::render_javascript(&templates, kind)?;
        write_asset(&args.target_dir.join("js"), &format!("{kind}.js"), &script)?;

        println!(
            "wrote snippet, preview and js for {kind} under {}",
            args.target_dir.display()
        );
    }
    Ok(())
}

pub fn run_split_index(args: SplitIndexArgs) -> Result<()> {
    let selector: KindSelector = args.name.parse()?;
    for kind in selector.kinds() {
        let paths = LeaderboardPaths::new(&args.data_dir, kind);
        let report = (kind::ops(kind).split_index)(&paths)?;
        println!(
            "wrote {} entry directories for {kind} under {}",
            report.directories.len(),
            paths.kind_dir().display()
        );
    }
    Ok(())
}

pub fn run_check_entries(args: CheckEntriesArgs) -> Result<()> {
    let selector: KindSelector = args.name.parse()?;
    let mut invalid = 0usize;
    for kind in selector.kinds() {
        let paths = LeaderboardPaths::new(&args.data_dir, kind);
        let report = (kind::ops(kind).check_entries)(&paths)?;
        for problem in &report.problems {
            eprintln!("{}: {}", problem.dir.display(), problem.detail);
        }
        println!(
            "{kind}: {} valid, {} skipped, {} invalid",
            report.valid,
            report.skipped,
            report.problems.len()
        );
        invalid += report.problems.len();
    }
    if invalid > 0 {
        bail!("{invalid} invalid entry payload(s)");
    }
    Ok(())
}

fn template_store(template_dir: &Option<std::path::PathBuf>) -> TemplateStore {
    match template_dir {
        Some(dir) => TemplateStore::with_root(dir.clone()),
        None => TemplateStore::builtin(),
    }
}

fn write_asset(dir: &Path, file_name: &str, content: &str) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let path = dir.join(file_name);
    fs::write(&path, content).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
