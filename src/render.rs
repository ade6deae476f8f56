//! Rendering collaborator: template store, HTML table snippets, preview
//! pages, DataTables bootstrap scripts, and per-entry readmes.
//!
//! Templates are plain text with `{{token}}` placeholders; row and readme
//! bodies are rendered by hand. The store serves the embedded templates
//! unless an explicit root directory was injected at construction.

use crate::error::LeaderboardError;
use crate::kind::LeaderboardKind;
use crate::model::{ExtraSet, Leaderboard, LeaderboardEntry, ScoreSet};
use crate::templates;
use std::fs;
use std::path::PathBuf;

const PREVIEW_TEMPLATE: &str = "preview.html";
const BASE_JS_TEMPLATE: &str = "base.leaderboard.js";

/// Source of template text, resolved at construction time.
pub struct TemplateStore {
    root: Option<PathBuf>,
}

impl TemplateStore {
    /// Serve the templates compiled into the binary.
    pub fn builtin() -> Self {
        Self { root: None }
    }

    /// Serve templates from an explicit directory instead.
    pub fn with_root(root: PathBuf) -> Self {
        Self { root: Some(root) }
    }

    /// Load a template by file name.
    pub fn load(&self, name: &str) -> Result<String, LeaderboardError> {
        match &self.root {
            Some(root) => {
                let path = root.join(name);
                if !path.is_file() {
                    return Err(LeaderboardError::TemplateNotFound(name.to_string()));
                }
                fs::read_to_string(&path).map_err(|source| LeaderboardError::Read { path, source })
            }
            None => templates::builtin(name)
                .map(str::to_string)
                .ok_or_else(|| LeaderboardError::TemplateNotFound(name.to_string())),
        }
    }

    /// Table snippet template for a kind.
    pub fn table_snippet(&self, kind: LeaderboardKind) -> Result<String, LeaderboardError> {
        self.load(&format!("{kind}.html"))
    }

    /// Preview page shell.
    pub fn preview_page(&self) -> Result<String, LeaderboardError> {
        self.load(PREVIEW_TEMPLATE)
    }

    /// DataTables bootstrap script for a kind, falling back to the generic
    /// base script when the kind ships no override.
    pub fn javascript(&self, kind: LeaderboardKind) -> Result<String, LeaderboardError> {
        match self.load(&format!("{kind}.js")) {
            Ok(text) => Ok(text),
            Err(LeaderboardError::TemplateNotFound(_)) => self.load(BASE_JS_TEMPLATE),
            Err(err) => Err(err),
        }
    }
}

/// Replace every `{{token}}` occurrence in order.
pub fn substitute(template: &str, replacements: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (token, value) in replacements {
        out = out.replace(token, value);
    }
    out
}

/// Render a kind's table snippet from its validated leaderboard.
pub fn render_table<S: ScoreSet, X: ExtraSet>(
    kind: LeaderboardKind,
    board: &Leaderboard<S, X>,
    store: &TemplateStore,
) -> Result<String, LeaderboardError> {
    let snippet = store.table_snippet(kind)?;
    let mut rows = String::new();
    for entry in &board.data {
        rows.push_str(&render_row(entry));
    }
    Ok(substitute(
        &snippet,
        &[("{{table_id}}", kind.as_str()), ("{{rows}}", rows.trim_end())],
    ))
}

/// Wrap a rendered table snippet in the preview page shell.
pub fn render_preview(
    store: &TemplateStore,
    kind: LeaderboardKind,
    table_html: &str,
) -> Result<String, LeaderboardError> {
    let page = store.preview_page()?;
    Ok(substitute(
        &page,
        &[
            ("{{name}}", &capitalize(kind.as_str())),
            ("{{table_html}}", table_html),
        ],
    ))
}

/// Render the DataTables bootstrap script for a kind.
pub fn render_javascript(
    store: &TemplateStore,
    kind: LeaderboardKind,
) -> Result<String, LeaderboardError> {
    let script = store.javascript(kind)?;
    Ok(substitute(&script, &[("{{table_id}}", kind.as_str())]))
}

fn render_row<S: ScoreSet, X: ExtraSet>(entry: &LeaderboardEntry<S, X>) -> String {
    let mut cells = vec![details_cell(entry)];
    cells.push(td(&escape_html(entry.model_id.as_deref().unwrap_or(""))));
    cells.push(td(&escape_html(
        entry.publication.author_short.as_deref().unwrap_or(""),
    )));
    cells.push(td(
        &entry
            .publication
            .pub_year
            .map(|year| year.to_string())
            .unwrap_or_default(),
    ));
    for cell in entry.scores.table_cells() {
        cells.push(td(&escape_html(&cell)));
    }

    let mut row = String::from("        <tr>\n");
    for cell in cells {
        row.push_str("            ");
        row.push_str(&cell);
        row.push('\n');
    }
    row.push_str("        </tr>\n");
    row
}

fn details_cell<S: ScoreSet, X: ExtraSet>(entry: &LeaderboardEntry<S, X>) -> String {
    let mut items = vec![format!(
        "<li>Institution: {}</li>",
        escape_html(&entry.publication.institution)
    )];
    if let Some(submitted_by) = &entry.submitted_by {
        items.push(format!("<li>Submitted by: {}</li>", escape_html(submitted_by)));
    }
    if let Some(train_set) = &entry.details.train_set {
        items.push(format!("<li>Train set: {}</li>", escape_html(train_set)));
    }
    if let Some(gpu_budget) = &entry.details.gpu_budget {
        items.push(format!("<li>GPU budget: {}</li>", escape_html(gpu_budget)));
    }
    if entry.publication.open_science {
        items.push("<li>Open science submission</li>".to_string());
    }

    format!(
        "<td class=\"details-control\"><div class=\"hidden-details\"><p>{}</p><ul>{}</ul></div></td>",
        escape_html(&entry.description),
        items.join("")
    )
}

fn td(content: &str) -> String {
    format!("<td>{content}</td>")
}

/// Generated description document for one entry directory.
pub fn render_readme<S: ScoreSet, X: ExtraSet>(
    kind: LeaderboardKind,
    entry: &LeaderboardEntry<S, X>,
) -> String {
    let mut title = entry.model_id.as_deref().unwrap_or("");
    if title.is_empty() {
        title = entry.submission_id.as_str();
    }
    if title.is_empty() {
        title = "Unnamed submission";
    }

    let mut out = String::new();
    push_line(&mut out, &format!("# {title}"));
    push_line(&mut out, "");
    push_line(&mut out, &format!("Entry of the `{kind}` leaderboard."));
    push_line(&mut out, "");
    push_line(&mut out, "## Description");
    push_line(&mut out, "");
    if entry.description.is_empty() {
        push_line(&mut out, "No description provided.");
    } else {
        push_line(&mut out, &entry.description);
    }
    push_line(&mut out, "");
    push_line(&mut out, "## Publication");
    push_line(&mut out, "");
    push_line(
        &mut out,
        &format!("- Institution: {}", entry.publication.institution),
    );
    push_opt(&mut out, "Authors", entry.publication.authors.as_deref());
    push_opt(&mut out, "Paper", entry.publication.paper_title.as_deref());
    push_opt(&mut out, "Reference", entry.publication.paper_ref.as_deref());
    push_opt(&mut out, "URL", entry.publication.paper_url.as_deref());
    if let Some(year) = entry.publication.pub_year {
        push_line(&mut out, &format!("- Year: {year}"));
    }
    push_opt(&mut out, "Team", entry.publication.team_name.as_deref());
    push_opt(&mut out, "Code", entry.publication.code.as_deref());
    push_opt(&mut out, "DOI", entry.publication.doi.as_deref());
    push_line(
        &mut out,
        &format!(
            "- Open science: {}",
            if entry.publication.open_science {
                "yes"
            } else {
                "no"
            }
        ),
    );
    push_line(&mut out, "");
    push_line(&mut out, "## Training details");
    push_line(&mut out, "");
    push_opt(&mut out, "Train set", entry.details.train_set.as_deref());
    push_opt(&mut out, "GPU budget", entry.details.gpu_budget.as_deref());
    for (key, value) in &entry.details.parameters {
        push_line(&mut out, &format!("- {key}: {value}"));
    }
    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn push_opt(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        push_line(out, &format!("- {label}: {value}"));
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
