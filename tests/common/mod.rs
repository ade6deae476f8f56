//! Shared test infrastructure for integration tests.

use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// A valid zrc_prosaudit entry payload, as an external author would write it.
pub fn prosaudit_entry(index: i64, author: &str, institution: &str, year: i32) -> Value {
    json!({
        "model_id": format!("model-{author}"),
        "submission_id": "",
        "index": index,
        "submission_date": null,
        "submitted_by": null,
        "description": format!("submission by {author}"),
        "publication": {
            "author_short": author,
            "authors": null,
            "paper_title": null,
            "paper_ref": null,
            "bib_ref": null,
            "paper_url": null,
            "pub_year": year,
            "team_name": null,
            "institution": institution,
            "code": null,
            "DOI": null,
            "open_science": false
        },
        "details": {
            "train_set": "librispeech",
            "gpu_budget": null,
            "parameters": {}
        },
        "scores": {
            "protosyntax": {"english": {"score": 0.9, "n": 120, "std": 0.02}},
            "lexical": {"english": {"score": 0.8, "n": 120, "std": 0.03}}
        },
        "extras": null
    })
}

/// Write a payload as `<kind_dir>/<dir_name>/entry.json`.
pub fn write_entry(kind_dir: &Path, dir_name: &str, payload: &Value) {
    let dir = kind_dir.join(dir_name);
    fs::create_dir_all(&dir).expect("create entry dir");
    fs::write(
        dir.join("entry.json"),
        serde_json::to_vec_pretty(payload).expect("serialize payload"),
    )
    .expect("write payload");
}

