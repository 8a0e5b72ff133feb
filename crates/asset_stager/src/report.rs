use std::path::PathBuf;

use serde_json::{json, Value};

use crate::stage::to_slash_path;
use crate::StageWarning;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryReport {
    pub name: String,
    pub source_root: PathBuf,
    pub destination: PathBuf,
    /// Paths under the source root matched by at least one pattern.
    pub matched: usize,
    /// Copied files, relative to `destination`.
    pub copied_files: Vec<PathBuf>,
    pub created_dirs: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StageReport {
    pub cleaned: Vec<PathBuf>,
    pub entries: Vec<EntryReport>,
    pub warnings: Vec<StageWarning>,
}

impl StageReport {
    pub fn total_files(&self) -> usize {
        self.entries.iter().map(|e| e.copied_files.len()).sum()
    }

    pub fn to_json(&self, staged_utc: &str) -> Value {
        json!({
            "staged_utc": staged_utc,
            "total_files": self.total_files(),
            "cleaned": self.cleaned.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
            "entries": self.entries.iter().map(|e| {
                json!({
                    "name": e.name,
                    "source_root": e.source_root.display().to_string(),
                    "destination": e.destination.display().to_string(),
                    "matched": e.matched,
                    "created_dirs": e.created_dirs,
                    "files": e.copied_files.iter().map(|p| to_slash_path(p)).collect::<Vec<_>>(),
                })
            }).collect::<Vec<_>>(),
            "warnings": self.warnings.iter().map(ToString::to_string).collect::<Vec<_>>(),
        })
    }
}
