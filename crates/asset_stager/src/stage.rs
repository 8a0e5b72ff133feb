use std::fs;
use std::path::{Path, PathBuf};

use stage_logging::{stage_debug, stage_info, stage_warn};
use walkdir::WalkDir;

use crate::clean::clean;
use crate::glob::GlobPattern;
use crate::persist::{ensure_output_dir, AtomicFileWriter};
use crate::report::{EntryReport, StageReport};
use crate::{AssetEntry, Manifest, StageError, StageOptions, StageWarning};

/// Clean the manifest's output trees, then copy every entry in order.
///
/// Missing source roots and patterns without matches are warnings. They only
/// fail the run when the manifest or `options` ask for strict staging, and
/// then only after every entry has been copied.
pub fn stage(
    manifest: &Manifest,
    project_root: &Path,
    options: StageOptions,
) -> Result<StageReport, StageError> {
    let entries = compile_entries(manifest)?;
    let cleaned = clean(manifest, project_root, options)?;

    let mut report = StageReport {
        cleaned,
        ..StageReport::default()
    };
    for (entry, patterns) in &entries {
        let (entry_report, warnings) = copy_entry(entry, patterns, project_root)?;
        for warning in &warnings {
            stage_warn!("{warning}");
        }
        stage_info!(
            "Staged '{}': {} file(s) into {}",
            entry.name,
            entry_report.copied_files.len(),
            entry_report.destination.display()
        );
        report.entries.push(entry_report);
        report.warnings.extend(warnings);
    }

    if (manifest.strict || options.strict) && !report.warnings.is_empty() {
        return Err(StageError::Strict(report.warnings));
    }
    Ok(report)
}

fn compile_entries(manifest: &Manifest) -> Result<Vec<(&AssetEntry, Vec<GlobPattern>)>, StageError> {
    manifest
        .entries
        .iter()
        .map(|entry| {
            let patterns = entry
                .src
                .iter()
                .map(|src| GlobPattern::new(src))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| StageError::InvalidGlob {
                    entry: entry.name.clone(),
                    source,
                })?;
            Ok((entry, patterns))
        })
        .collect()
}

fn copy_entry(
    entry: &AssetEntry,
    patterns: &[GlobPattern],
    project_root: &Path,
) -> Result<(EntryReport, Vec<StageWarning>), StageError> {
    let source_root = project_root.join(&entry.cwd);
    let destination = project_root.join(&entry.dest);
    let mut report = EntryReport {
        name: entry.name.clone(),
        source_root: source_root.clone(),
        destination: destination.clone(),
        ..EntryReport::default()
    };

    if !source_root.is_dir() {
        let warning = StageWarning::MissingSourceRoot {
            entry: entry.name.clone(),
            path: source_root,
        };
        return Ok((report, vec![warning]));
    }

    let writer = AtomicFileWriter::new(destination.clone());
    let mut hits = vec![0usize; patterns.len()];

    for item in WalkDir::new(&source_root).min_depth(1).sort_by_file_name() {
        let item = item.map_err(|err| StageError::Read {
            path: err.path().map(Path::to_path_buf).unwrap_or_else(|| source_root.clone()),
            source: err.into(),
        })?;
        let Ok(relative) = item.path().strip_prefix(&source_root) else {
            continue;
        };
        let relative_slash = to_slash_path(relative);

        // Directory matches are created but only files count as hits.
        let is_file = item.file_type().is_file();
        let mut matched = false;
        for (pattern, count) in patterns.iter().zip(hits.iter_mut()) {
            if pattern.matches(&relative_slash) {
                if is_file {
                    *count += 1;
                }
                matched = true;
            }
        }
        if !matched {
            continue;
        }
        report.matched += 1;

        if item.file_type().is_dir() {
            let dir = destination.join(relative);
            ensure_output_dir(&dir).map_err(|source| StageError::Write {
                path: dir.clone(),
                source,
            })?;
            report.created_dirs += 1;
            continue;
        }

        let content = fs::read(item.path()).map_err(|source| StageError::Read {
            path: item.path().to_path_buf(),
            source,
        })?;
        let target = writer
            .write(relative, &content)
            .map_err(|source| StageError::Write {
                path: destination.join(relative),
                source,
            })?;
        stage_debug!("copied {} -> {}", item.path().display(), target.display());
        report.copied_files.push(PathBuf::from(relative));
    }

    let warnings = patterns
        .iter()
        .zip(hits)
        .filter(|(_, count)| *count == 0)
        .map(|(pattern, _)| StageWarning::NoMatches {
            entry: entry.name.clone(),
            pattern: pattern.as_str().to_string(),
        })
        .collect();

    Ok((report, warnings))
}

/// Relative path with `/` separators, as patterns are written.
pub(crate) fn to_slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
