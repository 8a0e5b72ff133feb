use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use stage_logging::{stage_debug, stage_info};

use crate::{Manifest, StageError, StageOptions};

/// Remove every `clean` tree of the manifest. Missing trees are skipped.
///
/// Unless `options.force` is set, the project root itself and anything
/// outside it are refused.
pub fn clean(
    manifest: &Manifest,
    project_root: &Path,
    options: StageOptions,
) -> Result<Vec<PathBuf>, StageError> {
    let mut removed = Vec::new();
    for relative in &manifest.clean {
        let target = project_root.join(relative);
        if !options.force {
            check_inside_root(project_root, &target)?;
        }

        match fs::symlink_metadata(&target) {
            Ok(meta) => {
                let result = if meta.is_dir() {
                    fs::remove_dir_all(&target)
                } else {
                    fs::remove_file(&target)
                };
                result.map_err(|source| StageError::Clean {
                    path: target.clone(),
                    source,
                })?;
                stage_info!("Cleaned {}", target.display());
                removed.push(target);
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                stage_debug!("Nothing to clean at {}", target.display());
            }
            Err(source) => return Err(StageError::Clean { path: target, source }),
        }
    }
    Ok(removed)
}

fn check_inside_root(root: &Path, target: &Path) -> Result<(), StageError> {
    let (root, target) = match (root.canonicalize(), target.canonicalize()) {
        (Ok(root), Ok(target)) => (root, target),
        _ => (normalize(root), normalize(target)),
    };
    if target == root {
        return Err(StageError::UnsafeClean {
            path: target,
            reason: "path is the project root",
        });
    }
    if !target.starts_with(&root) {
        return Err(StageError::UnsafeClean {
            path: target,
            reason: "path is outside the project root",
        });
    }
    Ok(())
}

/// Lexically resolve `.` and `..` for paths that do not exist yet.
fn normalize(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    let mut out = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_dots() {
        let path = normalize(Path::new("/srv/app/./www/../www/js"));
        assert_eq!(path, PathBuf::from("/srv/app/www/js"));
    }

    #[test]
    fn root_and_escapes_are_refused() {
        let root = Path::new("/srv/app");
        assert!(check_inside_root(root, Path::new("/srv/app/www")).is_ok());
        assert!(matches!(
            check_inside_root(root, Path::new("/srv/app/www/..")),
            Err(StageError::UnsafeClean { .. })
        ));
        assert!(matches!(
            check_inside_root(root, Path::new("/srv/other")),
            Err(StageError::UnsafeClean { .. })
        ));
    }
}
