use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use asset_stager::{AssetEntry, Manifest};
use serde::{Deserialize, Serialize};
use stage_logging::{stage_debug, stage_info};

/// Manifest looked up in the project root when none is given.
pub const MANIFEST_FILENAME: &str = "www.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum PersistedSources {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedEntry {
    name: String,
    cwd: PathBuf,
    src: PersistedSources,
    dest: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedManifest {
    #[serde(default)]
    clean: Vec<PathBuf>,
    #[serde(default)]
    strict: bool,
    entries: Vec<PersistedEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    File(PathBuf),
    BuiltIn,
}

/// Explicit path, else `{root}/www.ron`, else the built-in vendor manifest.
pub fn resolve_manifest(
    explicit: Option<&Path>,
    project_root: &Path,
) -> Result<(Manifest, ManifestSource)> {
    let candidate = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = project_root.join(MANIFEST_FILENAME);
            if !path.exists() {
                stage_debug!("No {} in {:?}; using built-in manifest", MANIFEST_FILENAME, project_root);
                return Ok((Manifest::raziel_default(), ManifestSource::BuiltIn));
            }
            path
        }
    };
    let manifest = load_manifest(&candidate)?;
    stage_info!("Loaded manifest from {:?}", candidate);
    Ok((manifest, ManifestSource::File(candidate)))
}

pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest {}", path.display()))?;
    parse_manifest(&content).with_context(|| format!("failed to parse manifest {}", path.display()))
}

pub fn parse_manifest(content: &str) -> Result<Manifest> {
    let persisted: PersistedManifest = ron::from_str(content)?;
    Ok(Manifest {
        clean: persisted.clean,
        strict: persisted.strict,
        entries: persisted
            .entries
            .into_iter()
            .map(|entry| AssetEntry {
                name: entry.name,
                cwd: entry.cwd,
                src: match entry.src {
                    PersistedSources::One(src) => vec![src],
                    PersistedSources::Many(src) => src,
                },
                dest: entry.dest,
            })
            .collect(),
    })
}

pub fn render_manifest(manifest: &Manifest) -> Result<String> {
    let persisted = PersistedManifest {
        clean: manifest.clean.clone(),
        strict: manifest.strict,
        entries: manifest
            .entries
            .iter()
            .map(|entry| PersistedEntry {
                name: entry.name.clone(),
                cwd: entry.cwd.clone(),
                src: PersistedSources::Many(entry.src.clone()),
                dest: entry.dest.clone(),
            })
            .collect(),
    };
    let pretty = ron::ser::PrettyConfig::new();
    Ok(ron::ser::to_string_pretty(&persisted, pretty)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_and_list_sources_are_accepted() {
        let manifest = parse_manifest(
            r#"(
                clean: ["www"],
                entries: [
                    (name: "jquery", cwd: "assets/vendor/jquery/dist", src: "jquery.min.js", dest: "www/js"),
                    (name: "select2", cwd: "assets/vendor/select2/dist", src: ["css/select2.min.css", "js/select2.min.js"], dest: "www"),
                ],
            )"#,
        )
        .unwrap();

        assert!(!manifest.strict);
        assert_eq!(manifest.entries[0].src, vec!["jquery.min.js".to_string()]);
        assert_eq!(manifest.entries[1].src.len(), 2);
    }

    #[test]
    fn rendered_default_parses_back() {
        let rendered = render_manifest(&Manifest::raziel_default()).unwrap();
        assert_eq!(parse_manifest(&rendered).unwrap(), Manifest::raziel_default());
    }

    #[test]
    fn missing_file_falls_back_to_built_in() {
        let temp = tempfile::TempDir::new().unwrap();
        let (manifest, source) = resolve_manifest(None, temp.path()).unwrap();
        assert_eq!(source, ManifestSource::BuiltIn);
        assert_eq!(manifest.entries.len(), 8);
    }

    #[test]
    fn project_manifest_is_preferred() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join(MANIFEST_FILENAME);
        fs::write(&path, r#"(strict: true, entries: [])"#).unwrap();

        let (manifest, source) = resolve_manifest(None, temp.path()).unwrap();
        assert_eq!(source, ManifestSource::File(path));
        assert!(manifest.strict);
        assert!(manifest.clean.is_empty());
    }

    #[test]
    fn demo_manifest_matches_built_in() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(MANIFEST_FILENAME);
        assert_eq!(load_manifest(&path).unwrap(), Manifest::raziel_default());
    }

    #[test]
    fn explicit_missing_manifest_is_an_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let missing = temp.path().join("nope.ron");
        assert!(resolve_manifest(Some(&missing), temp.path()).is_err());
    }
}
