use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::glob::GlobError;
use crate::persist::PersistError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageOptions {
    /// Treat every warning as fatal, in addition to the manifest's own flag.
    pub strict: bool,
    /// Allow cleaning the project root or paths outside it.
    pub force: bool,
}

/// Non-fatal findings; staging continues past them unless strict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageWarning {
    MissingSourceRoot { entry: String, path: PathBuf },
    NoMatches { entry: String, pattern: String },
}

impl fmt::Display for StageWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageWarning::MissingSourceRoot { entry, path } => {
                write!(f, "entry '{entry}': source root {} does not exist", path.display())
            }
            StageWarning::NoMatches { entry, pattern } => {
                write!(f, "entry '{entry}': pattern '{pattern}' matched no files")
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StageError {
    #[error("entry '{entry}' has an invalid pattern: {source}")]
    InvalidGlob { entry: String, source: GlobError },
    #[error("failed to read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {path:?}: {source}")]
    Write { path: PathBuf, source: PersistError },
    #[error("failed to clean {path:?}: {source}")]
    Clean { path: PathBuf, source: io::Error },
    #[error("refusing to clean {path:?}: {reason}")]
    UnsafeClean { path: PathBuf, reason: &'static str },
    #[error("strict staging failed with {} warning(s)", .0.len())]
    Strict(Vec<StageWarning>),
}
