//! Asset stager: clean-then-copy deployment of vendored static files.
mod clean;
mod digest;
mod glob;
mod manifest;
mod persist;
mod report;
mod stage;
mod types;

pub use clean::clean;
pub use digest::tree_digest;
pub use glob::{GlobError, GlobPattern};
pub use manifest::{AssetEntry, Manifest};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use report::{EntryReport, StageReport};
pub use stage::stage;
pub use types::{StageError, StageOptions, StageWarning};
