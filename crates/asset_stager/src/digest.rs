use std::fs;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};
use walkdir::WalkDir;

/// Stable fingerprint of a directory tree: relative paths and file contents,
/// visited in sorted order. Two trees with the same digest are identical.
pub fn tree_digest(root: &Path) -> io::Result<String> {
    let mut hasher = Sha256::new();
    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        let kind = if entry.file_type().is_dir() { b'd' } else { b'f' };
        hasher.update([kind]);
        hasher.update(crate::stage::to_slash_path(relative).as_bytes());
        hasher.update([0]);
        if entry.file_type().is_file() {
            let content = fs::read(entry.path())?;
            hasher.update((content.len() as u64).to_le_bytes());
            hasher.update(content);
        }
    }
    Ok(format!("{:x}", hasher.finalize()))
}
