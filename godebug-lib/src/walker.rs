//! Discovers candidate source files beneath a root directory.

use crate::error::SplitError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extension recognized as a source file.
pub const SOURCE_EXTENSION: &str = "go";

/// Returns a lazy, finite sequence of every regular file under `root` whose
/// extension matches [`SOURCE_EXTENSION`], recursing into all subdirectories
/// in the walker's per-directory order.
///
/// Traversal failures surface as [`SplitError::Traversal`] items; collecting
/// the sequence into a `Result` short-circuits on the first one.
pub fn source_files(root: &Path) -> impl Iterator<Item = Result<PathBuf, SplitError>> {
    WalkDir::new(root).into_iter().filter_map(|entry| match entry {
        Ok(entry) => {
            let is_source = entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .is_some_and(|ext| ext == SOURCE_EXTENSION);
            is_source.then(|| Ok(entry.into_path()))
        }
        Err(err) => Some(Err(SplitError::Traversal(err))),
    })
}
