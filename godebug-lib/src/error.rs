//! Defines custom error types for the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type returned when scanning or splitting source files fails.
///
/// Every variant is fatal: the run stops at the first error instead of
/// continuing with the remaining files.
#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Failed to walk the directory tree: {0}")]
    Traversal(#[from] walkdir::Error),

    #[error("Failed to read source file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write generated file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
