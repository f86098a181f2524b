//! `godebug-lib` exposes the source-splitting primitives that power the
//! `godebug` CLI.
//!
//! The library walks a project tree for Go sources, detects the
//! `// +build GODEBUG` opt-in marker, and splits each opted-in file into a
//! `<base>_debug.go` variant (all content, tagged for debug builds) and a
//! `<base>_nodebug.go` variant (debug-only sections removed, tagged for
//! non-debug builds). You can use it directly to embed the transformation in
//! other tooling without shelling out to the CLI.
//!
//! # Example
//!
//! ```rust
//! use godebug_lib::splitter::split;
//!
//! let result = split(
//!     "// +build GODEBUG\npackage a\n// GODEBUGBEGIN\nvar tracing = true\n// GODEBUGEND\n",
//! );
//!
//! assert!(result.needs_processing);
//! assert!(result.debug_content.contains("var tracing = true"));
//! assert!(!result.nodebug_content.contains("var tracing = true"));
//! ```

pub mod error;
pub mod splitter;
pub mod walker;

use crate::error::SplitError;
use crate::splitter::{output_paths, split};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Result of processing a single source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file carries no opt-in marker; nothing was written.
    Skipped,
    /// Both variants were generated at the given paths.
    Written { debug: PathBuf, nodebug: PathBuf },
}

/// Reads `path`, splits its content, and writes the two generated variants
/// next to it when the file opts in.
///
/// The input handle is released as soon as the read completes, before any
/// output is written. Existing generated files are overwritten without
/// warning. Generated files are created owner read/write only.
pub fn process_file(path: &Path) -> Result<FileOutcome, SplitError> {
    let content = fs::read_to_string(path).map_err(|source| SplitError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let result = split(&content);
    if !result.needs_processing {
        log::debug!("No opt-in marker in {}", path.display());
        return Ok(FileOutcome::Skipped);
    }

    let (debug, nodebug) = output_paths(path);
    write_generated(&debug, &result.debug_content)?;
    write_generated(&nodebug, &result.nodebug_content)?;

    Ok(FileOutcome::Written { debug, nodebug })
}

fn write_generated(path: &Path, contents: &str) -> Result<(), SplitError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    // 0600 applies at creation only; an existing file keeps its mode.
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    options
        .open(path)
        .and_then(|mut file| file.write_all(contents.as_bytes()))
        .map_err(|source| SplitError::Write {
            path: path.to_path_buf(),
            source,
        })
}
