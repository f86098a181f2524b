//! The marker-driven content splitter.
//!
//! A source file opts in to splitting with a `// +build GODEBUG` line. Lines
//! between `// GODEBUGBEGIN` and `// GODEBUGEND` are kept in the debug
//! variant and dropped from the nodebug variant. Marker lines themselves
//! never appear in either output.

use std::path::{Path, PathBuf};

/// Marker that opts a file in to splitting. May appear anywhere in the file.
pub const OPT_IN_MARKER: &str = "// +build GODEBUG";

/// Marker opening a debug-only section.
pub const SECTION_BEGIN: &str = "// GODEBUGBEGIN";

/// Marker closing a debug-only section.
pub const SECTION_END: &str = "// GODEBUGEND";

/// Build-constraint header prepended to the debug variant.
pub const DEBUG_HEADER: &str = "// +build debug\n\n";

/// Build-constraint header prepended to the nodebug variant.
pub const NODEBUG_HEADER: &str = "// +build !debug\n\n";

/// The two generated texts produced by scanning one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitResult {
    /// Every content line of the input, tagged for debug builds.
    pub debug_content: String,
    /// Content with debug-only sections removed, tagged for non-debug builds.
    pub nodebug_content: String,
    /// Whether the opt-in marker was seen. Nothing is written when false.
    pub needs_processing: bool,
}

/// Splits `content` into its debug and nodebug variants in a single forward
/// pass over its lines.
///
/// Markers are matched by prefix after stripping leading spaces and tabs, so
/// trailing text on a marker line is ignored. Unbalanced markers are
/// tolerated: a section end with no open section is a no-op, and a section
/// left open at end of input excludes the remaining lines from the nodebug
/// variant only.
pub fn split(content: &str) -> SplitResult {
    let mut debug_content = String::from(DEBUG_HEADER);
    let mut nodebug_content = String::from(NODEBUG_HEADER);
    let mut needs_processing = false;
    let mut in_debug_section = false;

    for line in content.lines() {
        let stripped = line.trim_start_matches([' ', '\t']);
        if stripped.starts_with(OPT_IN_MARKER) {
            needs_processing = true;
        } else if stripped.starts_with(SECTION_BEGIN) {
            in_debug_section = true;
        } else if stripped.starts_with(SECTION_END) {
            in_debug_section = false;
        } else {
            if !in_debug_section {
                nodebug_content.push_str(line);
                nodebug_content.push('\n');
            }
            debug_content.push_str(line);
            debug_content.push('\n');
        }
    }

    SplitResult {
        debug_content,
        nodebug_content,
        needs_processing,
    }
}

/// Derives the generated file paths for `path`: `<base>_debug.<ext>` and
/// `<base>_nodebug.<ext>`, in the same directory as the input.
pub fn output_paths(path: &Path) -> (PathBuf, PathBuf) {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy())
        .unwrap_or_default();

    let debug = path.with_file_name(format!("{stem}_debug.{ext}"));
    let nodebug = path.with_file_name(format!("{stem}_nodebug.{ext}"));
    (debug, nodebug)
}

#[cfg(test)]
mod tests {
    use super::{output_paths, split, DEBUG_HEADER, NODEBUG_HEADER};
    use std::path::Path;

    const OPTED_IN: &str = "\
// +build GODEBUG
package a
// GODEBUGBEGIN
var tracing = true
// GODEBUGEND
func F() {}
";

    #[test]
    fn test_split_basic_section() {
        let result = split(OPTED_IN);

        assert!(result.needs_processing);
        assert_eq!(
            result.debug_content,
            format!("{DEBUG_HEADER}package a\nvar tracing = true\nfunc F() {{}}\n")
        );
        assert_eq!(
            result.nodebug_content,
            format!("{NODEBUG_HEADER}package a\nfunc F() {{}}\n")
        );
    }

    #[test]
    fn test_no_opt_in_marker() {
        let result = split("package a\n// GODEBUGBEGIN\nvar x = 1\n// GODEBUGEND\n");
        assert!(!result.needs_processing);
        // Variants are still populated; the caller decides not to write them.
        assert_eq!(
            result.nodebug_content,
            format!("{NODEBUG_HEADER}package a\n")
        );
    }

    #[test]
    fn test_markers_detected_after_leading_whitespace() {
        let input = " \t// +build GODEBUG\npackage a\n\t// GODEBUGBEGIN\nsecret\n  // GODEBUGEND\n";
        let result = split(input);

        assert!(result.needs_processing);
        assert_eq!(
            result.nodebug_content,
            format!("{NODEBUG_HEADER}package a\n")
        );
        assert!(!result.debug_content.contains("GODEBUGBEGIN"));
        assert!(!result.nodebug_content.contains("GODEBUGBEGIN"));
    }

    #[test]
    fn test_trailing_text_on_marker_lines_is_ignored() {
        let input = "// +build GODEBUG linux\npackage a\n// GODEBUGBEGIN tracing helpers\nvar x = 1\n// GODEBUGEND tracing helpers\n";
        let result = split(input);

        assert!(result.needs_processing);
        assert_eq!(
            result.nodebug_content,
            format!("{NODEBUG_HEADER}package a\n")
        );
        assert_eq!(
            result.debug_content,
            format!("{DEBUG_HEADER}package a\nvar x = 1\n")
        );
    }

    #[test]
    fn test_end_marker_without_open_section_is_noop() {
        let input = "// +build GODEBUG\n// GODEBUGEND\npackage a\n";
        let result = split(input);

        assert!(result.needs_processing);
        assert_eq!(
            result.nodebug_content,
            format!("{NODEBUG_HEADER}package a\n")
        );
        assert_eq!(result.debug_content, format!("{DEBUG_HEADER}package a\n"));
    }

    #[test]
    fn test_unterminated_section_excludes_tail_from_nodebug_only() {
        let input = "// +build GODEBUG\npackage a\n// GODEBUGBEGIN\nvar x = 1\nvar y = 2\n";
        let result = split(input);

        assert_eq!(
            result.nodebug_content,
            format!("{NODEBUG_HEADER}package a\n")
        );
        assert_eq!(
            result.debug_content,
            format!("{DEBUG_HEADER}package a\nvar x = 1\nvar y = 2\n")
        );
    }

    #[test]
    fn test_opt_in_marker_may_appear_after_sections() {
        let input = "package a\n// GODEBUGBEGIN\nvar x = 1\n// GODEBUGEND\n// +build GODEBUG\n";
        let result = split(input);

        assert!(result.needs_processing);
        assert_eq!(
            result.nodebug_content,
            format!("{NODEBUG_HEADER}package a\n")
        );
    }

    #[test]
    fn test_repeated_sections() {
        let input = "\
// +build GODEBUG
a
// GODEBUGBEGIN
b
// GODEBUGEND
c
// GODEBUGBEGIN
d
// GODEBUGEND
e
";
        let result = split(input);

        assert_eq!(result.nodebug_content, format!("{NODEBUG_HEADER}a\nc\ne\n"));
        assert_eq!(
            result.debug_content,
            format!("{DEBUG_HEADER}a\nb\nc\nd\ne\n")
        );
    }

    #[test]
    fn test_empty_input() {
        let result = split("");
        assert!(!result.needs_processing);
        assert_eq!(result.debug_content, DEBUG_HEADER);
        assert_eq!(result.nodebug_content, NODEBUG_HEADER);
    }

    #[test]
    fn test_output_paths() {
        let (debug, nodebug) = output_paths(Path::new("pkg/a.go"));
        assert_eq!(debug, Path::new("pkg/a_debug.go"));
        assert_eq!(nodebug, Path::new("pkg/a_nodebug.go"));
    }
}
