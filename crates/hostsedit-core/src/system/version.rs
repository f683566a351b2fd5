//! Version-output matching for the pinned Python runtime.
//!
//! The installer's verification step runs `python --version` and checks the
//! first output line against the pinned release prefix. Matching is a plain
//! prefix test: shell noise such as "'python' is not recognized as an
//! internal or external command" must never pass.

/// Release line the launcher pins, as a version-output prefix.
pub const EXPECTED_VERSION_PREFIX: &str = "Python 3.14";

/// First non-empty trimmed line of command output.
pub fn first_line(output: &str) -> &str {
    output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}

/// Check a raw version-command output against the pinned release prefix.
pub fn matches_pinned_release(output: &str) -> bool {
    first_line(output).starts_with(EXPECTED_VERSION_PREFIX)
}

/// Extract the bare version number from a `Python X.Y.Z` line.
///
/// Returns `None` when the line does not look like interpreter version
/// output at all.
pub fn version_number(output: &str) -> Option<&str> {
    let line = first_line(output);
    line.strip_prefix("Python ").map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_release_matches() {
        assert!(matches_pinned_release("Python 3.14.0"));
        assert!(matches_pinned_release("Python 3.14.2\n"));
    }

    #[test]
    fn shell_noise_does_not_match() {
        let noise =
            "'python' is not recognized as an internal or external command,\noperable program or batch file.";
        assert!(!matches_pinned_release(noise));
        assert_eq!(version_number(noise), None);
    }

    #[test]
    fn other_release_lines_do_not_match() {
        assert!(!matches_pinned_release("Python 3.12.1"));
        assert!(!matches_pinned_release("Python 2.7.18"));
        // A prefix test is deliberate: pre-releases of the pinned line pass.
        assert!(matches_pinned_release("Python 3.14.0rc1"));
    }

    #[test]
    fn leading_blank_lines_are_skipped() {
        assert!(matches_pinned_release("\n  \nPython 3.14.1"));
        assert_eq!(first_line("\n\n  Python 3.14.1  "), "Python 3.14.1");
    }

    #[test]
    fn version_number_extraction() {
        assert_eq!(version_number("Python 3.14.0"), Some("3.14.0"));
        assert_eq!(version_number("Python "), None);
        assert_eq!(version_number(""), None);
    }

    #[test]
    fn empty_output_never_matches() {
        assert!(!matches_pinned_release(""));
        assert!(!matches_pinned_release("   \n  "));
    }
}
