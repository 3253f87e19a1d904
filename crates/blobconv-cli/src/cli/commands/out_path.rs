//! Default output path for `decode` when `--out` is not given.

use std::path::PathBuf;

/// Used when the file name has nothing usable left after cleanup.
const FALLBACK_NAME: &str = "decoded.bin";

/// Turns a carried file name into a path inside the current directory.
///
/// Path separators, NUL and control characters become `_`; leading and
/// trailing dots and spaces are trimmed, so `../x` cannot leave the directory.
pub(crate) fn default_out_path(name: &str) -> PathBuf {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();
    let trimmed = cleaned.trim_matches(|c| c == '.' || c == ' ');
    if trimmed.is_empty() {
        PathBuf::from(FALLBACK_NAME)
    } else {
        PathBuf::from(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name_is_kept() {
        assert_eq!(default_out_path("hello.txt"), PathBuf::from("hello.txt"));
    }

    #[test]
    fn separators_are_replaced() {
        assert_eq!(default_out_path("a/b.bin"), PathBuf::from("a_b.bin"));
        assert_eq!(default_out_path("a\\b.bin"), PathBuf::from("a_b.bin"));
    }

    #[test]
    fn parent_traversal_stays_in_place() {
        let p = default_out_path("../x");
        assert_eq!(p, PathBuf::from("_x"));
        assert_eq!(p.components().count(), 1);
    }

    #[test]
    fn dots_only_fall_back() {
        assert_eq!(default_out_path(".."), PathBuf::from(FALLBACK_NAME));
        assert_eq!(default_out_path(" . "), PathBuf::from(FALLBACK_NAME));
    }
}
