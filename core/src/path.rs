extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Collapse `..` segments and redundant separators in a slash-delimited path.
///
/// `..` pops the previous segment and is dropped at the root; any other
/// non-empty segment (a literal `.` included) is kept verbatim. The result
/// carries no leading or trailing separator.
pub fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        if segment == ".." {
            segments.pop();
        } else {
            segments.push(segment);
        }
    }
    segments.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_parent_segments() {
        assert_eq!(normalize("/a/b/../c"), "a/c");
    }

    #[test]
    fn collapses_redundant_separators() {
        assert_eq!(normalize("a//b/"), "a/b");
    }

    #[test]
    fn parent_of_root_is_dropped() {
        assert_eq!(normalize("../a"), "a");
        assert_eq!(normalize("../../.."), "");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("///"), "");
    }

    #[test]
    fn dot_segments_pass_through() {
        assert_eq!(normalize("a/./b"), "a/./b");
    }
}
