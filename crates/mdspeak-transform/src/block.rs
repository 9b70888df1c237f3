//! Line-oriented structural rules: headers, chapter cues and list markers.

use std::sync::LazyLock;

use regex::Regex;

/// ATX header line: one or more `#` markers followed by whitespace.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#+[ \t]+(.*)$").unwrap());

/// Chapter cue, tolerating `.` or a spaced `:` after the number.
static CHAPTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Chapter[ \t]+(\d+)[ \t]*[:.][ \t]*(.+)$").unwrap());

/// Unordered list item with a `-`, `*` or `+` marker.
static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*[-*+][ \t]+(.*)$").unwrap());

/// Ordered list item with a `1.` or `1)` marker.
static ORDERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*(\d+)[.)][ \t]+(.*)$").unwrap());

/// Drop header markers, keeping chapter cues and isolating other headers.
///
/// Chapter lines are normalized to the canonical `Chapter N: Title` form so
/// `Chapter 4. Title` and `Chapter 4 : Title` read the same. Every header
/// becomes a standalone line with a blank line on each side; the blank runs
/// this introduces are collapsed by the whitespace pass.
pub(crate) fn normalize_headers(text: &str) -> String {
    let mut out = Vec::new();
    for line in text.lines() {
        if let Some(caps) = HEADER_RE.captures(line) {
            let title = caps[1].trim_end();
            let header = match CHAPTER_RE.captures(title) {
                Some(ch) => format!("Chapter {}: {}", &ch[1], &ch[2]),
                None => title.to_owned(),
            };
            out.push(String::new());
            out.push(header);
            out.push(String::new());
        } else {
            out.push(line.to_owned());
        }
    }
    out.join("\n")
}

/// Rewrite list markers to a consistent plain form, one item per line.
///
/// Bullets become `- `, ordered markers become `N. `, and nesting
/// indentation is dropped. Runs after header normalization so a numbered
/// header like `# 1. Introduction` is never reclassified as a list item
/// glued to its section body.
pub(crate) fn normalize_lists(text: &str) -> String {
    let mut out = Vec::new();
    for line in text.lines() {
        if let Some(caps) = ORDERED_RE.captures(line) {
            out.push(format!("{}. {}", &caps[1], &caps[2]));
        } else if let Some(caps) = BULLET_RE.captures(line) {
            out.push(format!("- {}", &caps[1]));
        } else {
            out.push(line.to_owned());
        }
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_header_markers_dropped() {
        assert_eq!(normalize_headers("# Title"), "\nTitle\n");
        assert_eq!(normalize_headers("### Deep Title"), "\nDeep Title\n");
    }

    #[test]
    fn test_header_requires_space() {
        // No space after the markers: a tag, not a header.
        assert_eq!(normalize_headers("#tag"), "#tag");
    }

    #[test]
    fn test_chapter_line_normalized() {
        assert_eq!(
            normalize_headers("# Chapter 1: Beginning"),
            "\nChapter 1: Beginning\n"
        );
        assert_eq!(
            normalize_headers("## Chapter 12. The Middle"),
            "\nChapter 12: The Middle\n"
        );
        assert_eq!(
            normalize_headers("# Chapter 3 : Spaced"),
            "\nChapter 3: Spaced\n"
        );
    }

    #[test]
    fn test_header_between_paragraphs() {
        assert_eq!(
            normalize_headers("before\n## Section\nafter"),
            "before\n\nSection\n\nafter"
        );
    }

    #[test]
    fn test_bullets_normalized() {
        assert_eq!(normalize_lists("- one\n* two\n+ three"), "- one\n- two\n- three");
    }

    #[test]
    fn test_nested_bullets_flattened() {
        assert_eq!(normalize_lists("- top\n    - nested"), "- top\n- nested");
    }

    #[test]
    fn test_ordered_markers_normalized() {
        assert_eq!(normalize_lists("1. one\n2) two"), "1. one\n2. two");
    }

    #[test]
    fn test_horizontal_rule_is_not_a_bullet() {
        assert_eq!(normalize_lists("---"), "---");
        assert_eq!(normalize_lists("***"), "***");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(normalize_lists("just - a dash mid-line"), "just - a dash mid-line");
    }
}
