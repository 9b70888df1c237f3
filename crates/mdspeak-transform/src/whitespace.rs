//! Whitespace and paragraph normalization.
//!
//! The final pass of the pipeline. Works on paragraph blocks the way the
//! speech output needs them: exactly one blank line between blocks, no
//! trailing whitespace, no leftover layout lines (horizontal rules,
//! standalone section numbers).

use std::sync::LazyLock;

use regex::Regex;

use crate::TransformOptions;

/// Horizontal rule drawn with `-`, `*` or `_`.
static RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-{3,}|\*{3,}|_{3,})$").unwrap());

/// Standalone section-number line such as `4.`, `4.1` or `.1`.
static SECTION_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+\.\d+|\d+\.|\.\d+)$").unwrap());

/// Prefix of an already-normalized list item.
static LIST_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(- |\d+\. )").unwrap());

/// Collapse blank runs, trim whitespace and drop layout-only lines.
///
/// Every run of blank (or removed) lines becomes a single paragraph break,
/// and the document loses leading and trailing blanks entirely. Runs of
/// spaces inside a line collapse to one space. With
/// [`TransformOptions::reflow`] set, the wrapped lines of a paragraph are
/// joined into one spoken line; list items always stay on their own lines.
pub(crate) fn normalize(text: &str, options: &TransformOptions) -> String {
    let mut blocks: Vec<String> = Vec::new();
    let mut block: Vec<String> = Vec::new();

    for raw in text.lines() {
        let line = collapse_spaces(raw);
        if line.is_empty() || RULE_RE.is_match(&line) || SECTION_NUMBER_RE.is_match(&line) {
            flush(&mut block, &mut blocks, options);
        } else {
            block.push(line);
        }
    }
    flush(&mut block, &mut blocks, options);

    blocks.join("\n\n")
}

/// Collapse internal whitespace runs to single spaces and trim the ends.
fn collapse_spaces(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Close the current block and append it to the output.
fn flush(block: &mut Vec<String>, blocks: &mut Vec<String>, options: &TransformOptions) {
    if block.is_empty() {
        return;
    }
    let joined = if options.reflow {
        reflow_lines(block).join("\n")
    } else {
        block.join("\n")
    };
    blocks.push(joined);
    block.clear();
}

/// Join a block's wrapped prose lines, keeping list items separate.
fn reflow_lines(block: &[String]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut run: Vec<&str> = Vec::new();
    for line in block {
        if LIST_PREFIX_RE.is_match(line) {
            if !run.is_empty() {
                lines.push(run.join(" "));
                run.clear();
            }
            lines.push(line.clone());
        } else {
            run.push(line);
        }
    }
    if !run.is_empty() {
        lines.push(run.join(" "));
    }
    lines
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn plain() -> TransformOptions {
        TransformOptions::default()
    }

    fn reflowed() -> TransformOptions {
        TransformOptions { reflow: true }
    }

    #[test]
    fn test_blank_runs_collapse_to_one() {
        assert_eq!(normalize("a\n\n\n\n\nb", &plain()), "a\n\nb");
        assert_eq!(normalize("a\n\nb", &plain()), "a\n\nb");
    }

    #[test]
    fn test_document_edges_trimmed() {
        assert_eq!(normalize("\n\ntext\n\n", &plain()), "text");
    }

    #[test]
    fn test_trailing_whitespace_trimmed() {
        assert_eq!(normalize("line one   \nline two\t", &plain()), "line one\nline two");
    }

    #[test]
    fn test_space_runs_collapse() {
        assert_eq!(normalize("too   many    spaces", &plain()), "too many spaces");
    }

    #[test]
    fn test_horizontal_rules_removed() {
        assert_eq!(normalize("a\n---\nb", &plain()), "a\n\nb");
        assert_eq!(normalize("a\n\n*****\n\nb", &plain()), "a\n\nb");
    }

    #[test]
    fn test_section_numbers_removed() {
        assert_eq!(normalize("4.1\nreal text\n7.", &plain()), "real text");
    }

    #[test]
    fn test_plain_keeps_line_breaks() {
        assert_eq!(
            normalize("first line\nsecond line", &plain()),
            "first line\nsecond line"
        );
    }

    #[test]
    fn test_reflow_joins_paragraph_lines() {
        assert_eq!(
            normalize("first line\nsecond line\n\nnext para", &reflowed()),
            "first line second line\n\nnext para"
        );
    }

    #[test]
    fn test_reflow_keeps_list_items_separate() {
        assert_eq!(
            normalize("intro line\n- one\n- two\nout", &reflowed()),
            "intro line\n- one\n- two\nout"
        );
    }

    #[test]
    fn test_crlf_input_normalized() {
        assert_eq!(normalize("a\r\n\r\nb\r\n", &plain()), "a\n\nb");
    }
}
