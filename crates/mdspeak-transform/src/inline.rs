//! Inline markup stripping: emphasis, code spans, links and Obsidian syntax.
//!
//! All substitutions are single-line (`\n` is excluded from the content
//! classes) so a stray marker on one line can never swallow text from the
//! next. Unbalanced markers simply fail to match and are left in place.

use std::sync::LazyLock;

use regex::Regex;

/// Bold with star markers: `**text**`.
static BOLD_STAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*\n]+)\*\*").unwrap());

/// Bold with underscore markers: `__text__`.
static BOLD_UNDERSCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__([^_\n]+)__").unwrap());

/// Italic with star markers. The content must not be space-flanked, which
/// keeps `* item` bullets and `2 * 3` arithmetic intact.
static ITALIC_STAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^\s*](?:[^*\n]*[^\s*])?)\*").unwrap());

/// Italic with underscore markers. Word boundaries keep `snake_case`
/// identifiers intact.
static ITALIC_UNDERSCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b_([^_\n]+)_\b").unwrap());

/// Inline code span: `` `code` ``.
static CODE_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`\n]+)`").unwrap());

/// Markdown image: `![alt](url)`. Alt text may be empty.
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]*)\)").unwrap());

/// Markdown link: `[label](url)`.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]*)\)").unwrap());

/// Obsidian embed: `![[file]]`. Removed entirely, there is nothing to speak.
static WIKI_EMBED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[\[([^\]]+)\]\]").unwrap());

/// Obsidian wiki link with display text: `[[Target|Display]]`.
static WIKI_ALIAS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]|]+)\|([^\]]+)\]\]").unwrap());

/// Obsidian wiki link: `[[Target]]`.
static WIKI_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[([^\]]+)\]\]").unwrap());

/// Obsidian block reference anchor at end of line: `^blockid`.
static BLOCK_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)[ \t]*\^[A-Za-z0-9-]+[ \t]*$").unwrap());

/// Obsidian tag at line start or after whitespace: `#tag`, `#a/nested-tag`.
/// Tags start with a letter, so `Issue #42` is left alone; header lines have
/// already lost their `#` markers by the time this runs.
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(^|[ \t])#([A-Za-z][A-Za-z0-9_/-]*)").unwrap());

/// Remove bold, italic and code-span markers, keeping the enclosed text.
pub(crate) fn strip_emphasis(text: &str) -> String {
    let text = BOLD_STAR_RE.replace_all(text, "${1}");
    let text = BOLD_UNDERSCORE_RE.replace_all(&text, "${1}");
    let text = ITALIC_STAR_RE.replace_all(&text, "${1}");
    let text = ITALIC_UNDERSCORE_RE.replace_all(&text, "${1}");
    CODE_SPAN_RE.replace_all(&text, "${1}").into_owned()
}

/// Replace links by their label and images by their alt text.
pub(crate) fn strip_links(text: &str) -> String {
    let text = IMAGE_RE.replace_all(text, "${1}");
    LINK_RE.replace_all(&text, "${1}").into_owned()
}

/// Remove Obsidian-specific syntax: embeds, wiki links, block refs, tags.
pub(crate) fn strip_obsidian(text: &str) -> String {
    let text = WIKI_EMBED_RE.replace_all(text, "");
    let text = WIKI_ALIAS_RE.replace_all(&text, "${2}");
    let text = WIKI_RE.replace_all(&text, "${1}");
    let text = BLOCK_REF_RE.replace_all(&text, "");
    TAG_RE.replace_all(&text, "${1}").into_owned()
}
