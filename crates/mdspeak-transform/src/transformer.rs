//! The transformation pipeline: ordered rewrite rules over a document.

use crate::{block, inline, whitespace};

/// Options controlling optional transformation behavior.
///
/// The defaults reproduce the plain contract: markup stripped, line
/// structure otherwise untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformOptions {
    /// Join the wrapped lines of a paragraph into a single spoken line.
    /// Headers and list items are never joined.
    pub reflow: bool,
}

/// Convert Markdown source to speech-ready plain text.
///
/// Applies the rewrite rules in their fixed order:
///
/// 1. header normalization (chapter cues kept, headers made standalone)
/// 2. emphasis and code-span stripping
/// 3. link and image removal
/// 4. Obsidian syntax removal
/// 5. list normalization
/// 6. whitespace normalization
///
/// The order is load-bearing: tag stripping relies on headers having lost
/// their `#` markers, list normalization must not see raw headers, and the
/// whitespace pass collapses the blank lines the header rule introduces.
///
/// Pure and deterministic; never fails. Malformed markup passes through
/// best-effort.
#[must_use]
pub fn transform(text: &str, options: &TransformOptions) -> String {
    let text = block::normalize_headers(text);
    let text = inline::strip_emphasis(&text);
    let text = inline::strip_links(&text);
    let text = inline::strip_obsidian(&text);
    let text = block::normalize_lists(&text);
    whitespace::normalize(&text, options)
}
