//! Markdown-to-plaintext transformation for text-to-speech playback.
//!
//! This crate converts Obsidian-flavored Markdown into plain text that reads
//! naturally when spoken: Markdown and Obsidian control syntax is stripped
//! while chapter cues, paragraph spacing and list structure survive.
//!
//! The pipeline is a fixed sequence of rewrite rules applied by
//! [`transform`]:
//!
//! 1. Header normalization (chapter cues kept, other headers made standalone)
//! 2. Emphasis and code-span stripping
//! 3. Link and image removal
//! 4. Obsidian syntax removal (wiki links, embeds, block refs, tags)
//! 5. List normalization
//! 6. Whitespace and paragraph normalization
//!
//! The rule order is a contract: later rules assume the earlier ones have
//! already run (list normalization, for example, must not see `#` headers).
//! Malformed or unbalanced markup is passed through best-effort rather than
//! rejected; the transformation never fails.
//!
//! # Example
//!
//! ```
//! use mdspeak_transform::{TransformOptions, transform};
//!
//! let markdown = "# Chapter 1: Beginning\n\nThis is **bold** and _italic_ text with a [[Note|link]].";
//! let plain = transform(markdown, &TransformOptions::default());
//!
//! assert_eq!(
//!     plain,
//!     "Chapter 1: Beginning\n\nThis is bold and italic text with a link."
//! );
//! ```

mod block;
mod inline;
mod transformer;
mod whitespace;

pub use transformer::{TransformOptions, transform};
