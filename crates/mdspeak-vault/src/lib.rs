//! Vault traversal and file conversion.
//!
//! This crate drives the transformation pipeline over the filesystem:
//! a single `.md` file, or a whole vault tree mirrored into an output
//! directory of `.txt` files. Conversion is sequential and stateless; each
//! file is independent.
//!
//! Directory conversion is partial-failure tolerant: an unreadable or
//! non-UTF-8 file is reported and skipped, and the returned
//! [`ConvertReport`] carries both the successes and the failures so the
//! caller decides the exit status.
//!
//! # Example
//!
//! ```ignore
//! use mdspeak_transform::TransformOptions;
//! use mdspeak_vault::convert_dir;
//!
//! let report = convert_dir("vault".as_ref(), "out".as_ref(), &TransformOptions::default())?;
//! for (path, error) in &report.failed {
//!     eprintln!("{}: {error}", path.display());
//! }
//! ```

mod convert;
mod scanner;

pub use convert::{ConvertError, ConvertReport, convert_dir, convert_file};
