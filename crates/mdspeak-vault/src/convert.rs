//! File and directory conversion drivers.

use std::fs;
use std::path::{Path, PathBuf};

use mdspeak_transform::{TransformOptions, transform};

use crate::scanner::Scanner;

/// Conversion error with path context.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Input file or directory does not exist.
    #[error("Input not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Read or write failure.
    #[error("I/O error ({}): {source}", .path.display())]
    Io {
        /// The path the operation failed on.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid UTF-8.
    #[error("Not valid UTF-8: {}", .0.display())]
    InvalidUtf8(PathBuf),
}

impl ConvertError {
    fn io(source: std::io::Error, path: &Path) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path.to_path_buf())
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Outcome of a directory conversion.
///
/// Per-file failures don't abort the run; they are collected here so the
/// caller can report them and pick the exit status.
#[derive(Debug, Default)]
pub struct ConvertReport {
    /// Input paths that converted successfully.
    pub converted: Vec<PathBuf>,
    /// Input paths that failed, with the error for each.
    pub failed: Vec<(PathBuf, ConvertError)>,
}

impl ConvertReport {
    /// True if every discovered file converted.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Convert a single Markdown file to plain text.
///
/// Reads `input`, transforms it, and writes the result to `output`,
/// creating parent directories as needed. Nothing is written when the read
/// fails.
///
/// # Errors
///
/// Returns [`ConvertError::NotFound`] if the input is missing,
/// [`ConvertError::InvalidUtf8`] if it isn't UTF-8, and
/// [`ConvertError::Io`] for other read/write failures.
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &TransformOptions,
) -> Result<(), ConvertError> {
    let bytes = fs::read(input).map_err(|e| ConvertError::io(e, input))?;
    let text =
        String::from_utf8(bytes).map_err(|_| ConvertError::InvalidUtf8(input.to_path_buf()))?;

    let plain = transform(&text, options);

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(|e| ConvertError::io(e, parent))?;
    }
    fs::write(output, plain).map_err(|e| ConvertError::io(e, output))?;

    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        "Converted file"
    );
    Ok(())
}

/// Convert every `.md` file under `input_dir`, mirroring relative paths
/// under `output_dir` with the `.txt` extension.
///
/// Files are processed sequentially in sorted order. A per-file failure is
/// logged and recorded in the report; the run continues with the remaining
/// files.
///
/// # Errors
///
/// Returns [`ConvertError::NotFound`] if `input_dir` is not a directory.
pub fn convert_dir(
    input_dir: &Path,
    output_dir: &Path,
    options: &TransformOptions,
) -> Result<ConvertReport, ConvertError> {
    if !input_dir.is_dir() {
        return Err(ConvertError::NotFound(input_dir.to_path_buf()));
    }

    let files = Scanner::new(input_dir.to_path_buf()).scan();
    tracing::debug!(file_count = files.len(), "Vault scan completed");

    let mut report = ConvertReport::default();
    for file in files {
        let output = output_dir.join(&file.rel_path).with_extension("txt");
        match convert_file(&file.path, &output, options) {
            Ok(()) => report.converted.push(file.path),
            Err(error) => {
                tracing::warn!(path = %file.path.display(), error = %error, "Skipping file");
                report.failed.push((file.path, error));
            }
        }
    }
    Ok(report)
}
