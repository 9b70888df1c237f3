//! `mdspeak convert-directory` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdspeak_config::{CliSettings, Config};
use mdspeak_transform::TransformOptions;
use mdspeak_vault::convert_dir;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the convert-directory command.
#[derive(Args)]
pub(crate) struct ConvertDirectoryArgs {
    /// Directory to scan for Markdown files.
    input_dir: PathBuf,

    /// Directory to write the mirrored `.txt` tree into.
    output_dir: PathBuf,

    /// Join the wrapped lines of each paragraph into a single line.
    #[arg(long)]
    reflow: bool,

    /// Path to configuration file (default: auto-discover mdspeak.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl ConvertDirectoryArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            reflow: self.reflow.then_some(true),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let options = TransformOptions {
            reflow: config.convert.reflow,
        };

        output.info(&format!(
            "Converting {} into {}",
            self.input_dir.display(),
            self.output_dir.display()
        ));

        let report = convert_dir(&self.input_dir, &self.output_dir, &options)?;

        for (path, error) in &report.failed {
            output.warning(&format!("Skipped {}: {error}", path.display()));
        }

        if report.is_success() {
            output.success(&format!("Converted {} file(s)", report.converted.len()));
            Ok(())
        } else {
            output.info(&format!(
                "Converted {} file(s), {} failed",
                report.converted.len(),
                report.failed.len()
            ));
            Err(CliError::Partial(report.failed.len()))
        }
    }
}
