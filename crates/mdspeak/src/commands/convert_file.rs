//! `mdspeak convert-file` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdspeak_config::{CliSettings, Config};
use mdspeak_transform::TransformOptions;
use mdspeak_vault::convert_file;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the convert-file command.
#[derive(Args)]
pub(crate) struct ConvertFileArgs {
    /// Markdown file to convert.
    input: PathBuf,

    /// Plain-text file to write.
    output: PathBuf,

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

impl ConvertFileArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            reflow: self.reflow.then_some(true),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let options = TransformOptions {
            reflow: config.convert.reflow,
        };

        convert_file(&self.input, &self.output, &options)?;

        output.success(&format!(
            "Converted {} to {}",
            self.input.display(),
            self.output.display()
        ));
        Ok(())
    }
}
