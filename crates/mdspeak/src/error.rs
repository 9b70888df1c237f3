//! CLI error types.

use mdspeak_config::ConfigError;
use mdspeak_vault::ConvertError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Convert(#[from] ConvertError),

    #[error("{0} file(s) failed to convert")]
    Partial(usize),
}
