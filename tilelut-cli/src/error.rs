//! CLI error type.

use std::fmt;

use tilelut::config::ConfigError;
use tilelut::texture::TextureError;

/// Errors surfaced to the user by the CLI.
#[derive(Debug)]
pub enum CliError {
    /// Invalid argument combination.
    Usage(String),
    /// Configuration validation failed.
    Config(ConfigError),
    /// Texture generation or output failed.
    Texture(TextureError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{}", msg),
            CliError::Config(e) => write!(f, "Invalid configuration: {}", e),
            CliError::Texture(e) => write!(f, "Texture generation failed: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Usage(_) => None,
            CliError::Config(e) => Some(e),
            CliError::Texture(e) => Some(e),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<TextureError> for CliError {
    fn from(e: TextureError) -> Self {
        CliError::Texture(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_display_usage() {
        let err = CliError::Usage("bad flag".to_string());
        assert_eq!(err.to_string(), "bad flag");
    }

    #[test]
    fn test_cli_error_from_config_error() {
        let err: CliError = ConfigError::ZoomTooHigh(19).into();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains("Invalid configuration"));
    }
}
