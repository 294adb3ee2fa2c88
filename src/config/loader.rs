//! Configuration loading from disk.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::DeployerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<DeployerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: DeployerConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Defaults,
}

/// Like [`load_config`], but a missing file yields the defaults.
///
/// Runs before logging is installed, so the source is returned for the
/// caller to report.
pub fn load_or_default(path: &Path) -> Result<(DeployerConfig, ConfigSource), ConfigError> {
    match load_config(path) {
        Ok(config) => Ok((config, ConfigSource::File)),
        Err(ConfigError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            Ok((DeployerConfig::default(), ConfigSource::Defaults))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "token-deployer-{}-{}.toml",
            name,
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("token-deployer-definitely-missing.toml");
        let (config, source) = load_or_default(&path).unwrap();
        assert_eq!(config, DeployerConfig::default());
        assert_eq!(source, ConfigSource::Defaults);
    }

    #[test]
    fn test_missing_file_is_error_for_strict_load() {
        let path = std::env::temp_dir().join("token-deployer-definitely-missing.toml");
        assert!(matches!(load_config(&path), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_malformed_file() {
        let path = scratch_file("malformed", "[rpc\ntimeout_secs = ");
        let result = load_or_default(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let path = scratch_file("invalid", "[rpc]\ntimeout_secs = 0\n");
        let result = load_config(&path);
        fs::remove_file(&path).ok();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("rpc.timeout_secs"));
    }

    #[test]
    fn test_valid_file() {
        let path = scratch_file(
            "valid",
            "[compiler]\nsolidity_version = \"0.8.20\"\n[rpc]\nconfirmations = 3\n",
        );
        let result = load_config(&path);
        fs::remove_file(&path).ok();

        let config = result.unwrap();
        assert_eq!(config.compiler.solidity_version, "0.8.20");
        assert_eq!(config.rpc.confirmations, 3);
    }
}
