//! Configuration validation.
//!
//! Returns every problem found, not just the first, so a broken
//! `deployer.toml` can be fixed in one pass.

use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::config::schema::DeployerConfig;

/// A single semantic problem in a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("compiler.solidity_version '{0}' is not of the form MAJOR.MINOR.PATCH")]
    SolidityVersion(String),

    #[error("artifact.path must not be empty")]
    EmptyArtifactPath,

    #[error("rpc.timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("rpc.local_url '{url}' is invalid: {reason}")]
    LocalUrl { url: String, reason: String },

    #[error("observability.log_level '{0}' is not a known level")]
    LogLevel(String),
}

/// Check a parsed configuration for values serde cannot reject on its own.
pub fn validate_config(config: &DeployerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !is_semver(&config.compiler.solidity_version) {
        errors.push(ValidationError::SolidityVersion(
            config.compiler.solidity_version.clone(),
        ));
    }

    if config.artifact.path.trim().is_empty() {
        errors.push(ValidationError::EmptyArtifactPath);
    }

    if config.rpc.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    match url::Url::parse(&config.rpc.local_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::LocalUrl {
            url: config.rpc.local_url.clone(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::LocalUrl {
            url: config.rpc.local_url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.observability.log_level.parse::<LevelFilter>().is_err() {
        errors.push(ValidationError::LogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_semver(version: &str) -> bool {
    let parts: Vec<&str> = version.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&DeployerConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = DeployerConfig::default();
        config.compiler.solidity_version = "0.8".into();
        config.rpc.timeout_secs = 0;
        config.rpc.local_url = "ftp://localhost".into();
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::ZeroTimeout));
        assert!(errors.contains(&ValidationError::SolidityVersion("0.8".into())));
        assert!(errors.contains(&ValidationError::LogLevel("loud".into())));
    }

    #[test]
    fn test_unparseable_local_url() {
        let mut config = DeployerConfig::default();
        config.rpc.local_url = "not a url".into();

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::LocalUrl { .. }));
    }

    #[test]
    fn test_semver() {
        assert!(is_semver("0.8.19"));
        assert!(!is_semver("0.8.x"));
        assert!(!is_semver("0..19"));
    }
}
