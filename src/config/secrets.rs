//! Environment-provided secrets.
//!
//! # Security
//! - Secrets are read ONLY from environment variables, once, at startup
//! - `Secret` never prints its contents through `Debug` or `Display`

use std::fmt;

/// Signing key for the deployer account.
pub const PRIVATE_KEY_ENV_VAR: &str = "PRIVATE_KEY";
/// RPC provider (Alchemy) API key.
pub const PROVIDER_API_KEY_ENV_VAR: &str = "ALCHEMY_API_KEY";
/// Etherscan verification key, shared by the provider networks.
pub const EXPLORER_API_KEY_ENV_VAR: &str = "ETHERSCAN_API_KEY";
/// Polygonscan verification key for the zkEVM testnet.
pub const ALT_EXPLORER_API_KEY_ENV_VAR: &str = "POLYSCAN_API_KEY";

/// Opaque credential. Use [`Secret::expose`] where the raw value is required.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw value. Callers must not log it.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Optional secrets sourced from the execution environment.
///
/// Absence of any value is a valid state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretBundle {
    pub signing_key: Option<Secret>,
    pub provider_api_key: Option<Secret>,
    pub explorer_api_key: Option<Secret>,
    pub alt_explorer_api_key: Option<Secret>,
}

impl SecretBundle {
    /// Read the bundle from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the bundle from an arbitrary variable lookup.
    ///
    /// Only the exact empty string counts as absent; whitespace is a value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            let value = lookup(name)?;
            if value.is_empty() {
                tracing::debug!(variable = name, "Ignoring empty environment variable");
                return None;
            }
            Some(Secret(value))
        };

        let bundle = Self {
            signing_key: read(PRIVATE_KEY_ENV_VAR),
            provider_api_key: read(PROVIDER_API_KEY_ENV_VAR),
            explorer_api_key: read(EXPLORER_API_KEY_ENV_VAR),
            alt_explorer_api_key: read(ALT_EXPLORER_API_KEY_ENV_VAR),
        };

        tracing::debug!(
            signing_key = bundle.signing_key.is_some(),
            provider_api_key = bundle.provider_api_key.is_some(),
            explorer_api_key = bundle.explorer_api_key.is_some(),
            alt_explorer_api_key = bundle.alt_explorer_api_key.is_some(),
            "Secrets loaded"
        );

        bundle
    }
}
