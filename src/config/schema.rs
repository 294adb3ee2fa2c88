//! Configuration schema definitions.
//!
//! The file only carries non-secret settings. Signing and API keys are read
//! from the environment by [`crate::config::secrets`].

use serde::{Deserialize, Serialize};

/// Root configuration for the deployer.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct DeployerConfig {
    /// Solidity compiler settings.
    pub compiler: CompilerConfig,

    /// Location of the compiled token artifact.
    pub artifact: ArtifactConfig,

    /// JSON-RPC behavior.
    pub rpc: RpcConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Solidity compiler settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CompilerConfig {
    /// Compiler version the artifact was built with (e.g., "0.8.19").
    pub solidity_version: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            solidity_version: "0.8.19".to_string(),
        }
    }
}

/// Compiled contract artifact location.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ArtifactConfig {
    /// Path to the artifact JSON (contractName, abi, bytecode).
    pub path: String,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            path: "artifacts/contracts/WantaekToken.sol/WantaekToken.json".to_string(),
        }
    }
}

/// JSON-RPC configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RpcConfig {
    /// RPC request timeout in seconds.
    pub timeout_secs: u64,

    /// Number of block confirmations to wait for after broadcasting.
    pub confirmations: u64,

    /// Local development node used when no network is selected.
    pub local_url: String,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            confirmations: 1,
            local_url: "http://127.0.0.1:8545".to_string(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Human-readable or JSON log lines.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
