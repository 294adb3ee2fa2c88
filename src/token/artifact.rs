//! Compiled contract artifacts (`contractName`, `abi`, `bytecode`).

use std::fs;
use std::path::Path;

use alloy::primitives::Bytes;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("cannot read artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed artifact {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("artifact {0} has no creation bytecode (abstract contract or interface?)")]
    EmptyBytecode(String),
}

/// The parts of a compiler artifact needed to deploy a contract.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    pub contract_name: String,
    #[serde(default)]
    pub abi: serde_json::Value,
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Load and check an artifact file.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: display.clone(),
            source,
        })?;
        Self::parse(&content, &display)
    }

    /// Parse artifact JSON. `origin` only labels errors.
    pub fn parse(json: &str, origin: &str) -> Result<Self, ArtifactError> {
        let artifact: Self = serde_json::from_str(json).map_err(|source| ArtifactError::Json {
            path: origin.to_string(),
            source,
        })?;

        if artifact.bytecode.is_empty() {
            return Err(ArtifactError::EmptyBytecode(origin.to_string()));
        }

        tracing::debug!(
            contract = %artifact.contract_name,
            bytecode_len = artifact.bytecode.len(),
            "Artifact loaded"
        );

        Ok(artifact)
    }
}
