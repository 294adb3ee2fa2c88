//! Chain-specific types and error definitions.

use thiserror::Error;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Invalid private key format or derivation error.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Chain configuration mismatch.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },

    /// Requested network is not part of the assembled configuration.
    #[error("Network '{requested}' is not configured (active: {})", format_active(.active))]
    UnknownNetwork {
        requested: String,
        active: Vec<String>,
    },

    /// Contract creation did not yield a deployed contract.
    #[error("Deployment failed: {0}")]
    Deployment(String),

    /// Transaction was mined but reverted.
    #[error("Transaction reverted: {0}")]
    Reverted(String),
}

fn format_active(active: &[String]) -> String {
    if active.is_empty() {
        "none".to_string()
    } else {
        active.join(", ")
    }
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_id_conversion() {
        let chain_id = ChainId::from(1442u64);
        assert_eq!(chain_id.0, 1442);
        assert_eq!(u64::from(chain_id), 1442);
    }

    #[test]
    fn test_error_display() {
        let err = BlockchainError::Timeout(10);
        assert_eq!(err.to_string(), "RPC timeout after 10 seconds");

        let err = BlockchainError::ChainMismatch {
            expected: 1442,
            actual: 1,
        };
        assert!(err.to_string().contains("1442"));
    }

    #[test]
    fn test_unknown_network_lists_active() {
        let err = BlockchainError::UnknownNetwork {
            requested: "mainnet".into(),
            active: vec!["goerli".into(), "zkEVMTestnet".into()],
        };
        assert_eq!(
            err.to_string(),
            "Network 'mainnet' is not configured (active: goerli, zkEVMTestnet)"
        );

        let err = BlockchainError::UnknownNetwork {
            requested: "goerli".into(),
            active: Vec::new(),
        };
        assert!(err.to_string().ends_with("(active: none)"));
    }
}
