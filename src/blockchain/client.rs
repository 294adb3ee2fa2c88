//! JSON-RPC client bound to one assembled network.
//!
//! # Responsibilities
//! - Connect to the descriptor's endpoint with the deployer's signer
//! - Verify the remote chain id when the descriptor pins one
//! - Bound every RPC round trip with the configured timeout

use std::future::IntoFuture;
use std::time::Duration;

use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use tokio::time::timeout;

use crate::blockchain::types::{BlockchainError, BlockchainResult, ChainId};
use crate::blockchain::wallet::Wallet;
use crate::config::schema::RpcConfig;
use crate::config::SecretBundle;
use crate::networks::{NetworkDescriptor, NetworkSet};

/// Signing RPC client for a single network.
#[derive(Clone)]
pub struct ChainClient {
    provider: DynProvider,
    wallet: Wallet,
    network: String,
    expected_chain_id: Option<u64>,
    timeout_duration: Duration,
    confirmations: u64,
}

impl ChainClient {
    /// Build a client for `descriptor`, signing with its first account.
    ///
    /// Does not touch the network; call [`ChainClient::verify_chain_id`] for that.
    pub fn new(descriptor: &NetworkDescriptor, rpc: &RpcConfig) -> BlockchainResult<Self> {
        let key = descriptor.deployer_key().ok_or_else(|| {
            BlockchainError::Wallet(format!("Network '{}' has no accounts", descriptor.name))
        })?;
        let wallet = Wallet::from_secret(key)?;

        let url: url::Url = descriptor.url.parse().map_err(|e| {
            BlockchainError::Rpc(format!(
                "Invalid RPC URL for network '{}': {}",
                descriptor.name, e
            ))
        })?;

        let provider = ProviderBuilder::new()
            .wallet(wallet.to_ethereum_wallet())
            .connect_http(url)
            .erased();

        tracing::info!(
            network = %descriptor.name,
            chain_id = ?descriptor.chain_id,
            deployer = %wallet.address(),
            "Chain client initialized"
        );

        Ok(Self {
            provider,
            wallet,
            network: descriptor.name.clone(),
            expected_chain_id: descriptor.chain_id,
            timeout_duration: Duration::from_secs(rpc.timeout_secs),
            confirmations: rpc.confirmations,
        })
    }

    /// Build a client for a named network from the assembled set.
    ///
    /// With no name, targets the local development node.
    pub fn for_network(
        set: &NetworkSet,
        name: Option<&str>,
        secrets: &SecretBundle,
        rpc: &RpcConfig,
    ) -> BlockchainResult<Self> {
        let descriptor = match name {
            Some(name) => set.get(name).cloned().ok_or_else(|| {
                BlockchainError::UnknownNetwork {
                    requested: name.to_string(),
                    active: set.active_names().into_iter().map(String::from).collect(),
                }
            })?,
            None => NetworkDescriptor::local(&rpc.local_url, secrets.signing_key.as_ref()),
        };
        Self::new(&descriptor, rpc)
    }

    /// Run an RPC future under the configured timeout.
    pub async fn with_timeout<T, E, F>(&self, fut: F) -> BlockchainResult<T>
    where
        F: IntoFuture<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(BlockchainError::Rpc(e.to_string())),
            Err(_) => Err(BlockchainError::Timeout(self.timeout_duration.as_secs())),
        }
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> BlockchainResult<ChainId> {
        self.with_timeout(self.provider.get_chain_id())
            .await
            .map(ChainId)
    }

    /// Verify the connected chain matches the descriptor's pinned id.
    ///
    /// Networks without a pinned id accept whatever the provider serves.
    pub async fn verify_chain_id(&self) -> BlockchainResult<ChainId> {
        let actual = self.get_chain_id().await?;
        if let Some(expected) = self.expected_chain_id {
            if actual.0 != expected {
                return Err(BlockchainError::ChainMismatch {
                    expected,
                    actual: actual.0,
                });
            }
        }
        tracing::debug!(network = %self.network, chain_id = actual.0, "Chain id verified");
        Ok(actual)
    }

    /// The signing provider.
    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    pub fn deployer(&self) -> Address {
        self.wallet.address()
    }

    pub fn network(&self) -> &str {
        &self.network
    }

    pub fn timeout(&self) -> Duration {
        self.timeout_duration
    }

    /// Confirmations to wait for after broadcasting.
    pub fn confirmations(&self) -> u64 {
        self.confirmations
    }
}

impl std::fmt::Debug for ChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClient")
            .field("network", &self.network)
            .field("deployer", &self.wallet.address())
            .field("expected_chain_id", &self.expected_chain_id)
            .field("timeout_secs", &self.timeout_duration.as_secs())
            .finish()
    }
}
