//! Contract creation: build, sign, broadcast, confirm.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, TxHash};
use alloy::providers::Provider;
use alloy::rpc::types::TransactionRequest;
use serde::Serialize;

use crate::blockchain::client::ChainClient;
use crate::blockchain::types::{BlockchainError, BlockchainResult};
use crate::token::ContractArtifact;

/// A confirmed deployment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub contract_name: String,
    pub network: String,
    pub address: Address,
    pub transaction_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u64,
    /// The mined transaction as reported by the node.
    pub transaction: serde_json::Value,
}

/// Deploys compiled artifacts through a [`ChainClient`].
pub struct Deployer {
    client: ChainClient,
}

impl Deployer {
    pub fn new(client: ChainClient) -> Self {
        Self { client }
    }

    /// Contract-creation request for an artifact with no constructor arguments.
    pub fn build(&self, artifact: &ContractArtifact) -> TransactionRequest {
        TransactionRequest::default()
            .with_from(self.client.deployer())
            .with_deploy_code(artifact.bytecode.clone())
    }

    /// Deploy the artifact and wait for its receipt.
    pub async fn deploy(&self, artifact: &ContractArtifact) -> BlockchainResult<Deployment> {
        let chain_id = self.client.verify_chain_id().await?;

        tracing::info!(
            contract = %artifact.contract_name,
            network = %self.client.network(),
            chain_id = chain_id.0,
            deployer = %self.client.deployer(),
            "Deploying contract"
        );

        let provider = self.client.provider();
        let pending = self
            .client
            .with_timeout(provider.send_transaction(self.build(artifact)))
            .await?;

        let tx_hash = *pending.tx_hash();
        tracing::info!(tx_hash = %tx_hash, "Deployment transaction broadcast");

        let receipt = pending
            .with_required_confirmations(self.client.confirmations())
            .with_timeout(Some(self.client.timeout()))
            .get_receipt()
            .await
            .map_err(|e| BlockchainError::Rpc(e.to_string()))?;

        if !receipt.status() {
            return Err(BlockchainError::Reverted(format!(
                "deployment of {} in {}",
                artifact.contract_name, tx_hash
            )));
        }

        let address = receipt.contract_address.ok_or_else(|| {
            BlockchainError::Deployment(format!("receipt for {} has no contract address", tx_hash))
        })?;

        let transaction = match self
            .client
            .with_timeout(provider.get_transaction_by_hash(tx_hash))
            .await
        {
            Ok(Some(tx)) => serde_json::to_value(tx).unwrap_or_else(|e| {
                tracing::warn!(
                    tx_hash = %tx_hash,
                    error = %e,
                    "Could not serialize mined transaction"
                );
                serde_json::Value::Null
            }),
            Ok(None) => serde_json::Value::Null,
            Err(e) => {
                tracing::warn!(tx_hash = %tx_hash, error = %e, "Could not fetch mined transaction");
                serde_json::Value::Null
            }
        };

        tracing::info!(
            contract = %artifact.contract_name,
            address = %address,
            block = ?receipt.block_number,
            gas_used = receipt.gas_used,
            "Contract deployed"
        );

        Ok(Deployment {
            contract_name: artifact.contract_name.clone(),
            network: self.client.network().to_string(),
            address,
            transaction_hash: tx_hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
            transaction,
        })
    }
}
