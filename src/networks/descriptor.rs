//! Connection parameters for a single target chain.

use crate::config::Secret;

/// Goerli testnet, reached through the RPC provider.
pub const GOERLI: &str = "goerli";
/// Sepolia testnet, reached through the RPC provider.
pub const SEPOLIA: &str = "sepolia";
/// Networks whose URL is templated with the provider API key.
pub const PROVIDER_NETWORKS: [&str; 2] = [GOERLI, SEPOLIA];

/// Polygon zkEVM testnet, reached through its public endpoint.
pub const ZKEVM_TESTNET: &str = "zkEVMTestnet";
pub const ZKEVM_TESTNET_URL: &str = "https://rpc.public.zkevm-test.net";
pub const ZKEVM_TESTNET_CHAIN_ID: u64 = 1442;

/// Name given to the local development node.
pub const LOCAL: &str = "localhost";

/// First pre-funded account of Anvil and the Hardhat node.
pub const DEV_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Connection parameters for one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkDescriptor {
    pub name: String,
    pub url: String,
    /// `None` when the chain id is inherited from the provider.
    pub chain_id: Option<u64>,
    /// Signing keys, in order. The first one deploys.
    pub accounts: Vec<Secret>,
}

impl NetworkDescriptor {
    /// A provider-hosted network: URL templated with network name and key.
    pub fn provider(name: &str, provider_api_key: &Secret, signing_key: &Secret) -> Self {
        Self {
            name: name.to_string(),
            url: provider_url(name, provider_api_key),
            chain_id: None,
            accounts: vec![signing_key.clone()],
        }
    }

    /// The zkEVM testnet with its fixed endpoint and chain id.
    pub fn zkevm_testnet(signing_key: &Secret) -> Self {
        Self {
            name: ZKEVM_TESTNET.to_string(),
            url: ZKEVM_TESTNET_URL.to_string(),
            chain_id: Some(ZKEVM_TESTNET_CHAIN_ID),
            accounts: vec![signing_key.clone()],
        }
    }

    /// A local development node. Falls back to the well-known dev account.
    pub fn local(url: &str, signing_key: Option<&Secret>) -> Self {
        let key = signing_key
            .cloned()
            .unwrap_or_else(|| Secret::new(DEV_PRIVATE_KEY));
        Self {
            name: LOCAL.to_string(),
            url: url.to_string(),
            chain_id: None,
            accounts: vec![key],
        }
    }

    /// The key that signs deployments on this network.
    pub fn deployer_key(&self) -> Option<&Secret> {
        self.accounts.first()
    }
}

/// Path prefix under which provider URLs carry the API key.
pub const PROVIDER_KEY_PATH: &str = "/v2/";

/// Alchemy endpoint for a named Ethereum testnet.
pub fn provider_url(network: &str, provider_api_key: &Secret) -> String {
    format!(
        "https://eth-{}.g.alchemy.com{}{}",
        network,
        PROVIDER_KEY_PATH,
        provider_api_key.expose()
    )
}
