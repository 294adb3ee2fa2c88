//! Block explorer endpoints for contract source verification.

use serde::Serialize;

use crate::networks::descriptor::{ZKEVM_TESTNET, ZKEVM_TESTNET_CHAIN_ID};

/// API and browser endpoints of an explorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplorerUrls {
    #[serde(rename = "apiURL")]
    pub api_url: String,
    #[serde(rename = "browserURL")]
    pub browser_url: String,
}

/// An explorer for a chain that verification tooling does not know by default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomChain {
    pub network: String,
    pub chain_id: u64,
    pub urls: ExplorerUrls,
}

/// Explorer definitions for every network without built-in support.
pub fn custom_chains() -> Vec<CustomChain> {
    vec![CustomChain {
        network: ZKEVM_TESTNET.to_string(),
        chain_id: ZKEVM_TESTNET_CHAIN_ID,
        urls: ExplorerUrls {
            api_url: "https://api-testnet-zkevm.polygonscan.com/api".to_string(),
            browser_url: "https://testnet-zkevm.polygonscan.com".to_string(),
        },
    }]
}
