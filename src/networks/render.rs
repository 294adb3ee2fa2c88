//! JSON rendering of an assembled [`NetworkSet`] for external tooling.
//!
//! Shape:
//! ```text
//! { "solidity": "0.8.19",
//!   "networks": { name: { "url", "chainId"?, "accounts" } },
//!   "etherscan": { "apiKey": { name: key }, "customChains": [...] } }
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::Secret;
use crate::networks::assembler::NetworkSet;
use crate::networks::descriptor::PROVIDER_KEY_PATH;
use crate::networks::explorer::{custom_chains, CustomChain};

const REDACTED: &str = "***";

/// Whether secrets appear in rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretPolicy {
    Redact,
    Reveal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedConfig {
    pub solidity: String,
    pub networks: BTreeMap<String, RenderedNetwork>,
    pub etherscan: RenderedExplorer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedNetwork {
    pub url: String,
    #[serde(rename = "chainId", skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    pub accounts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedExplorer {
    #[serde(rename = "apiKey")]
    pub api_key: BTreeMap<String, String>,
    #[serde(rename = "customChains")]
    pub custom_chains: Vec<CustomChain>,
}

/// Render the set, hiding keys and account secrets unless told otherwise.
pub fn render(set: &NetworkSet, solidity_version: &str, policy: SecretPolicy) -> RenderedConfig {
    let show = |secret: &Secret| match policy {
        SecretPolicy::Reveal => secret.expose().to_string(),
        SecretPolicy::Redact => REDACTED.to_string(),
    };

    let networks = set
        .networks
        .iter()
        .map(|(name, descriptor)| {
            let url = match policy {
                SecretPolicy::Reveal => descriptor.url.clone(),
                SecretPolicy::Redact => redact_url(&descriptor.url),
            };
            let rendered = RenderedNetwork {
                url,
                chain_id: descriptor.chain_id,
                accounts: descriptor.accounts.iter().map(&show).collect(),
            };
            (name.clone(), rendered)
        })
        .collect();

    let api_key = set
        .verification
        .iter()
        .map(|(name, key)| (name.clone(), show(key)))
        .collect();

    RenderedConfig {
        solidity: solidity_version.to_string(),
        networks,
        etherscan: RenderedExplorer {
            api_key,
            custom_chains: custom_chains(),
        },
    }
}

/// Mask the provider key path segment; the host is left intact.
fn redact_url(url: &str) -> String {
    match url.split_once(PROVIDER_KEY_PATH) {
        Some((base, _)) => format!("{}{}{}", base, PROVIDER_KEY_PATH, REDACTED),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SecretBundle;
    use crate::networks::assemble;

    fn full_bundle() -> SecretBundle {
        SecretBundle {
            signing_key: Some(Secret::from("0xabc")),
            provider_api_key: Some(Secret::from("p1key")),
            explorer_api_key: Some(Secret::from("e1key")),
            alt_explorer_api_key: None,
        }
    }

    #[test]
    fn test_reveal_matches_wire_shape() {
        let secrets = full_bundle();
        let set = assemble(&secrets);
        let rendered = render(&set, "0.8.19", SecretPolicy::Reveal);
        let json = serde_json::to_value(&rendered).unwrap();

        assert_eq!(json["solidity"], "0.8.19");
        assert_eq!(
            json["networks"]["goerli"]["url"],
            "https://eth-goerli.g.alchemy.com/v2/p1key"
        );
        assert!(json["networks"]["goerli"].get("chainId").is_none());
        assert_eq!(json["networks"]["zkEVMTestnet"]["chainId"], 1442);
        assert_eq!(json["networks"]["sepolia"]["accounts"][0], "0xabc");
        assert_eq!(json["etherscan"]["apiKey"]["sepolia"], "e1key");
        assert_eq!(json["etherscan"]["customChains"][0]["network"], "zkEVMTestnet");
    }

    #[test]
    fn test_redact_hides_every_secret() {
        let secrets = full_bundle();
        let set = assemble(&secrets);
        let rendered = render(&set, "0.8.19", SecretPolicy::Redact);
        let text = serde_json::to_string(&rendered).unwrap();

        assert!(!text.contains("0xabc"));
        assert!(!text.contains("p1key"));
        assert!(!text.contains("e1key"));
        assert_eq!(
            rendered.networks["goerli"].url,
            "https://eth-goerli.g.alchemy.com/v2/***"
        );
    }

    #[test]
    fn test_empty_set_still_lists_custom_chains() {
        let secrets = SecretBundle::default();
        let rendered = render(&assemble(&secrets), "0.8.19", SecretPolicy::Redact);
        assert!(rendered.networks.is_empty());
        assert!(rendered.etherscan.api_key.is_empty());
        assert_eq!(rendered.etherscan.custom_chains.len(), 1);
    }

    #[test]
    fn test_redact_leaves_host_intact() {
        let secrets = SecretBundle {
            signing_key: Some(Secret::from("0xabc")),
            provider_api_key: Some(Secret::from("goerli")),
            explorer_api_key: Some(Secret::from("eth")),
            alt_explorer_api_key: None,
        };
        let rendered = render(&assemble(&secrets), "0.8.19", SecretPolicy::Redact);

        assert_eq!(
            rendered.networks["goerli"].url,
            "https://eth-goerli.g.alchemy.com/v2/***"
        );
        assert_eq!(
            rendered.networks["zkEVMTestnet"].url,
            "https://rpc.public.zkevm-test.net"
        );
    }
}
