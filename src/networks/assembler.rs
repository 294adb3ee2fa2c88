//! Decides which networks and verification keys are active for a run.
//!
//! # Rules
//! - No signing key: no networks at all
//! - Signing key + provider key: goerli and sepolia via the provider
//! - Signing key: zkEVMTestnet, always
//! - Explorer keys map independently of which networks are active

use std::collections::BTreeMap;

use crate::config::{Secret, SecretBundle};
use crate::networks::descriptor::{NetworkDescriptor, PROVIDER_NETWORKS, ZKEVM_TESTNET};

/// The assembled deployment configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkSet {
    /// Network name → connection parameters.
    pub networks: BTreeMap<String, NetworkDescriptor>,
    /// Network name → explorer API key. May name inactive networks.
    pub verification: BTreeMap<String, Secret>,
}

impl NetworkSet {
    /// Look up an active network by name.
    pub fn get(&self, name: &str) -> Option<&NetworkDescriptor> {
        self.networks.get(name)
    }

    /// Names of the active networks, sorted.
    pub fn active_names(&self) -> Vec<&str> {
        self.networks.keys().map(String::as_str).collect()
    }

    /// Verification keys whose network is not active.
    ///
    /// Kept in the output; consumers are expected to ignore them.
    pub fn orphaned_verification_keys(&self) -> Vec<&str> {
        self.verification
            .keys()
            .filter(|name| !self.networks.contains_key(name.as_str()))
            .map(String::as_str)
            .collect()
    }

    fn insert(&mut self, descriptor: NetworkDescriptor) {
        self.networks.insert(descriptor.name.clone(), descriptor);
    }
}

/// Derive the active networks and verification keys from the secrets.
///
/// Total over every combination of present and absent secrets.
pub fn assemble(secrets: &SecretBundle) -> NetworkSet {
    let mut set = NetworkSet::default();

    if let Some(signing_key) = &secrets.signing_key {
        if let Some(provider_key) = &secrets.provider_api_key {
            for name in PROVIDER_NETWORKS {
                set.insert(NetworkDescriptor::provider(name, provider_key, signing_key));
            }
        }
        set.insert(NetworkDescriptor::zkevm_testnet(signing_key));
    }

    if let Some(explorer_key) = &secrets.explorer_api_key {
        for name in PROVIDER_NETWORKS {
            set.verification.insert(name.to_string(), explorer_key.clone());
        }
    }
    if let Some(alt_key) = &secrets.alt_explorer_api_key {
        set.verification.insert(ZKEVM_TESTNET.to_string(), alt_key.clone());
    }

    tracing::debug!(
        networks = ?set.active_names(),
        verification = set.verification.len(),
        "Network configuration assembled"
    );

    set
}
