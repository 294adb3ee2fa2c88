//! Deployment tooling for a preset ERC20 token (mint, pause, burn).

pub mod blockchain;
pub mod config;
pub mod networks;
pub mod observability;
pub mod token;

pub use config::{DeployerConfig, SecretBundle};
pub use networks::{assemble, NetworkDescriptor, NetworkSet};
