//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! NetworkDescriptor (url, pinned chain id, accounts)
//!     → wallet.rs (first account becomes the signer)
//!     → client.rs (signing provider with timeouts, chain id check)
//!     → deploy.rs (contract creation and receipt)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from the environment-derived descriptor
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod client;
pub mod deploy;
pub mod types;
pub mod wallet;

pub use client::ChainClient;
pub use deploy::{Deployer, Deployment};
pub use types::{BlockchainError, BlockchainResult, ChainId};
pub use wallet::Wallet;
