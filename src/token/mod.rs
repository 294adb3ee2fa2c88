//! The preset ERC20 token: artifact, ABI binding, roles and typed client.
//!
//! The contract itself is the audited minter/pauser preset; this module only
//! knows how to deploy its bytecode and talk to its documented interface.

pub mod artifact;
pub mod binding;
pub mod client;
pub mod roles;

pub use artifact::{ArtifactError, ContractArtifact};
pub use client::{PauseChange, TokenClient, TokenSummary, TokenTxOutcome, TransferEvent};
pub use roles::{RevertReason, Role};
