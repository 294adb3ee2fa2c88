//! Network configuration assembly.
//!
//! # Data Flow
//! ```text
//! SecretBundle (signing key, provider key, explorer keys)
//!     → assembler.rs (decide which networks and explorer keys are active)
//!     → NetworkSet { networks, verification }
//!     → render.rs (JSON for external deploy/verify tooling)
//!     → blockchain (deploy / inspect against one selected descriptor)
//! ```
//!
//! # Design Decisions
//! - Assembly is a pure function of the bundle: no environment reads, no I/O
//! - Missing secrets degrade to omission, never to an error
//! - Maps are ordered so repeated runs render identically

pub mod assembler;
pub mod descriptor;
pub mod explorer;
pub mod render;

pub use assembler::{assemble, NetworkSet};
pub use descriptor::NetworkDescriptor;
pub use explorer::{CustomChain, ExplorerUrls};
