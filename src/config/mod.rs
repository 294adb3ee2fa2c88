//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! deployer.toml (optional)
//!     → loader.rs (read & deserialize, defaults when absent)
//!     → validation.rs (semantic checks)
//!     → DeployerConfig (validated, immutable)
//!
//! process environment
//!     → secrets.rs (read once at startup)
//!     → SecretBundle (passed by reference to the network assembler)
//! ```
//!
//! # Design Decisions
//! - Secrets never come from the config file
//! - All file fields have defaults to allow minimal (or missing) configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod secrets;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError, ConfigSource};
pub use schema::DeployerConfig;
pub use secrets::{Secret, SecretBundle};
