//! token-deployer
//!
//! Deploys and operates a preset ERC20 token on Ethereum test networks.
//!
//! # Architecture Overview
//!
//! ```text
//!   environment ──▶ SecretBundle ──┐
//!                                  ├──▶ assemble() ──▶ NetworkSet ──▶ `networks` (JSON)
//!   deployer.toml ─▶ DeployerConfig┘                       │
//!                                                          ▼
//!                                                    ChainClient ──▶ Deployer    (`deploy`)
//!                                                          │
//!                                                          └──────▶ TokenClient (`token ...`)
//! ```

use std::path::PathBuf;

use alloy::primitives::{Address, U256};
use clap::{Parser, Subcommand};

use token_deployer::blockchain::{ChainClient, Deployer};
use token_deployer::config::{load_or_default, ConfigSource, SecretBundle};
use token_deployer::networks::assemble;
use token_deployer::networks::render::{render, SecretPolicy};
use token_deployer::observability::logging;
use token_deployer::token::{ContractArtifact, TokenClient};

#[derive(Parser)]
#[command(name = "token-deployer")]
#[command(about = "Deploy and operate the preset ERC20 token", long_about = None)]
struct Cli {
    /// Non-secret settings; defaults apply when the file is missing.
    #[arg(short, long, default_value = "deployer.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the active networks and explorer keys as JSON
    Networks {
        /// Print keys instead of redacting them
        #[arg(long)]
        show_secrets: bool,
    },
    /// Deploy the compiled token
    Deploy {
        /// Target network; the local dev node when omitted
        #[arg(short, long)]
        network: Option<String>,
        /// Artifact JSON; overrides `artifact.path`
        #[arg(short, long)]
        artifact: Option<PathBuf>,
    },
    /// Operate a deployed token
    Token {
        #[arg(short, long)]
        network: Option<String>,
        /// Token contract address
        #[arg(short, long)]
        address: Address,
        #[command(subcommand)]
        action: TokenAction,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Show name, supply, pause state and role members
    Inspect,
    /// Mint tokens (minter role)
    Mint { to: Address, amount: U256 },
    /// Burn the deployer's own tokens
    Burn { amount: U256 },
    /// Pause transfers (pauser role)
    Pause,
    /// Resume transfers (pauser role)
    Unpause,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (config, source) = load_or_default(&cli.config)?;
    logging::init(&config.observability);

    match source {
        ConfigSource::File => {
            tracing::debug!(path = %cli.config.display(), "Config file loaded")
        }
        ConfigSource::Defaults => {
            tracing::debug!(path = %cli.config.display(), "No config file, using defaults")
        }
    }

    let secrets = SecretBundle::from_env();
    let set = assemble(&secrets);

    tracing::info!(
        networks = ?set.active_names(),
        verification_keys = set.verification.len(),
        "Configuration loaded"
    );
    let orphaned = set.orphaned_verification_keys();
    if !orphaned.is_empty() {
        tracing::debug!(networks = ?orphaned, "Explorer keys for inactive networks");
    }

    match cli.command {
        Commands::Networks { show_secrets } => {
            let policy = if show_secrets {
                SecretPolicy::Reveal
            } else {
                SecretPolicy::Redact
            };
            let rendered = render(&set, &config.compiler.solidity_version, policy);
            println!("{}", serde_json::to_string_pretty(&rendered)?);
        }
        Commands::Deploy { network, artifact } => {
            let path = artifact.unwrap_or_else(|| PathBuf::from(&config.artifact.path));
            let artifact = ContractArtifact::load(&path)?;

            let client = ChainClient::for_network(&set, network.as_deref(), &secrets, &config.rpc)?;
            let deployment = Deployer::new(client).deploy(&artifact).await?;

            println!("{}", serde_json::to_string_pretty(&deployment.transaction)?);
            println!(
                "{} deployed to {}",
                deployment.contract_name, deployment.address
            );
        }
        Commands::Token {
            network,
            address,
            action,
        } => {
            let client = ChainClient::for_network(&set, network.as_deref(), &secrets, &config.rpc)?;
            client.verify_chain_id().await?;
            let token = TokenClient::new(client, address);

            match action {
                TokenAction::Inspect => {
                    let summary = token.summary().await?;
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                }
                TokenAction::Mint { to, amount } => {
                    let outcome = token.mint(to, amount).await?;
                    println!("{}", serde_json::to_string_pretty(&outcome)?);
                }
                TokenAction::Burn { amount } => {
                    let outcome = token.burn(amount).await?;
                    println!("{}", serde_json::to_string_pretty(&outcome)?);
                }
                TokenAction::Pause => {
                    let outcome = token.pause().await?;
                    println!("{}", serde_json::to_string_pretty(&outcome)?);
                }
                TokenAction::Unpause => {
                    let outcome = token.unpause().await?;
                    println!("{}", serde_json::to_string_pretty(&outcome)?);
                }
            }
        }
    }

    Ok(())
}
