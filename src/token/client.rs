//! Typed calls against a deployed preset token.
//!
//! Reads go through `eth_call`; writes are signed by the chain client's
//! deployer account and wait for the configured confirmations.

use alloy::primitives::{Address, TxHash, B256, U256};
use alloy::providers::DynProvider;
use alloy::rpc::types::{Log, TransactionReceipt};
use serde::Serialize;

use crate::blockchain::{BlockchainError, BlockchainResult, ChainClient};
use crate::token::binding::IERC20PresetMinterPauser::{
    self, IERC20PresetMinterPauserInstance,
};
use crate::token::roles::{RevertReason, Role};

/// Members and admin of one role.
#[derive(Debug, Clone, Serialize)]
pub struct RoleSummary {
    pub role: Role,
    pub id: B256,
    pub admin: B256,
    pub members: Vec<Address>,
}

/// Snapshot of the token's documented state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSummary {
    pub address: Address,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: U256,
    pub paused: bool,
    pub roles: Vec<RoleSummary>,
}

/// A decoded `Transfer` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub value: U256,
}

/// Result of a state-changing token call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTxOutcome {
    pub transaction_hash: TxHash,
    pub block_number: Option<u64>,
    pub transfers: Vec<TransferEvent>,
    /// Reported by a `Paused` or `Unpaused` event.
    pub pause_change: Option<PauseChange>,
}

/// A decoded `Paused` or `Unpaused` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "event")]
pub enum PauseChange {
    Paused { account: Address },
    Unpaused { account: Address },
}

/// Handle to a deployed token.
#[derive(Clone)]
pub struct TokenClient {
    chain: ChainClient,
    contract: IERC20PresetMinterPauserInstance<DynProvider>,
}

impl TokenClient {
    pub fn new(chain: ChainClient, address: Address) -> Self {
        let contract = IERC20PresetMinterPauser::new(address, chain.provider().clone());
        Self { chain, contract }
    }

    pub fn address(&self) -> Address {
        *self.contract.address()
    }

    pub async fn paused(&self) -> BlockchainResult<bool> {
        self.chain.with_timeout(self.contract.paused().call()).await
    }

    pub async fn balance_of(&self, account: Address) -> BlockchainResult<U256> {
        self.chain
            .with_timeout(self.contract.balanceOf(account).call())
            .await
    }

    pub async fn has_role(&self, role: Role, account: Address) -> BlockchainResult<bool> {
        self.chain
            .with_timeout(self.contract.hasRole(role.id(), account).call())
            .await
    }

    /// Enumerate the current members of `role`.
    pub async fn role_members(&self, role: Role) -> BlockchainResult<Vec<Address>> {
        let count = self
            .chain
            .with_timeout(self.contract.getRoleMemberCount(role.id()).call())
            .await?;

        let count: u64 = count
            .try_into()
            .map_err(|_| BlockchainError::Rpc(format!("{} member count overflows", role.name())))?;

        let mut members = Vec::with_capacity(count as usize);
        for index in 0..count {
            let member = self
                .chain
                .with_timeout(
                    self.contract
                        .getRoleMember(role.id(), U256::from(index))
                        .call(),
                )
                .await?;
            members.push(member);
        }
        Ok(members)
    }

    /// Read name, supply, pause flag and all role assignments.
    pub async fn summary(&self) -> BlockchainResult<TokenSummary> {
        let name = self.chain.with_timeout(self.contract.name().call()).await?;
        let symbol = self.chain.with_timeout(self.contract.symbol().call()).await?;
        let decimals = self
            .chain
            .with_timeout(self.contract.decimals().call())
            .await?;
        let total_supply = self
            .chain
            .with_timeout(self.contract.totalSupply().call())
            .await?;
        let paused = self.paused().await?;

        let mut roles = Vec::with_capacity(Role::ALL.len());
        for role in Role::ALL {
            let admin = self
                .chain
                .with_timeout(self.contract.getRoleAdmin(role.id()).call())
                .await?;
            roles.push(RoleSummary {
                role,
                id: role.id(),
                admin,
                members: self.role_members(role).await?,
            });
        }

        Ok(TokenSummary {
            address: self.address(),
            name,
            symbol,
            decimals,
            total_supply,
            paused,
            roles,
        })
    }

    /// Mint `amount` to `to`. Requires the minter role.
    pub async fn mint(&self, to: Address, amount: U256) -> BlockchainResult<TokenTxOutcome> {
        tracing::info!(token = %self.address(), to = %to, amount = %amount, "Minting");
        let pending = self.contract.mint(to, amount).send().await.map_err(reverted)?;
        self.confirm(pending).await
    }

    /// Burn `amount` of the caller's own balance.
    pub async fn burn(&self, amount: U256) -> BlockchainResult<TokenTxOutcome> {
        tracing::info!(token = %self.address(), amount = %amount, "Burning");
        let pending = self.contract.burn(amount).send().await.map_err(reverted)?;
        self.confirm(pending).await
    }

    /// Pause all transfers. Requires the pauser role.
    pub async fn pause(&self) -> BlockchainResult<TokenTxOutcome> {
        tracing::info!(token = %self.address(), "Pausing");
        let pending = self.contract.pause().send().await.map_err(reverted)?;
        self.confirm(pending).await
    }

    /// Resume transfers. Requires the pauser role.
    pub async fn unpause(&self) -> BlockchainResult<TokenTxOutcome> {
        tracing::info!(token = %self.address(), "Unpausing");
        let pending = self.contract.unpause().send().await.map_err(reverted)?;
        self.confirm(pending).await
    }

    async fn confirm(
        &self,
        pending: alloy::providers::PendingTransactionBuilder<alloy::network::Ethereum>,
    ) -> BlockchainResult<TokenTxOutcome> {
        let receipt = pending
            .with_required_confirmations(self.chain.confirmations())
            .with_timeout(Some(self.chain.timeout()))
            .get_receipt()
            .await
            .map_err(|e| BlockchainError::Rpc(e.to_string()))?;

        if !receipt.status() {
            return Err(BlockchainError::Reverted(format!(
                "transaction {} reverted",
                receipt.transaction_hash
            )));
        }

        let outcome = outcome_from_receipt(&receipt);
        tracing::info!(
            tx_hash = %outcome.transaction_hash,
            block = ?outcome.block_number,
            transfers = outcome.transfers.len(),
            "Token transaction confirmed"
        );
        Ok(outcome)
    }
}

impl std::fmt::Debug for TokenClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenClient")
            .field("address", self.contract.address())
            .field("chain", &self.chain)
            .finish()
    }
}

fn outcome_from_receipt(receipt: &TransactionReceipt) -> TokenTxOutcome {
    let (transfers, pause_change) = decode_events(receipt.inner.logs());

    TokenTxOutcome {
        transaction_hash: receipt.transaction_hash,
        block_number: receipt.block_number,
        transfers,
        pause_change,
    }
}

/// Pick the token's `Transfer`, `Paused` and `Unpaused` events out of receipt logs.
fn decode_events(logs: &[Log]) -> (Vec<TransferEvent>, Option<PauseChange>) {
    let mut transfers = Vec::new();
    let mut pause_change = None;

    for log in logs {
        if let Ok(event) = log.log_decode::<IERC20PresetMinterPauser::Transfer>() {
            let data = event.inner.data;
            transfers.push(TransferEvent {
                from: data.from,
                to: data.to,
                value: data.value,
            });
        } else if let Ok(event) = log.log_decode::<IERC20PresetMinterPauser::Paused>() {
            pause_change = Some(PauseChange::Paused {
                account: event.inner.data.account,
            });
        } else if let Ok(event) = log.log_decode::<IERC20PresetMinterPauser::Unpaused>() {
            pause_change = Some(PauseChange::Unpaused {
                account: event.inner.data.account,
            });
        }
    }

    (transfers, pause_change)
}

/// Map a failed send to a known revert reason where possible.
fn reverted(err: alloy::contract::Error) -> BlockchainError {
    classify_send_error(err.to_string())
}

fn classify_send_error(text: String) -> BlockchainError {
    match RevertReason::find_in(&text) {
        Some(reason) => BlockchainError::Reverted(reason.to_string()),
        None => BlockchainError::Rpc(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RpcConfig;
    use crate::networks::NetworkDescriptor;
    use alloy::primitives::address;
    use alloy::sol_types::SolEvent;
    use crate::token::binding::IERC20PresetMinterPauser::{Paused, Transfer, Unpaused};

    const TOKEN: Address = address!("5fbdb2315678afecb367f032d93f642f64180aa3");
    const DEPLOYER: Address = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");
    const HOLDER: Address = address!("70997970c51812dc3a010c7d01b50e0d17dc79c8");

    fn token_log<E: SolEvent>(event: &E) -> Log {
        Log {
            inner: alloy::primitives::Log {
                address: TOKEN,
                data: event.encode_log_data(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_client_binds_address() {
        let descriptor = NetworkDescriptor::local("http://127.0.0.1:1", None);
        let chain = ChainClient::new(&descriptor, &RpcConfig::default()).unwrap();
        let token_address = address!("5fbdb2315678afecb367f032d93f642f64180aa3");

        let token = TokenClient::new(chain, token_address);
        assert_eq!(token.address(), token_address);
    }

    #[test]
    fn test_summary_serializes_roles_by_name() {
        let summary = RoleSummary {
            role: Role::Minter,
            id: Role::Minter.id(),
            admin: Role::DefaultAdmin.id(),
            members: vec![],
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["role"], "MINTER_ROLE");
    }

    #[test]
    fn test_decode_mint_and_pause() {
        let logs = vec![
            token_log(&Transfer {
                from: Address::ZERO,
                to: HOLDER,
                value: U256::from(5000),
            }),
            token_log(&Paused { account: DEPLOYER }),
        ];

        let (transfers, pause_change) = decode_events(&logs);
        assert_eq!(
            transfers,
            vec![TransferEvent {
                from: Address::ZERO,
                to: HOLDER,
                value: U256::from(5000),
            }]
        );
        assert_eq!(pause_change, Some(PauseChange::Paused { account: DEPLOYER }));
    }

    #[test]
    fn test_decode_burn_transfers_to_zero() {
        let logs = vec![token_log(&Transfer {
            from: HOLDER,
            to: Address::ZERO,
            value: U256::from(4999),
        })];

        let (transfers, pause_change) = decode_events(&logs);
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].from, HOLDER);
        assert_eq!(transfers[0].to, Address::ZERO);
        assert_eq!(transfers[0].value, U256::from(4999));
        assert_eq!(pause_change, None);
    }

    #[test]
    fn test_decode_unpause_is_not_pause() {
        let logs = vec![token_log(&Unpaused { account: DEPLOYER })];

        let (transfers, pause_change) = decode_events(&logs);
        assert!(transfers.is_empty());
        assert_eq!(
            pause_change,
            Some(PauseChange::Unpaused { account: DEPLOYER })
        );
    }

    #[test]
    fn test_send_error_with_known_revert_reason() {
        let err = classify_send_error(
            "server returned an error response: error code 3: execution reverted: \
             ERC20Pausable: token transfer while paused"
                .to_string(),
        );
        match err {
            BlockchainError::Reverted(reason) => {
                assert_eq!(reason, "ERC20Pausable: token transfer while paused")
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_send_error_without_revert_reason() {
        let err = classify_send_error("nonce too low".to_string());
        assert!(matches!(err, BlockchainError::Rpc(text) if text == "nonce too low"));
    }
}
