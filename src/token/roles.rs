//! Access-control roles and revert reasons of the minter/pauser preset.

use alloy::primitives::{b256, B256};
use serde::Serialize;

/// Admin of every other role; held by the deployer.
pub const DEFAULT_ADMIN_ROLE: B256 = B256::ZERO;
/// `keccak256("MINTER_ROLE")`
pub const MINTER_ROLE: B256 =
    b256!("9f2df0fed2c77648de5860a4cc508cd0818c85b8b8a1ab4ceeef8d981c8956a6");
/// `keccak256("PAUSER_ROLE")`
pub const PAUSER_ROLE: B256 =
    b256!("65d7a28e3265b37a6474929f336521b332c1681b933f6cb9f3376673440d862a");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    #[serde(rename = "DEFAULT_ADMIN_ROLE")]
    DefaultAdmin,
    #[serde(rename = "MINTER_ROLE")]
    Minter,
    #[serde(rename = "PAUSER_ROLE")]
    Pauser,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::DefaultAdmin, Role::Minter, Role::Pauser];

    pub fn id(self) -> B256 {
        match self {
            Role::DefaultAdmin => DEFAULT_ADMIN_ROLE,
            Role::Minter => MINTER_ROLE,
            Role::Pauser => PAUSER_ROLE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Role::DefaultAdmin => "DEFAULT_ADMIN_ROLE",
            Role::Minter => "MINTER_ROLE",
            Role::Pauser => "PAUSER_ROLE",
        }
    }
}

/// Revert reasons the preset emits for rejected operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevertReason {
    MissingMinterRole,
    MissingPauserRoleToPause,
    MissingPauserRoleToUnpause,
    TransferWhilePaused,
}

impl RevertReason {
    const ALL: [RevertReason; 4] = [
        RevertReason::MissingMinterRole,
        RevertReason::MissingPauserRoleToPause,
        RevertReason::MissingPauserRoleToUnpause,
        RevertReason::TransferWhilePaused,
    ];

    pub fn message(self) -> &'static str {
        match self {
            RevertReason::MissingMinterRole => {
                "ERC20PresetMinterPauser: must have minter role to mint"
            }
            RevertReason::MissingPauserRoleToPause => {
                "ERC20PresetMinterPauser: must have pauser role to pause"
            }
            RevertReason::MissingPauserRoleToUnpause => {
                "ERC20PresetMinterPauser: must have pauser role to unpause"
            }
            RevertReason::TransferWhilePaused => "ERC20Pausable: token transfer while paused",
        }
    }

    /// Find a known revert reason inside an RPC error message.
    pub fn find_in(error_text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|reason| error_text.contains(reason.message()))
    }
}

impl std::fmt::Display for RevertReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
