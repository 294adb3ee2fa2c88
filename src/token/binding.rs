//! ABI of the ERC20 minter/pauser preset.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IERC20PresetMinterPauser {
        event Transfer(address indexed from, address indexed to, uint256 value);
        event Paused(address account);
        event Unpaused(address account);

        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);

        function mint(address to, uint256 amount) external;
        function burn(uint256 amount) external;
        function pause() external;
        function unpause() external;
        function paused() external view returns (bool);

        function hasRole(bytes32 role, address account) external view returns (bool);
        function getRoleAdmin(bytes32 role) external view returns (bytes32);
        function getRoleMember(bytes32 role, uint256 index) external view returns (address);
        function getRoleMemberCount(bytes32 role) external view returns (uint256);
    }
}

#[cfg(test)]
mod tests {
    use super::IERC20PresetMinterPauser::*;
    use alloy::primitives::{address, U256};
    use alloy::sol_types::{SolCall, SolEvent};

    #[test]
    fn test_selectors() {
        assert_eq!(mintCall::SELECTOR, [0x40, 0xc1, 0x0f, 0x19]);
        assert_eq!(pauseCall::SELECTOR, [0x84, 0x56, 0xcb, 0x59]);
        assert_eq!(unpauseCall::SELECTOR, [0x3f, 0x4b, 0xa8, 0x3a]);
        assert_eq!(burnCall::SELECTOR, [0x42, 0x96, 0x6c, 0x68]);
    }

    #[test]
    fn test_transfer_topic() {
        assert_eq!(
            Transfer::SIGNATURE_HASH.to_string(),
            "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"
        );
    }

    #[test]
    fn test_encode_mint() {
        let call = mintCall {
            to: address!("70997970c51812dc3a010c7d01b50e0d17dc79c8"),
            amount: U256::from(5000),
        };
        let data = call.abi_encode();
        assert_eq!(data.len(), 4 + 32 + 32);
        assert_eq!(&data[..4], &mintCall::SELECTOR);
    }
}
