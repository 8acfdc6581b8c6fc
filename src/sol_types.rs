//! Solidity types for contract interaction

use alloy::sol;

sol! {
    /// Constructor interface of the compiled `GamingAirdrop` contract.
    contract GamingAirdrop {
        constructor(
            address vrfCoordinator,
            address linkToken,
            bytes32 keyHash,
            uint256 fee,
            address rewardToken
        );
    }
}

/// Solidity types of the constructor inputs, in declaration order.
pub const CONSTRUCTOR_INPUTS: [&str; 5] = ["address", "address", "bytes32", "uint256", "address"];
