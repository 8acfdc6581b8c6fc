//! Fixed constructor configuration of the `GamingAirdrop` deployment.

use alloy::{
    primitives::{Address, B256, U256, address, b256},
    sol_types::SolConstructor,
};

use crate::GamingAirdrop;

/// VRF coordinator on Sepolia.
pub const VRF_COORDINATOR: Address = address!("0x8103B0A8A00be2DDC778e6e7eaa21791Cd364625");

/// LINK token paying the VRF fee.
pub const LINK_TOKEN: Address = address!("0x779877A7B0D9E8603169DdbD7836e478b4624789");

/// Gas lane selecting the randomness configuration.
pub const KEY_HASH: B256 =
    b256!("0x474e34a077df58807dbe9c96d3c009b23b3c6d0cce433e59bbf5b34f823bc56c");

pub const FEE: u64 = 5;

/// Token handed out by the airdrop.
pub const REWARD_TOKEN: Address = address!("0x5F9cf1Aecf388d23c0f710f4a64C8458545B4248");

/// Constructor arguments passed to `GamingAirdrop` on deployment.
///
/// Values come from the constants above and never from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AirdropConfig {
    pub vrf_coordinator: Address,
    pub link_token: Address,
    pub key_hash: B256,
    pub fee: U256,
    pub reward_token: Address,
}

impl Default for AirdropConfig {
    fn default() -> Self {
        Self {
            vrf_coordinator: VRF_COORDINATOR,
            link_token: LINK_TOKEN,
            key_hash: KEY_HASH,
            fee: U256::from(FEE),
            reward_token: REWARD_TOKEN,
        }
    }
}

impl AirdropConfig {
    /// ABI-encoded constructor arguments, to be appended to the creation code.
    pub fn constructor_args(&self) -> Vec<u8> {
        GamingAirdrop::constructorCall {
            vrfCoordinator: self.vrf_coordinator,
            linkToken: self.link_token,
            keyHash: self.key_hash,
            fee: self.fee,
            rewardToken: self.reward_token,
        }
        .abi_encode()
    }
}
