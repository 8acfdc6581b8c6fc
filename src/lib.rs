//! GamingAirdrop contract bindings and deployer.
//!
//! This crate deploys the compiled `GamingAirdrop` contract with its fixed
//! VRF and token configuration, and provides the providers and signers used to do so.

use anyhow::{Context, Result};

mod sol_types;

pub mod arguments;
pub mod artifact;
pub mod config;
pub mod deployer;
pub mod provider;

pub use sol_types::*;

use crate::{
    arguments::Arguments, artifact::ContractArtifact, config::AirdropConfig,
    deployer::Deployment,
};

/// Name of the contract in the build artifacts.
pub const CONTRACT_NAME: &str = "GamingAirdrop";

/// Deploy `GamingAirdrop` from the first available signer and wait for it to be mined.
pub async fn run(args: &Arguments) -> Result<Deployment> {
    let artifact = ContractArtifact::load(&args.artifact, CONTRACT_NAME)?;
    let provider = provider::build_provider(
        args.mnemonic.clone(),
        args.account_index,
        args.rpc_url.clone(),
    )
    .context("failed to build signer")?;
    deployer::deploy_gaming_airdrop(&provider, &artifact, &AirdropConfig::default()).await
}
