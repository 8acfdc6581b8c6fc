//! Contract deployment
use alloy::{
    contract::RawCallBuilder,
    network::ReceiptResponse,
    primitives::{Address, Bytes, TxHash},
    providers::{Provider, WalletProvider},
};
use anyhow::Context;

use crate::{artifact::ContractArtifact, config::AirdropConfig};

type ContractResult<T> = Result<T, alloy::contract::Error>;

/// Outcome of a mined deployment transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployment {
    pub address: Address,
    pub tx_hash: TxHash,
    pub gas_used: u64,
}

/// Deploy a contract (with logging)
pub(crate) async fn deploy<P: Provider>(
    name: &str,
    tx: RawCallBuilder<P>,
) -> ContractResult<Deployment> {
    tracing::info!("deploying {name}");
    let pending_tx = tx.send().await?;
    let tx_hash = *pending_tx.tx_hash();
    tracing::info!(%tx_hash, "waiting for tx to be mined");

    let receipt = pending_tx.get_receipt().await?;
    tracing::info!(%receipt.gas_used, %tx_hash, "tx mined");
    if !receipt.status() {
        tracing::error!(%tx_hash, "deployment of {name} reverted");
        return Err(alloy::contract::Error::ContractNotDeployed);
    }
    let address = receipt
        .contract_address
        .ok_or(alloy::contract::Error::ContractNotDeployed)?;

    tracing::info!("deployed {name} at {address:#x}");
    Ok(Deployment {
        address,
        tx_hash,
        gas_used: receipt.gas_used,
    })
}

/// Creation code followed by the encoded constructor arguments.
pub fn deployment_code(artifact: &ContractArtifact, config: &AirdropConfig) -> Bytes {
    let mut code = artifact.bytecode.to_vec();
    code.extend_from_slice(&config.constructor_args());
    code.into()
}

/// Given a chain provider/connector with a wallet, deploy a new GamingAirdrop contract
pub async fn deploy_gaming_airdrop<P>(
    provider: &P,
    artifact: &ContractArtifact,
    config: &AirdropConfig,
) -> anyhow::Result<Deployment>
where
    P: Provider + WalletProvider,
{
    let deployer = provider.default_signer_address();
    let chain_id = provider
        .get_chain_id()
        .await
        .context("failed to query chain id")?;
    let balance = provider
        .get_balance(deployer)
        .await
        .context("failed to query deployer balance")?;
    tracing::info!(chain_id, %deployer, %balance, "deploying with account");
    tracing::info!(
        vrf_coordinator = %config.vrf_coordinator,
        link_token = %config.link_token,
        key_hash = %config.key_hash,
        fee = %config.fee,
        reward_token = %config.reward_token,
        "constructor arguments"
    );

    let tx = RawCallBuilder::new_raw_deploy(provider, deployment_code(artifact, config));
    let deployment = deploy(&artifact.contract_name, tx)
        .await
        .with_context(|| format!("failed to deploy {}", artifact.contract_name))?;
    Ok(deployment)
}

#[cfg(test)]
mod tests {
    use super::{deploy, deploy_gaming_airdrop, deployment_code};
    use crate::{
        artifact::{
            ContractArtifact,
            tests::{STOP_INIT_CODE, artifact_json},
        },
        config::AirdropConfig,
        provider::{DEV_MNEMONIC, build_provider},
    };
    use alloy::{
        contract::{Error as ContractError, RawCallBuilder},
        node_bindings::Anvil,
        primitives::Bytes,
        providers::Provider,
    };

    fn test_artifact() -> ContractArtifact {
        ContractArtifact::from_json(&artifact_json(STOP_INIT_CODE), "GamingAirdrop").unwrap()
    }

    #[test]
    fn test_deployment_code_appends_args() {
        let artifact = test_artifact();
        let config = AirdropConfig::default();
        let code = deployment_code(&artifact, &config);

        assert_eq!(code.len(), artifact.bytecode.len() + 5 * 32);
        assert_eq!(&code[..artifact.bytecode.len()], &artifact.bytecode[..]);
        assert_eq!(
            &code[artifact.bytecode.len()..],
            &config.constructor_args()[..]
        );
    }

    #[tokio::test]
    async fn test_gaming_airdrop_deployment() {
        let anvil = Anvil::new().spawn();
        let provider =
            build_provider(DEV_MNEMONIC.to_string(), 0, anvil.endpoint_url()).unwrap();

        let deployment =
            deploy_gaming_airdrop(&provider, &test_artifact(), &AirdropConfig::default())
                .await
                .unwrap();
        assert!(!deployment.address.is_zero());
        assert!(deployment.gas_used > 0);

        let code = provider.get_code_at(deployment.address).await.unwrap();
        assert_eq!(code, Bytes::from_static(&[0x00]));

        // a second run deploys a fresh contract from the same config
        let again = deploy_gaming_airdrop(&provider, &test_artifact(), &AirdropConfig::default())
            .await
            .unwrap();
        assert_ne!(again.address, deployment.address);
    }

    #[tokio::test]
    async fn test_reverting_constructor() {
        let anvil = Anvil::new().spawn();
        let provider =
            build_provider(DEV_MNEMONIC.to_string(), 0, anvil.endpoint_url()).unwrap();

        // PUSH1 0 PUSH1 0 REVERT
        let artifact =
            ContractArtifact::from_json(&artifact_json("0x60006000fd"), "GamingAirdrop").unwrap();
        let result = deploy_gaming_airdrop(&provider, &artifact, &AirdropConfig::default()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_reverted_receipt() {
        let anvil = Anvil::new().spawn();
        let provider =
            build_provider(DEV_MNEMONIC.to_string(), 0, anvil.endpoint_url()).unwrap();

        // fixed gas skips estimation, so the revert only shows up in the mined receipt
        let artifact =
            ContractArtifact::from_json(&artifact_json("0x60006000fd"), "GamingAirdrop").unwrap();
        let code = deployment_code(&artifact, &AirdropConfig::default());
        let tx = RawCallBuilder::new_raw_deploy(&provider, code).gas(200_000);

        let err = deploy("GamingAirdrop", tx).await.unwrap_err();
        assert!(matches!(err, ContractError::ContractNotDeployed));
    }

    #[tokio::test]
    async fn test_unreachable_node() {
        let url = "http://127.0.0.1:1".parse().unwrap();
        let provider = build_provider(DEV_MNEMONIC.to_string(), 0, url).unwrap();

        let err = deploy_gaming_airdrop(&provider, &test_artifact(), &AirdropConfig::default())
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("chain id"));
    }
}
