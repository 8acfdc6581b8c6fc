use std::{fmt, path::PathBuf};

use alloy::transports::http::reqwest::Url;
use clap::Parser;

use crate::{artifact::DEFAULT_ARTIFACT_PATH, provider::DEV_MNEMONIC};

/// Deploy the GamingAirdrop contract.
///
/// Constructor arguments are fixed in the binary; the options below only
/// select the chain, the deploying account and the compiled contract.
#[derive(Debug, Parser)]
#[clap(version, about)]
pub struct Arguments {
    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub rpc_url: Url,

    /// Mnemonic of the deploying wallet. Defaults to the local development accounts.
    #[clap(
        long,
        env,
        default_value = DEV_MNEMONIC,
        hide_default_value = true,
        hide_env_values = true
    )]
    pub mnemonic: String,

    /// Account index within the mnemonic. The first account deploys by default.
    #[clap(long, env, default_value = "0")]
    pub account_index: u32,

    /// Path to the Hardhat artifact of the compiled contract.
    #[clap(long, env, default_value = DEFAULT_ARTIFACT_PATH)]
    pub artifact: PathBuf,

    /// Tracing filter, in `tracing_subscriber::EnvFilter` syntax.
    #[clap(long, env, default_value = "warn,gaming_airdrop=info")]
    pub log_filter: String,
}

impl fmt::Display for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rpc_url: {}", self.rpc_url)?;
        writeln!(f, "mnemonic: SECRET")?;
        writeln!(f, "account_index: {}", self.account_index)?;
        writeln!(f, "artifact: {}", self.artifact.display())?;
        writeln!(f, "log_filter: {}", self.log_filter)?;
        Ok(())
    }
}
