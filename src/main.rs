use std::process;

use clap::Parser;
use gaming_airdrop::{CONTRACT_NAME, arguments::Arguments};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Arguments::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_filter))
        .with_writer(std::io::stderr)
        .init();
    tracing::info!("running deployer with arguments:\n{args}");

    match gaming_airdrop::run(&args).await {
        Ok(deployment) => {
            println!("{CONTRACT_NAME} contract deployed to {}", deployment.address);
        }
        Err(err) => {
            eprintln!("Error: {err:?}");
            process::exit(1);
        }
    }
}
