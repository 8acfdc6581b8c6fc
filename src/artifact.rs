//! Loading compiled contracts from Hardhat build artifacts

use std::{collections::BTreeMap, fs, path::Path, str::FromStr};

use alloy::{json_abi::JsonAbi, primitives::Bytes};
use anyhow::{Context, Result, bail, ensure};
use serde::Deserialize;

use crate::CONSTRUCTOR_INPUTS;

/// Where Hardhat writes the `GamingAirdrop` artifact relative to the project root.
pub const DEFAULT_ARTIFACT_PATH: &str = "artifacts/contracts/GamingAirdrop.sol/GamingAirdrop.json";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    #[serde(default)]
    contract_name: Option<String>,
    #[serde(default)]
    source_name: Option<String>,
    abi: JsonAbi,
    bytecode: String,
    #[serde(default)]
    link_references: BTreeMap<String, serde_json::Value>,
}

/// A compiled contract ready to be deployed.
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    pub contract_name: String,
    pub source_name: Option<String>,
    pub abi: JsonAbi,
    /// Creation code, without constructor arguments
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Read and validate the artifact of contract `name` at `path`.
    pub fn load(path: impl AsRef<Path>, name: &str) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read artifact {}", path.display()))?;
        Self::from_json(&json, name)
            .with_context(|| format!("invalid artifact {}", path.display()))
    }

    pub fn from_json(json: &str, name: &str) -> Result<Self> {
        let raw: RawArtifact = serde_json::from_str(json).context("malformed artifact json")?;

        if let Some(found) = &raw.contract_name {
            ensure!(found == name, "artifact is for {found}, expected {name}");
        }
        if !raw.link_references.is_empty() {
            let libs = raw.link_references.keys().cloned().collect::<Vec<_>>();
            bail!("bytecode has unlinked libraries: {}", libs.join(", "));
        }
        let bytecode = Bytes::from_str(&raw.bytecode).context("bytecode is not valid hex")?;
        ensure!(!bytecode.is_empty(), "{name} has empty bytecode (abstract contract?)");

        check_constructor(&raw.abi)?;

        Ok(Self {
            contract_name: name.to_string(),
            source_name: raw.source_name,
            abi: raw.abi,
            bytecode,
        })
    }
}

/// An ABI without a constructor entry is accepted; one with a different
/// signature would make the encoded arguments meaningless.
fn check_constructor(abi: &JsonAbi) -> Result<()> {
    let Some(ctor) = &abi.constructor else {
        return Ok(());
    };
    let found = ctor.inputs.iter().map(|p| p.ty.as_str()).collect::<Vec<_>>();
    ensure!(
        found == CONSTRUCTOR_INPUTS,
        "constructor takes ({}), expected ({})",
        found.join(","),
        CONSTRUCTOR_INPUTS.join(",")
    );
    Ok(())
}
