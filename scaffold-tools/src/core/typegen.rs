// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fmt, path::PathBuf};

use serde::{Deserialize, Serialize};

/// Where and how typed contract bindings are generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeGenOptions {
    pub out_dir: PathBuf,
    pub target: BindingTarget,
}

impl Default for TypeGenOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("src/types"),
            target: BindingTarget::EthersV5,
        }
    }
}

/// Flavor of generated bindings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BindingTarget {
    #[default]
    EthersV5,
    EthersV6,
    Web3V1,
}

impl fmt::Display for BindingTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::EthersV5 => "ethers-v5",
            Self::EthersV6 => "ethers-v6",
            Self::Web3V1 => "web3-v1",
        };
        f.write_str(name)
    }
}
