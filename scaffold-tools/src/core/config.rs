// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The assembled toolchain configuration.

use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{
    core::{
        abi_export::AbiExportOptions,
        compiler::SolidityConfig,
        explorer::EtherscanConfig,
        network::{self, NetworkConfig, ENDPOINT_ID_PLACEHOLDER, LOCALHOST},
        secret::Secrets,
        typegen::TypeGenOptions,
    },
    utils::redact,
};

/// Everything the external build and deploy tooling reads.
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfiguration {
    pub default_network: String,
    pub networks: BTreeMap<String, NetworkConfig>,
    pub etherscan: EtherscanConfig,
    pub solidity: SolidityConfig,
    pub abi_exporter: AbiExportOptions,
    pub typechain: TypeGenOptions,
}

/// Inputs to [`build_configuration`].
#[derive(Clone, Debug, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct AssemblyInputs {
    #[builder(default = LOCALHOST.to_string())]
    pub network: String,
    #[builder(default)]
    pub secrets: Secrets,
    /// Credential segment of templated endpoint URLs.
    #[builder(default = ENDPOINT_ID_PLACEHOLDER.to_string())]
    pub endpoint_id: String,
}

/// Assemble the configuration record.
///
/// Pure in its inputs: the same inputs always produce equal records.
pub fn build_configuration(inputs: &AssemblyInputs) -> ToolConfiguration {
    ToolConfiguration {
        default_network: inputs.network.clone(),
        networks: network::networks(&inputs.endpoint_id, &inputs.secrets.mnemonic),
        etherscan: EtherscanConfig::new(&inputs.secrets.etherscan),
        solidity: SolidityConfig::default(),
        abi_exporter: AbiExportOptions::default(),
        typechain: TypeGenOptions::default(),
    }
}

/// Read the secret files under `root` and assemble the configuration for `network`.
pub fn load_configuration(
    root: impl AsRef<Path>,
    network: &str,
    endpoint_id: &str,
) -> ToolConfiguration {
    let secrets = Secrets::load(root, network);
    let inputs = AssemblyInputs::builder()
        .network(network)
        .secrets(secrets)
        .endpoint_id(endpoint_id)
        .build();
    build_configuration(&inputs)
}

impl ToolConfiguration {
    /// The entry of the selected network.
    pub fn selected_network(&self) -> Option<&NetworkConfig> {
        self.networks.get(&self.default_network)
    }

    /// A copy with every non-empty secret replaced, fit for printing.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        for accounts in config.networks.values_mut().filter_map(|n| n.accounts.as_mut()) {
            accounts.mnemonic = redact(&accounts.mnemonic);
        }
        for key in config.etherscan.api_key.values_mut() {
            *key = redact(key);
        }
        config
    }
}
