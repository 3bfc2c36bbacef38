// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Catalog of target networks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::utils::color::Color;

/// Name of the local development network.
pub const LOCALHOST: &str = "localhost";

/// Endpoint of the local development node.
pub const LOCALHOST_URL: &str = "http://localhost:8545";

/// Placeholder used in templated endpoints when no endpoint id is configured.
pub const ENDPOINT_ID_PLACEHOLDER: &str = "<id>";

const GNOSIS_RPC: &str = "https://rpc.gnosischain.com/";

const DEPLOY_GAS: u64 = 5_000_000;
const DEPLOY_GAS_PRICE: u64 = 8_000_000_000;

/// Connection and transaction parameters for one network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_multiplier: Option<u32>,
    /// Omitted for the local node, which deploys from its own first account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Accounts>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accounts {
    pub mnemonic: String,
}

/// Where a network's RPC endpoint lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// Fixed public URL.
    Fixed(&'static str),
    /// Infura subdomain, completed with the configured endpoint id.
    Infura(&'static str),
}

impl Endpoint {
    pub fn render(&self, endpoint_id: &str) -> String {
        match self {
            Self::Fixed(url) => url.to_string(),
            Self::Infura(subdomain) => format!("https://{subdomain}.infura.io/v3/{endpoint_id}"),
        }
    }

    /// Whether the rendered URL embeds the endpoint id.
    pub fn is_templated(&self) -> bool {
        matches!(self, Self::Infura(_))
    }
}

/// Gas settings applied to a network entry.
#[derive(Clone, Copy, Debug, Default)]
struct Gas {
    limit: Option<u64>,
    price: Option<u64>,
    multiplier: Option<u32>,
}

const NO_GAS: Gas = Gas {
    limit: None,
    price: None,
    multiplier: None,
};

const FIXED_GAS: Gas = Gas {
    limit: Some(DEPLOY_GAS),
    price: Some(DEPLOY_GAS_PRICE),
    multiplier: None,
};

const BUMPED_GAS: Gas = Gas {
    limit: Some(DEPLOY_GAS),
    price: Some(DEPLOY_GAS_PRICE),
    multiplier: Some(2),
};

/// One row of the built-in catalog.
#[derive(Clone, Copy, Debug)]
pub struct NetworkEntry {
    pub name: &'static str,
    pub endpoint: Endpoint,
    gas: Gas,
    /// Whether deployments sign with the mnemonic-derived account.
    pub uses_mnemonic: bool,
}

impl NetworkEntry {
    const fn remote(name: &'static str, endpoint: Endpoint, gas: Gas) -> Self {
        Self {
            name,
            endpoint,
            gas,
            uses_mnemonic: true,
        }
    }

    pub fn to_config(&self, endpoint_id: &str, mnemonic: &str) -> NetworkConfig {
        NetworkConfig {
            url: self.endpoint.render(endpoint_id),
            gas: self.gas.limit,
            gas_price: self.gas.price,
            gas_multiplier: self.gas.multiplier,
            accounts: self.uses_mnemonic.then(|| Accounts {
                mnemonic: mnemonic.to_string(),
            }),
        }
    }
}

/// Every network the configuration knows about.
pub const CATALOG: &[NetworkEntry] = &[
    NetworkEntry {
        name: LOCALHOST,
        endpoint: Endpoint::Fixed(LOCALHOST_URL),
        gas: NO_GAS,
        uses_mnemonic: false,
    },
    NetworkEntry::remote("rinkeby", Endpoint::Infura("rinkeby"), BUMPED_GAS),
    NetworkEntry::remote("kovan", Endpoint::Infura("kovan"), BUMPED_GAS),
    NetworkEntry::remote("mainnet", Endpoint::Infura("mainnet"), NO_GAS),
    NetworkEntry::remote("ropsten", Endpoint::Infura("ropsten"), NO_GAS),
    NetworkEntry::remote("goerli", Endpoint::Infura("goerli"), NO_GAS),
    NetworkEntry::remote("xdai", Endpoint::Fixed(GNOSIS_RPC), FIXED_GAS),
    NetworkEntry::remote("gnosis", Endpoint::Fixed(GNOSIS_RPC), FIXED_GAS),
    NetworkEntry::remote("polygon", Endpoint::Infura("polygon-mainnet"), NO_GAS),
    NetworkEntry::remote("polygonMumbai", Endpoint::Infura("polygon-mumbai"), NO_GAS),
    NetworkEntry::remote("arbitrumOne", Endpoint::Infura("arbitrum-mainnet"), NO_GAS),
    NetworkEntry::remote(
        "optimisticEthereum",
        Endpoint::Infura("optimism-mainnet"),
        NO_GAS,
    ),
];

pub fn find(name: &str) -> Option<&'static NetworkEntry> {
    CATALOG.iter().find(|entry| entry.name == name)
}

/// Build the network table from the catalog.
pub fn networks(endpoint_id: &str, mnemonic: &str) -> BTreeMap<String, NetworkConfig> {
    CATALOG
        .iter()
        .map(|entry| (entry.name.to_string(), entry.to_config(endpoint_id, mnemonic)))
        .collect()
}

pub fn is_local(network: &str) -> bool {
    network == LOCALHOST
}

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("unknown network {}; run {} to see the available ones", .0.red(), "scaffold networks".grey())]
    Unknown(String),
}

/// Make sure the selected network is one the catalog defines.
pub fn check_network(name: &str) -> Result<&'static NetworkEntry, NetworkError> {
    find(name).ok_or_else(|| NetworkError::Unknown(name.to_string()))
}
