// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Explorer verification credentials and custom chain registrations.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

pub type ChainId = u64;

/// Networks verified with the etherscan key from disk.
const KEYED_NETWORKS: &[&str] = &["xdai", "goerli", "mainnet"];
/// Networks registered without a key.
const UNKEYED_NETWORKS: &[&str] = &[
    "gnosis",
    "polygon",
    "arbitrumOne",
    "optimisticEthereum",
    "polygonMumbai",
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EtherscanConfig {
    /// API key per network; an empty string means "no key".
    pub api_key: BTreeMap<String, String>,
    pub custom_chains: Vec<ChainRegistration>,
}

impl EtherscanConfig {
    pub fn new(etherscan_key: &str) -> Self {
        let keyed = KEYED_NETWORKS
            .iter()
            .map(|network| (network.to_string(), etherscan_key.to_string()));
        let unkeyed = UNKEYED_NETWORKS
            .iter()
            .map(|network| (network.to_string(), String::new()));
        Self {
            api_key: keyed.chain(unkeyed).collect(),
            custom_chains: vec![ChainRegistration::gnosis()],
        }
    }

    /// Chain ids registered more than once.
    ///
    /// The explorer plugin only honors one registration per chain id, so duplicates silently
    /// shadow each other.
    pub fn duplicate_chain_ids(&self) -> Vec<ChainId> {
        let mut seen = BTreeSet::new();
        let mut duplicates = BTreeSet::new();
        for chain in &self.custom_chains {
            if !seen.insert(chain.chain_id) {
                duplicates.insert(chain.chain_id);
            }
        }
        duplicates.into_iter().collect()
    }
}

/// Explorer service for a chain the verification plugin does not know about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainRegistration {
    pub network: String,
    pub chain_id: ChainId,
    pub urls: ExplorerUrls,
}

impl ChainRegistration {
    pub fn gnosis() -> Self {
        Self {
            network: "gnosis".to_string(),
            chain_id: 100,
            urls: ExplorerUrls {
                api_url: "https://api.gnosisscan.io/api".to_string(),
                browser_url: "https://gnosisscan.io/".to_string(),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerUrls {
    #[serde(rename = "apiURL")]
    pub api_url: String,
    #[serde(rename = "browserURL")]
    pub browser_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_applies_to_keyed_networks_only() {
        let config = EtherscanConfig::new("KEY");
        assert_eq!(config.api_key["mainnet"], "KEY");
        assert_eq!(config.api_key["xdai"], "KEY");
        assert_eq!(config.api_key["gnosis"], "");
        assert_eq!(config.api_key["polygonMumbai"], "");
        assert_eq!(config.api_key.len(), 8);
    }

    #[test]
    fn serialized_shape() {
        let json = serde_json::to_value(EtherscanConfig::new("")).unwrap();
        let chain = &json["customChains"][0];
        assert_eq!(chain["network"], "gnosis");
        assert_eq!(chain["chainId"], 100);
        assert_eq!(chain["urls"]["apiURL"], "https://api.gnosisscan.io/api");
        assert_eq!(chain["urls"]["browserURL"], "https://gnosisscan.io/");
        assert_eq!(json["apiKey"]["goerli"], "");
    }

    #[test]
    fn detects_duplicate_chain_ids() {
        let mut config = EtherscanConfig::new("");
        assert!(config.duplicate_chain_ids().is_empty());

        let mut xdai = ChainRegistration::gnosis();
        xdai.network = "xdai".to_string();
        xdai.urls.api_url = "https://blockscout.com/xdai/mainnet/api".to_string();
        config.custom_chains.push(xdai);
        assert_eq!(config.duplicate_chain_ids(), vec![100]);
    }
}
