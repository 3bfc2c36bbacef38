// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Hazards in an assembled configuration that an operator should look at.
//!
//! Nothing here rejects a configuration; the host tooling stays the judge of what it accepts.

use std::{collections::BTreeMap, fmt};

use crate::core::{
    config::ToolConfiguration,
    explorer::ChainId,
    network::{self, ENDPOINT_ID_PLACEHOLDER},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Finding {
    /// A templated endpoint still carries the placeholder id.
    PlaceholderEndpoint { network: String },
    /// An endpoint credential written into a URL by hand is also used by other networks.
    SharedEndpointId { endpoint_id: String, networks: Vec<String> },
    /// Several custom chain registrations use the same chain id.
    DuplicateChainId { chain_id: ChainId, networks: Vec<String> },
    /// The selected network deploys from a mnemonic account but none was loaded.
    MissingMnemonic { network: String },
    /// An explorer API key is set for a network the configuration does not define.
    OrphanApiKey { network: String },
    /// The selected network is not in the catalog.
    UnknownNetwork { network: String },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::PlaceholderEndpoint { network } => write!(
                f,
                "{network}: endpoint still contains {ENDPOINT_ID_PLACEHOLDER}; set endpoint-id in Scaffold.toml"
            ),
            Self::SharedEndpointId {
                endpoint_id,
                networks,
            } => write!(
                f,
                "endpoint id {endpoint_id} is embedded in {} network URLs ({}); confirm it is meant to be shared",
                networks.len(),
                networks.join(", ")
            ),
            Self::DuplicateChainId { chain_id, networks } => write!(
                f,
                "chain id {chain_id} is registered by {}; only one registration per chain id is used",
                networks.join(", ")
            ),
            Self::MissingMnemonic { network } => {
                write!(f, "{network}: no mnemonic loaded for the deploy account")
            }
            Self::OrphanApiKey { network } => {
                write!(f, "{network}: explorer API key set for an undefined network")
            }
            Self::UnknownNetwork { network } => {
                write!(f, "{network}: selected network is not defined")
            }
        }
    }
}

/// Collect every finding for `config`.
pub fn review(config: &ToolConfiguration) -> Vec<Finding> {
    let mut findings = Vec::new();
    endpoint_findings(config, &mut findings);
    chain_findings(config, &mut findings);
    selected_network_findings(config, &mut findings);
    for network in config.etherscan.api_key.keys() {
        if !config.networks.contains_key(network) {
            findings.push(Finding::OrphanApiKey {
                network: network.clone(),
            });
        }
    }
    findings
}

fn endpoint_findings(config: &ToolConfiguration, findings: &mut Vec<Finding>) {
    // id -> (networks embedding it, whether any of them is hard-coded)
    let mut by_id: BTreeMap<&str, (Vec<String>, bool)> = BTreeMap::new();
    for (name, entry) in &config.networks {
        let known = network::find(name);
        let templated = known.is_some_and(|known| known.endpoint.is_templated());
        if templated && entry.url.contains(ENDPOINT_ID_PLACEHOLDER) {
            findings.push(Finding::PlaceholderEndpoint {
                network: name.clone(),
            });
            continue;
        }
        let Some(id) = endpoint_id(&entry.url) else {
            continue;
        };
        // catalog URLs are either fixed or rendered from the configured id
        let from_catalog = known.is_some_and(|known| known.endpoint.render(id) == entry.url);
        if from_catalog && !templated {
            continue;
        }
        let (networks, hard_coded) = by_id.entry(id).or_default();
        networks.push(name.clone());
        *hard_coded |= !from_catalog;
    }
    for (id, (networks, hard_coded)) in by_id {
        if hard_coded && networks.len() > 1 {
            findings.push(Finding::SharedEndpointId {
                endpoint_id: id.to_string(),
                networks,
            });
        }
    }
}

fn chain_findings(config: &ToolConfiguration, findings: &mut Vec<Finding>) {
    for chain_id in config.etherscan.duplicate_chain_ids() {
        let networks = config
            .etherscan
            .custom_chains
            .iter()
            .filter(|chain| chain.chain_id == chain_id)
            .map(|chain| chain.network.clone())
            .collect();
        findings.push(Finding::DuplicateChainId { chain_id, networks });
    }
}

fn selected_network_findings(config: &ToolConfiguration, findings: &mut Vec<Finding>) {
    let network = &config.default_network;
    match config.selected_network() {
        None => findings.push(Finding::UnknownNetwork {
            network: network.clone(),
        }),
        Some(entry) => {
            let missing = entry
                .accounts
                .as_ref()
                .is_some_and(|accounts| accounts.mnemonic.is_empty());
            if missing {
                findings.push(Finding::MissingMnemonic {
                    network: network.clone(),
                });
            }
        }
    }
}

/// Last path segment of a templated endpoint URL.
fn endpoint_id(url: &str) -> Option<&str> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        config::{build_configuration, AssemblyInputs},
        explorer::ChainRegistration,
        secret::Secrets,
    };

    fn with_mnemonic() -> Secrets {
        Secrets {
            mnemonic: "test phrase here".to_string(),
            etherscan: String::new(),
        }
    }

    #[test]
    fn placeholder_endpoints_are_flagged() {
        let config = build_configuration(&AssemblyInputs::builder().build());
        let findings = review(&config);
        assert!(findings.contains(&Finding::PlaceholderEndpoint {
            network: "arbitrumOne".to_string()
        }));
        assert!(!findings.contains(&Finding::PlaceholderEndpoint {
            network: "xdai".to_string()
        }));
        assert!(!findings
            .iter()
            .any(|f| matches!(f, Finding::SharedEndpointId { .. })));
    }

    #[test]
    fn configured_endpoint_id_is_clean() {
        let inputs = AssemblyInputs::builder()
            .network("mainnet")
            .endpoint_id("realprojectid")
            .secrets(with_mnemonic())
            .build();
        assert_eq!(review(&build_configuration(&inputs)), vec![]);
    }

    #[test]
    fn hard_coded_endpoint_id_is_flagged() {
        let inputs = AssemblyInputs::builder()
            .endpoint_id("460f")
            .secrets(with_mnemonic())
            .build();
        let mut config = build_configuration(&inputs);
        let mut sepolia = config.networks["goerli"].clone();
        sepolia.url = "https://sepolia.infura.io/v3/460f".to_string();
        config.networks.insert("sepolia".to_string(), sepolia);

        let shared = review(&config)
            .into_iter()
            .find_map(|f| match f {
                Finding::SharedEndpointId {
                    endpoint_id,
                    networks,
                } => Some((endpoint_id, networks)),
                _ => None,
            })
            .unwrap();
        assert_eq!(shared.0, "460f");
        assert_eq!(shared.1.len(), 10);
        assert!(shared.1.contains(&"sepolia".to_string()));
    }

    #[test]
    fn unrelated_hard_coded_endpoint_is_not_shared() {
        let inputs = AssemblyInputs::builder()
            .endpoint_id("abc")
            .secrets(with_mnemonic())
            .build();
        let mut config = build_configuration(&inputs);
        let mut base = config.networks["goerli"].clone();
        base.url = "https://base.example.org/v1/other".to_string();
        config.networks.insert("base".to_string(), base);
        assert!(!review(&config)
            .iter()
            .any(|f| matches!(f, Finding::SharedEndpointId { .. })));
    }

    #[test]
    fn missing_mnemonic_only_on_remote_selection() {
        let local = build_configuration(&AssemblyInputs::builder().build());
        assert!(!review(&local)
            .iter()
            .any(|f| matches!(f, Finding::MissingMnemonic { .. })));

        let remote = build_configuration(&AssemblyInputs::builder().network("mainnet").build());
        assert!(review(&remote).contains(&Finding::MissingMnemonic {
            network: "mainnet".to_string()
        }));
    }

    #[test]
    fn duplicate_chain_ids_are_flagged() {
        let mut config = build_configuration(&AssemblyInputs::builder().build());
        let mut xdai = ChainRegistration::gnosis();
        xdai.network = "xdai".to_string();
        config.etherscan.custom_chains.push(xdai);
        assert!(review(&config).contains(&Finding::DuplicateChainId {
            chain_id: 100,
            networks: vec!["gnosis".to_string(), "xdai".to_string()],
        }));
    }

    #[test]
    fn unknown_and_orphan_entries() {
        let mut config = build_configuration(&AssemblyInputs::builder().network("sepolia").build());
        config
            .etherscan
            .api_key
            .insert("base".to_string(), String::new());
        let findings = review(&config);
        assert!(findings.contains(&Finding::UnknownNetwork {
            network: "sepolia".to_string()
        }));
        assert!(findings.contains(&Finding::OrphanApiKey {
            network: "base".to_string()
        }));
    }

    #[test]
    fn endpoint_id_is_last_segment() {
        assert_eq!(endpoint_id("https://kovan.infura.io/v3/abc"), Some("abc"));
        assert_eq!(endpoint_id("https://rpc.gnosischain.com/"), Some("rpc.gnosischain.com"));
    }
}
