// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use serde::{Deserialize, Serialize};

/// Solidity compiler version used for every contract.
pub const SOLC_VERSION: &str = "0.8.7";
/// Default number of optimizer runs.
pub const OPTIMIZER_RUNS: u32 = 200;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolidityConfig {
    pub compilers: Vec<CompilerProfile>,
}

impl Default for SolidityConfig {
    fn default() -> Self {
        Self {
            compilers: vec![CompilerProfile::default()],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerProfile {
    pub version: String,
    pub settings: CompilerSettings,
}

impl Default for CompilerProfile {
    fn default() -> Self {
        Self {
            version: SOLC_VERSION.to_string(),
            settings: CompilerSettings {
                optimizer: Optimizer {
                    enabled: true,
                    runs: OPTIMIZER_RUNS,
                },
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerSettings {
    pub optimizer: Optimizer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Optimizer {
    pub enabled: bool,
    pub runs: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile() {
        let solidity = SolidityConfig::default();
        assert_eq!(solidity.compilers.len(), 1);
        let json = serde_json::to_value(&solidity).unwrap();
        assert_eq!(json["compilers"][0]["version"], "0.8.7");
        assert_eq!(json["compilers"][0]["settings"]["optimizer"]["enabled"], true);
        assert_eq!(json["compilers"][0]["settings"]["optimizer"]["runs"], 200);
    }
}
