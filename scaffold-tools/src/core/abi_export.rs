// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options handed to the ABI exporter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiExportOptions {
    pub path: PathBuf,
    /// Remove previously exported ABIs before writing.
    pub clear: bool,
    /// Write every ABI into `path` directly instead of mirroring source directories.
    pub flat: bool,
    /// Source-name prefixes to leave out, usually dependency packages.
    pub except: Vec<String>,
}

impl Default for AbiExportOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./abi"),
            clear: true,
            flat: true,
            except: vec!["@gnosis.pm".to_string(), "@openzeppelin".to_string()],
        }
    }
}

impl AbiExportOptions {
    /// Whether contracts from `source_name` are left out of the export.
    pub fn excludes(&self, source_name: &str) -> bool {
        self.except
            .iter()
            .any(|prefix| source_name.starts_with(prefix.as_str()))
    }
}
