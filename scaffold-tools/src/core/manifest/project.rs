// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::Path;

use serde::Deserialize;

use super::{load, ManifestError, FILENAME};
use crate::core::network::{ENDPOINT_ID_PLACEHOLDER, LOCALHOST};

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ProjectManifest {
    #[serde(default)]
    pub project: TomlProject,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TomlProject {
    pub default_network: Option<String>,
    pub endpoint_id: Option<String>,
}

impl ProjectManifest {
    /// Load `Scaffold.toml` from the project root, treating a missing file as empty.
    pub fn load_or_default(root: impl AsRef<Path>) -> Result<Self, ManifestError> {
        match load(root.as_ref().join(FILENAME)) {
            Err(ManifestError::Missing) => {
                debug!(@grey, "no {} found, using defaults", FILENAME);
                Ok(Self::default())
            }
            res => res,
        }
    }

    pub fn default_network(&self) -> &str {
        self.project.default_network.as_deref().unwrap_or(LOCALHOST)
    }

    pub fn endpoint_id(&self) -> &str {
        self.project
            .endpoint_id
            .as_deref()
            .unwrap_or(ENDPOINT_ID_PLACEHOLDER)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn missing_manifest_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = ProjectManifest::load_or_default(dir.path()).unwrap();
        assert_eq!(manifest.default_network(), LOCALHOST);
        assert_eq!(manifest.endpoint_id(), ENDPOINT_ID_PLACEHOLDER);
    }

    #[test]
    fn reads_project_table() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(FILENAME),
            "[project]\ndefault-network = \"goerli\"\nendpoint-id = \"abc123\"\n",
        )
        .unwrap();
        let manifest = ProjectManifest::load_or_default(dir.path()).unwrap();
        assert_eq!(manifest.default_network(), "goerli");
        assert_eq!(manifest.endpoint_id(), "abc123");
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FILENAME), "[project\n").unwrap();
        assert!(matches!(
            ProjectManifest::load_or_default(dir.path()),
            Err(ManifestError::TomlRead(_))
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FILENAME), "[project]\nnetwork = \"goerli\"\n").unwrap();
        assert!(ProjectManifest::load_or_default(dir.path()).is_err());
    }
}
