// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Two-phase startup.
//!
//! Phase one assembles the configuration and never looks at build outputs. Phase two loads
//! auxiliary tasks, which read compiled artifacts, and is skipped until a first build has
//! produced the artifacts directory.

use std::path::{Path, PathBuf};

use crate::core::{
    config::{load_configuration, ToolConfiguration},
    manifest::{ManifestError, ProjectManifest},
};

/// Build output directory, relative to the project root.
pub const ARTIFACTS_DIR: &str = "artifacts";

/// Setup that depends on compiled artifacts.
pub trait AuxiliaryTasks {
    /// Called at most once per startup, with the artifacts directory.
    fn load(&mut self, artifacts: &Path) -> Result<(), StartupError>;
}

/// Whether a build has produced artifacts under `root`.
pub fn artifacts_present(root: impl AsRef<Path>) -> bool {
    root.as_ref().join(ARTIFACTS_DIR).is_dir()
}

/// Load `tasks` if and only if the artifacts directory exists.
///
/// Returns whether the tasks were loaded. A missing directory is not reported.
pub fn maybe_register_auxiliary_tasks(
    root: impl AsRef<Path>,
    tasks: &mut impl AuxiliaryTasks,
) -> Result<bool, StartupError> {
    let root = root.as_ref();
    if !artifacts_present(root) {
        return Ok(false);
    }
    tasks.load(&root.join(ARTIFACTS_DIR))?;
    Ok(true)
}

/// A project being started, rooted at a directory.
#[derive(Debug)]
pub struct Startup {
    root: PathBuf,
    manifest: ProjectManifest,
}

impl Startup {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, ManifestError> {
        let root = root.into();
        let manifest = ProjectManifest::load_or_default(&root)?;
        Ok(Self { root, manifest })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest(&self) -> &ProjectManifest {
        &self.manifest
    }

    /// Phase one: assemble the configuration.
    ///
    /// `network` and `endpoint_id` override the manifest when given.
    pub fn configure(&self, network: Option<&str>, endpoint_id: Option<&str>) -> ToolConfiguration {
        let network = network.unwrap_or_else(|| self.manifest.default_network());
        let endpoint_id = endpoint_id.unwrap_or_else(|| self.manifest.endpoint_id());
        info!(@grey, "assembling configuration for network {}", network);
        load_configuration(&self.root, network, endpoint_id)
    }

    /// Phase two: register auxiliary tasks once artifacts exist.
    pub fn maybe_register_auxiliary_tasks(
        &self,
        tasks: &mut impl AuxiliaryTasks,
    ) -> Result<bool, StartupError> {
        let loaded = maybe_register_auxiliary_tasks(&self.root, tasks)?;
        if !loaded {
            debug!(@grey, "no {} directory, skipping auxiliary tasks", ARTIFACTS_DIR);
        }
        Ok(loaded)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid artifact pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("error reading artifacts: {0}")]
    Glob(#[from] glob::GlobError),
    #[error("artifacts path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("malformed artifact {}: {source}", path.display())]
    MalformedArtifact {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[derive(Default)]
    struct CountingTasks {
        loads: usize,
    }

    impl AuxiliaryTasks for CountingTasks {
        fn load(&mut self, _artifacts: &Path) -> Result<(), StartupError> {
            self.loads += 1;
            Ok(())
        }
    }

    #[test]
    fn skips_without_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let mut tasks = CountingTasks::default();
        let loaded = maybe_register_auxiliary_tasks(dir.path(), &mut tasks).unwrap();
        assert!(!loaded);
        assert_eq!(tasks.loads, 0);
    }

    #[test]
    fn loads_once_with_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(ARTIFACTS_DIR)).unwrap();
        let mut tasks = CountingTasks::default();
        let loaded = maybe_register_auxiliary_tasks(dir.path(), &mut tasks).unwrap();
        assert!(loaded);
        assert_eq!(tasks.loads, 1);
    }

    #[test]
    fn artifacts_file_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(ARTIFACTS_DIR), "").unwrap();
        assert!(!artifacts_present(dir.path()));
    }

    #[test]
    fn configure_prefers_overrides() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(crate::core::manifest::FILENAME),
            "[project]\ndefault-network = \"goerli\"\nendpoint-id = \"fromtoml\"\n",
        )
        .unwrap();
        let startup = Startup::new(dir.path()).unwrap();

        let config = startup.configure(None, None);
        assert_eq!(config.default_network, "goerli");
        assert_eq!(config.networks["goerli"].url, "https://goerli.infura.io/v3/fromtoml");

        let config = startup.configure(Some("localhost"), Some("flag"));
        assert_eq!(config.default_network, "localhost");
        assert_eq!(config.networks["goerli"].url, "https://goerli.infura.io/v3/flag");
    }
}
