// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Setup tasks derived from compiled contract artifacts.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::core::{
    abi_export::AbiExportOptions,
    startup::{AuxiliaryTasks, StartupError},
};

const DEBUG_SUFFIX: &str = ".dbg.json";
const BUILD_INFO_DIR: &str = "build-info";
const TASK_PREFIX: &str = "setup";

/// A task available once a contract has been compiled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub contract: String,
    pub source_name: String,
    pub abi_entries: usize,
}

#[derive(Debug, Default)]
pub struct TaskRegistry {
    tasks: Vec<Task>,
}

impl TaskRegistry {
    pub fn register(&mut self, task: Task) {
        debug!(@grey, "registered task {}", task.name);
        self.tasks.push(task);
    }

    pub fn get(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Contract artifact written by the compiler plugin.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Artifact {
    contract_name: String,
    source_name: String,
    #[serde(default)]
    abi: Vec<serde_json::Value>,
}

/// Registers one `setup:<Contract>` task per compiled project contract.
///
/// Contracts whose sources the ABI exporter excludes are dependencies, not project contracts,
/// and get no task.
#[derive(Debug, Default)]
pub struct ArtifactTasks {
    options: AbiExportOptions,
    registry: TaskRegistry,
}

impl ArtifactTasks {
    pub fn new(options: AbiExportOptions) -> Self {
        Self {
            options,
            registry: TaskRegistry::default(),
        }
    }

    pub fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> TaskRegistry {
        self.registry
    }
}

impl AuxiliaryTasks for ArtifactTasks {
    fn load(&mut self, artifacts: &Path) -> Result<(), StartupError> {
        let dir = artifacts
            .to_str()
            .ok_or_else(|| StartupError::NonUtf8Path(artifacts.to_path_buf()))?;
        let pattern = format!("{}/**/*.json", glob::Pattern::escape(dir));
        for entry in glob::glob(&pattern)? {
            let path = entry?;
            if !is_contract_artifact(artifacts, &path) {
                continue;
            }
            let contents = fs::read_to_string(&path)?;
            let artifact: Artifact = serde_json::from_str(&contents)
                .map_err(|source| StartupError::MalformedArtifact {
                    path: path.clone(),
                    source,
                })?;
            if self.options.excludes(&artifact.source_name) {
                continue;
            }
            let mut name = format!("{TASK_PREFIX}:{}", artifact.contract_name);
            if self.registry.get(&name).is_some() {
                // same contract name in another source, fall back to the qualified name
                name = format!(
                    "{TASK_PREFIX}:{}:{}",
                    artifact.source_name, artifact.contract_name
                );
                warn!(@yellow, "{} is defined more than once, registered as {}",
                    artifact.contract_name, name);
            }
            self.registry.register(Task {
                name,
                contract: artifact.contract_name,
                source_name: artifact.source_name,
                abi_entries: artifact.abi.len(),
            });
        }
        info!(@grey, "registered {} setup tasks", self.registry.len());
        Ok(())
    }
}

fn is_contract_artifact(artifacts: &Path, path: &Path) -> bool {
    let is_debug = path
        .file_name()
        .map(|name| name.to_string_lossy().ends_with(DEBUG_SUFFIX))
        .unwrap_or(true);
    let in_build_info = path
        .strip_prefix(artifacts)
        .map(|rel| rel.starts_with(BUILD_INFO_DIR))
        .unwrap_or(false);
    path.is_file() && !is_debug && !in_build_info
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::core::startup::maybe_register_auxiliary_tasks;

    fn write_artifact(artifacts: &Path, source: &str, name: &str, abi_entries: usize) -> PathBuf {
        let dir = artifacts.join(source);
        fs::create_dir_all(&dir).unwrap();
        let abi: Vec<_> = (0..abi_entries)
            .map(|i| serde_json::json!({ "type": "function", "name": format!("f{i}") }))
            .collect();
        let artifact = serde_json::json!({
            "_format": "hh-sol-artifact-1",
            "contractName": name,
            "sourceName": source,
            "abi": abi,
            "bytecode": "0x",
        });
        let path = dir.join(format!("{name}.json"));
        fs::write(&path, artifact.to_string()).unwrap();
        fs::write(dir.join(format!("{name}.dbg.json")), "{}").unwrap();
        path
    }

    #[test]
    fn registers_project_contracts() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts = dir.path().join("artifacts");
        write_artifact(&artifacts, "contracts/YourContract.sol", "YourContract", 3);
        write_artifact(
            &artifacts,
            "@openzeppelin/contracts/access/Ownable.sol",
            "Ownable",
            5,
        );
        fs::create_dir_all(artifacts.join(BUILD_INFO_DIR)).unwrap();
        fs::write(artifacts.join(BUILD_INFO_DIR).join("abc.json"), "{}").unwrap();

        let mut tasks = ArtifactTasks::new(AbiExportOptions::default());
        assert!(maybe_register_auxiliary_tasks(dir.path(), &mut tasks).unwrap());

        let registry = tasks.into_registry();
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("setup:YourContract"),
            Some(&Task {
                name: "setup:YourContract".to_string(),
                contract: "YourContract".to_string(),
                source_name: "contracts/YourContract.sol".to_string(),
                abi_entries: 3,
            })
        );
        assert!(registry.get("setup:Ownable").is_none());
    }

    #[test]
    fn duplicate_names_use_qualified_task() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts = dir.path().join("artifacts");
        write_artifact(&artifacts, "contracts/a/Token.sol", "Token", 1);
        write_artifact(&artifacts, "contracts/b/Token.sol", "Token", 2);

        let mut tasks = ArtifactTasks::default();
        assert!(maybe_register_auxiliary_tasks(dir.path(), &mut tasks).unwrap());

        let registry = tasks.into_registry();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("setup:Token").unwrap().source_name, "contracts/a/Token.sol");
        let qualified = registry.get("setup:contracts/b/Token.sol:Token").unwrap();
        assert_eq!(qualified.abi_entries, 2);
    }

    #[test]
    fn root_with_glob_characters() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("proj[1]");
        write_artifact(&root.join("artifacts"), "contracts/A.sol", "A", 1);

        let mut tasks = ArtifactTasks::default();
        assert!(maybe_register_auxiliary_tasks(&root, &mut tasks).unwrap());
        assert_eq!(tasks.registry().len(), 1);
        assert!(tasks.registry().get("setup:A").is_some());
    }

    #[test]
    fn empty_artifacts_register_nothing() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("artifacts")).unwrap();
        let mut tasks = ArtifactTasks::default();
        assert!(maybe_register_auxiliary_tasks(dir.path(), &mut tasks).unwrap());
        assert!(tasks.registry().is_empty());
    }

    #[test]
    fn malformed_artifact_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let contracts = dir.path().join("artifacts").join("contracts");
        fs::create_dir_all(&contracts).unwrap();
        fs::write(contracts.join("Broken.json"), "{ not json").unwrap();

        let mut tasks = ArtifactTasks::default();
        let err = maybe_register_auxiliary_tasks(dir.path(), &mut tasks).unwrap_err();
        assert!(matches!(err, StartupError::MalformedArtifact { .. }));
    }
}
