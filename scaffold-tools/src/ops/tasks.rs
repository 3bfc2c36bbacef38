// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{
    core::{
        config::ToolConfiguration,
        startup::{Startup, ARTIFACTS_DIR},
        tasks::{ArtifactTasks, TaskRegistry},
    },
    Result,
};

/// Run the second startup phase and return the registered tasks.
///
/// The registry is empty when the project has not been built yet.
pub fn load_tasks(startup: &Startup, config: &ToolConfiguration) -> Result<TaskRegistry> {
    let mut tasks = ArtifactTasks::new(config.abi_exporter.clone());
    if !startup.maybe_register_auxiliary_tasks(&mut tasks)? {
        info!(@grey, "no {} yet; compile the contracts to enable setup tasks", ARTIFACTS_DIR);
    }
    Ok(tasks.into_registry())
}
