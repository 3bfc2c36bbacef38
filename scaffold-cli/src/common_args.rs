// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use scaffold_tools::core::{
    config::ToolConfiguration, manifest::ManifestError, network::check_network, startup::Startup,
};

use crate::error::ScaffoldError;

#[derive(Debug, clap::Args)]
pub struct ProjectArgs {
    /// Project root holding the secret files and Scaffold.toml
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
    /// Network to configure for (defaults to Scaffold.toml, then localhost)
    #[arg(short, long)]
    pub network: Option<String>,
    /// Credential segment of templated endpoint URLs (defaults to Scaffold.toml)
    #[arg(long)]
    pub endpoint_id: Option<String>,
}

impl ProjectArgs {
    pub fn startup(&self) -> Result<Startup, ManifestError> {
        Startup::new(&self.root)
    }

    /// Run the first startup phase.
    pub fn configure(&self, startup: &Startup) -> Result<ToolConfiguration, ScaffoldError> {
        if let Some(network) = &self.network {
            check_network(network)?;
        }
        Ok(startup.configure(self.network.as_deref(), self.endpoint_id.as_deref()))
    }
}

#[derive(Debug, clap::Args)]
pub struct OutputArgs {
    /// The output file (defaults to stdout).
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Print mnemonic and API keys instead of redacting them.
    #[arg(long)]
    pub reveal_secrets: bool,
}
