// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::ScaffoldResult;

mod check;
mod config;
mod networks;
mod tasks;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Review the configuration for hazards
    #[clap(visible_alias = "c")]
    Check(check::Args),
    /// Print the assembled configuration as JSON
    Config(config::Args),
    /// List configured networks and their endpoints
    #[clap(visible_alias = "n")]
    Networks(networks::Args),
    /// List setup tasks registered from compiled artifacts
    #[clap(visible_alias = "t")]
    Tasks(tasks::Args),
}

pub fn exec(cmd: Command) -> ScaffoldResult {
    match cmd {
        Command::Check(args) => check::exec(args),
        Command::Config(args) => config::exec(args),
        Command::Networks(args) => networks::exec(args),
        Command::Tasks(args) => tasks::exec(args),
    }
}
