// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use scaffold_tools::ops;

use crate::{common_args::ProjectArgs, error::ScaffoldResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Print the registry as JSON lines instead of a table.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    project: ProjectArgs,
}

pub fn exec(args: Args) -> ScaffoldResult {
    let startup = args.project.startup()?;
    let config = args.project.configure(&startup)?;
    let registry = ops::load_tasks(&startup, &config)?;
    for task in registry.iter() {
        if args.json {
            let line = serde_json::json!({
                "name": task.name,
                "contract": task.contract,
                "sourceName": task.source_name,
                "abiEntries": task.abi_entries,
            });
            println!("{line}");
        } else {
            println!("{}  {} ({} ABI entries)", task.name, task.source_name, task.abi_entries);
        }
    }
    Ok(())
}
