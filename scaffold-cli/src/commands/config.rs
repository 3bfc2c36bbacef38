// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use scaffold_tools::ops;

use crate::{
    common_args::{OutputArgs, ProjectArgs},
    error::ScaffoldResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    output: OutputArgs,
    #[command(flatten)]
    project: ProjectArgs,
}

pub fn exec(args: Args) -> ScaffoldResult {
    let startup = args.project.startup()?;
    let config = args.project.configure(&startup)?;
    ops::print_config(&config, args.output.output, args.output.reveal_secrets)?;
    Ok(())
}
