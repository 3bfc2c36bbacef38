// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::io;

use scaffold_tools::ops;

use crate::{common_args::ProjectArgs, error::ScaffoldResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    project: ProjectArgs,
}

pub fn exec(args: Args) -> ScaffoldResult {
    let startup = args.project.startup()?;
    let config = args.project.configure(&startup)?;
    ops::print_networks(&config, &mut io::stdout().lock())?;
    Ok(())
}
