// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use scaffold_tools::ops;

use crate::{
    common_args::ProjectArgs,
    error::{ScaffoldError, ScaffoldResult},
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Exit with an error when anything needs review.
    #[arg(long)]
    strict: bool,

    #[command(flatten)]
    project: ProjectArgs,
}

pub fn exec(args: Args) -> ScaffoldResult {
    let startup = args.project.startup()?;
    let config = args.project.configure(&startup)?;
    let findings = ops::check_config(&config);
    if args.strict && !findings.is_empty() {
        return Err(ScaffoldError::findings(findings.len()));
    }
    Ok(())
}
