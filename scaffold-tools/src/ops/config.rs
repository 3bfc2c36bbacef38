// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{io::Write, path::PathBuf};

use eyre::{Result, WrapErr};

use crate::{core::config::ToolConfiguration, utils::sys};

/// Write the configuration as pretty JSON to `file`, or stdout.
///
/// Secrets are redacted unless `reveal_secrets` is set.
pub fn print_config(
    config: &ToolConfiguration,
    file: Option<PathBuf>,
    reveal_secrets: bool,
) -> Result<()> {
    let json = if reveal_secrets {
        serde_json::to_string_pretty(config)?
    } else {
        serde_json::to_string_pretty(&config.redacted())?
    };
    let mut out = sys::file_or_stdout(file).wrap_err("failed to open output")?;
    writeln!(out, "{json}")?;
    Ok(())
}
