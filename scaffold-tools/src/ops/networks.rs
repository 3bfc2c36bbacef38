// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::io::Write;

use eyre::Result;

use crate::{core::config::ToolConfiguration, utils::color::Color};

/// Print each network with its endpoint, marking the selected one.
pub fn print_networks(config: &ToolConfiguration, out: &mut impl Write) -> Result<()> {
    let width = config.networks.keys().map(String::len).max().unwrap_or(0);
    for (name, network) in &config.networks {
        let line = format!("{name:width$}  {}", network.url);
        if *name == config.default_network {
            writeln!(out, "{} {}", "*".mint(), line.mint())?;
        } else {
            writeln!(out, "  {line}")?;
        }
    }
    Ok(())
}
