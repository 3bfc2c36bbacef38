// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::core::{
    config::ToolConfiguration,
    review::{review, Finding},
};

/// Review a configuration and log every finding.
pub fn check_config(config: &ToolConfiguration) -> Vec<Finding> {
    let findings = review(config);
    if findings.is_empty() {
        info!(@mint, "configuration for {} looks good", config.default_network);
    }
    for finding in &findings {
        warn!(@yellow, "{}", finding);
    }
    findings
}
