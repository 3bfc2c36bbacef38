// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub use check::check_config;
pub use config::print_config;
pub use networks::print_networks;
pub use tasks::load_tasks;

mod check;
mod config;
mod networks;
mod tasks;
