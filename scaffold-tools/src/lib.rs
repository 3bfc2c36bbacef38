// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for assembling the toolchain configuration of a smart-contract project.
//!
//! Startup happens in two phases. The first phase ([`core::startup::Startup::configure`]) reads
//! the optional secret files and produces an immutable [`core::config::ToolConfiguration`]
//! without touching any build output. The second phase
//! ([`core::startup::Startup::maybe_register_auxiliary_tasks`]) only runs auxiliary setup when
//! compiled artifacts are present.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod ops;

pub mod utils;

pub use error::{Error, Result};
