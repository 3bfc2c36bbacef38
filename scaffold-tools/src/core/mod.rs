// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub mod abi_export;
pub mod compiler;
pub mod config;
pub mod explorer;
pub mod manifest;
pub mod network;
pub mod review;
pub mod secret;
pub mod startup;
pub mod tasks;
pub mod typegen;
