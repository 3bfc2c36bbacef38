// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Best-effort loading of the secret files kept next to the project.
//!
//! A missing secret is never an error: the loaders fall back to an empty string. Operators are
//! only warned when the selected network is a remote one, where the secret actually matters.

use std::path::Path;

use crate::{core::network, utils};

/// Secret files read at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecretFile {
    /// Seed phrase of the deploy account.
    Mnemonic,
    /// API key used for explorer verification.
    Etherscan,
}

impl SecretFile {
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Mnemonic => "mnemonic.txt",
            Self::Etherscan => "etherscan.txt",
        }
    }

    /// Operator-facing message shown when the file cannot be read.
    pub fn missing_message(&self) -> String {
        match self {
            Self::Mnemonic => format!(
                "WARNING: no mnemonic file found for the deploy account. \
                Write a seed phrase to {} before deploying.",
                self.path()
            ),
            Self::Etherscan => format!(
                "WARNING: no etherscan file found. Put an explorer API key in {} to verify contracts.",
                self.path()
            ),
        }
    }

    /// Load this secret from the project root, warning through the logger.
    pub fn load(&self, root: impl AsRef<Path>, network: &str) -> String {
        self.load_with(root, network, |msg| warn!(@yellow, "{}", msg))
    }

    /// Load this secret from the project root, reporting a missing file to `warn`.
    pub fn load_with(
        &self,
        root: impl AsRef<Path>,
        network: &str,
        warn: impl FnOnce(&str),
    ) -> String {
        let path = root.as_ref().join(self.path());
        load_secret_with(&path, network, || warn(self.missing_message().as_str()))
    }
}

/// Read the trimmed contents of `path`, or an empty string if it cannot be read.
///
/// When the file is unusable and `network` is not the local node, a warning is logged.
pub fn load_secret(path: impl AsRef<Path>, network: &str) -> String {
    let path = path.as_ref();
    load_secret_with(path, network, || {
        warn!(@yellow, "WARNING: no secret found at {}", path.display())
    })
}

fn load_secret_with(path: &Path, network: &str, on_missing: impl FnOnce()) -> String {
    match utils::read_trimmed(path) {
        Ok(secret) => {
            debug!(@grey, "loaded secret from {}", path.display());
            secret
        }
        Err(err) => {
            debug!(@grey, "could not read {}: {}", path.display(), err);
            if !network::is_local(network) {
                on_missing();
            }
            String::new()
        }
    }
}

/// Both secrets the configuration needs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Secrets {
    pub mnemonic: String,
    pub etherscan: String,
}

impl Secrets {
    /// Read both secret files, one after the other.
    pub fn load(root: impl AsRef<Path>, network: &str) -> Self {
        let root = root.as_ref();
        Self {
            mnemonic: SecretFile::Mnemonic.load(root, network),
            etherscan: SecretFile::Etherscan.load(root, network),
        }
    }
}
