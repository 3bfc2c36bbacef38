// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

pub type ScaffoldResult = Result<(), ScaffoldError>;

/// Exit code used when `check --strict` finds something to review.
const FINDINGS_EXIT_CODE: u8 = 2;

#[derive(Debug)]
pub struct ScaffoldError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl ScaffoldError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }

    pub fn findings(count: usize) -> Self {
        Self {
            error: eyre::eyre!("{count} finding(s) need review"),
            exit_code: ExitCode::from(FINDINGS_EXIT_CODE),
        }
    }
}

impl fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<eyre::Error> for ScaffoldError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<scaffold_tools::Error> for ScaffoldError {
    fn from(err: scaffold_tools::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<scaffold_tools::core::manifest::ManifestError> for ScaffoldError {
    fn from(err: scaffold_tools::core::manifest::ManifestError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<scaffold_tools::core::network::NetworkError> for ScaffoldError {
    fn from(err: scaffold_tools::core::network::NetworkError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}
