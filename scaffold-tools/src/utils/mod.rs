// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.
//!
//! None of these are specific to the toolchain configuration, but [`scaffold-tools`](crate)
//! uses them to report on and print it.

use std::{fs, io, path::Path};

pub mod color;
pub mod sys;

/// Replacement text for secrets that are not meant to be printed.
pub const REDACTED: &str = "<redacted>";

/// Hide a secret value, keeping empty values empty so "no secret" stays visible.
pub fn redact(secret: &str) -> String {
    if secret.is_empty() {
        String::new()
    } else {
        REDACTED.to_string()
    }
}

/// Read a text file and trim surrounding whitespace.
pub fn read_trimmed(path: impl AsRef<Path>) -> io::Result<String> {
    let contents = fs::read_to_string(path)?;
    Ok(contents.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_keeps_empty_values() {
        assert_eq!(redact(""), "");
        assert_eq!(redact("abandon abandon about"), REDACTED);
    }

    #[test]
    fn read_trimmed_strips_newlines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secret.txt");
        fs::write(&path, "\n  key value \r\n").unwrap();
        assert_eq!(read_trimmed(&path).unwrap(), "key value");
    }
}
