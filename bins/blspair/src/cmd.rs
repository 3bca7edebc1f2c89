//! Subcommands of the `blspair` binary.
pub mod check;
pub mod decode;
pub mod vector;

use alloy_primitives::hex;
use blspair::PairingError;
use clap::{Args, Parser};
use std::{borrow::Cow, fs, io::Error as IoError, path::PathBuf};

/// `blspair` subcommands.
#[derive(Parser, Debug)]
#[command(infer_subcommands = true)]
pub enum MainCmd {
    /// Run the pairing check precompile over an input
    Check(check::Cmd),
    /// Decode and validate an input, printing the coordinates of every pair
    Decode(decode::Cmd),
    /// Build an input from multiples of the G1 and G2 generators
    Vector(vector::Cmd),
}

/// Errors returned by the subcommands.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("The specified path does not exist")]
    PathNotExists,
    #[error("No input given")]
    MissingInput,
    #[error("Invalid hex input")]
    InvalidHex,
    #[error("--g1 lists {g1} scalars but --g2 lists {g2}")]
    ScalarCountMismatch { g1: usize, g2: usize },
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Pairing(#[from] PairingError),
}

impl MainCmd {
    /// Runs the selected subcommand.
    pub fn run(&self) -> Result<(), Error> {
        match self {
            Self::Check(cmd) => cmd.run(),
            Self::Decode(cmd) => cmd.run(),
            Self::Vector(cmd) => cmd.run(),
        }
    }
}

/// Pairing check input given either inline or through a file.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Hex-encoded pairing check input
    #[arg(required_unless_present = "path")]
    input: Option<String>,
    /// Path to a file containing the hex-encoded input
    ///
    /// Overrides the positional `input` argument.
    #[arg(long)]
    path: Option<PathBuf>,
}

impl InputArgs {
    /// Reads and hex decodes the input. A `0x` prefix and surrounding
    /// whitespace are accepted.
    pub fn read(&self) -> Result<Vec<u8>, Error> {
        let input: Cow<'_, str> = if let Some(path) = &self.path {
            if !path.exists() {
                return Err(Error::PathNotExists);
            }
            fs::read_to_string(path)?.into()
        } else if let Some(input) = &self.input {
            input.as_str().into()
        } else {
            return Err(Error::MissingInput);
        };

        hex::decode(input.trim().trim_start_matches("0x")).map_err(|_| Error::InvalidHex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subcommands() {
        let cmd = MainCmd::try_parse_from(["blspair", "check", "0x00", "--gas-limit", "10"]);
        assert!(matches!(cmd, Ok(MainCmd::Check(_))));

        let cmd = MainCmd::try_parse_from(["blspair", "vector", "--g1", "2,6", "--g2", "3,-1"]);
        assert!(matches!(cmd, Ok(MainCmd::Vector(_))));

        assert!(MainCmd::try_parse_from(["blspair", "decode"]).is_err());
    }

    #[test]
    fn reads_inline_hex() {
        let args = InputArgs {
            input: Some(" 0x0102ff\n".to_string()),
            path: None,
        };
        assert_eq!(args.read().unwrap(), vec![1, 2, 0xff]);

        let args = InputArgs {
            input: Some("zz".to_string()),
            path: None,
        };
        assert!(matches!(args.read(), Err(Error::InvalidHex)));
    }

    #[test]
    fn missing_path_is_reported() {
        let args = InputArgs {
            input: None,
            path: Some(PathBuf::from("/nonexistent/blspair/input.hex")),
        };
        assert!(matches!(args.read(), Err(Error::PathNotExists)));
    }
}
