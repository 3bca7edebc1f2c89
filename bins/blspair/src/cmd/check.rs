use super::{Error, InputArgs};
use alloy_primitives::hex;
use blspair::bls12_381::pairing::PRECOMPILE;
use clap::Parser;

/// Runs the pairing check precompile and prints its output and gas usage.
#[derive(Parser, Debug)]
pub struct Cmd {
    #[command(flatten)]
    input: InputArgs,
    /// Gas limit
    #[arg(long, default_value_t = u64::MAX)]
    gas_limit: u64,
}

impl Cmd {
    /// Runs the check command.
    pub fn run(&self) -> Result<(), Error> {
        let input = self.input.read()?;
        let precompile = *PRECOMPILE.precompile();

        let output = precompile(&input, self.gas_limit)?;
        println!("precompile: {}", PRECOMPILE.address());
        println!("gas used: {}", output.gas_used);
        println!("output: {}", hex::encode_prefixed(&output.bytes));
        Ok(())
    }
}
