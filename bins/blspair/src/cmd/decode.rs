use super::{Error, InputArgs};
use alloy_primitives::hex;
use blspair::{
    bls12_381::{g1::encode_g1, g2::encode_g2},
    bls12_381_const::{FP_PAD_BY, PADDED_FP_LENGTH},
    DefaultBackend, PairingInput,
};
use clap::Parser;

/// Decodes and validates an input without evaluating it, then prints the
/// unpadded coordinates of every pair.
#[derive(Parser, Debug)]
pub struct Cmd {
    #[command(flatten)]
    input: InputArgs,
}

impl Cmd {
    /// Runs the decode command.
    pub fn run(&self) -> Result<(), Error> {
        let bytes = self.input.read()?;
        let input = PairingInput::<DefaultBackend>::parse(&bytes)?;

        println!("pairs: {}", input.len());
        for (index, (g1, g2)) in input.pairs().iter().enumerate() {
            println!("pair {index}:");
            print_point("g1", &["x", "y"], &encode_g1::<DefaultBackend>(g1));
            print_point(
                "g2",
                &["x.c0", "x.c1", "y.c0", "y.c1"],
                &encode_g2::<DefaultBackend>(g2),
            );
        }
        Ok(())
    }
}

fn print_point(group: &str, coordinates: &[&str], encoded: &[u8]) {
    if encoded.iter().all(|byte| *byte == 0) {
        println!("  {group}: infinity");
        return;
    }
    for (name, slot) in coordinates
        .iter()
        .zip(encoded.chunks_exact(PADDED_FP_LENGTH))
    {
        println!("  {group}.{name}: {}", hex::encode_prefixed(&slot[FP_PAD_BY..]));
    }
}
