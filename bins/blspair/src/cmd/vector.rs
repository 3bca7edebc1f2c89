use super::Error;
use alloy_primitives::{hex, U256};
use blspair::{
    bls12_381::generator_pair,
    bls12_381_const::{SCALAR_LENGTH, SUBGROUP_ORDER_REPR},
    evaluate, DefaultBackend, PairingInput,
};
use clap::Parser;

/// Builds a pairing check input from `(a_i * G1, b_i * G2)` pairs and prints
/// it as hex.
///
/// `--g1 2,6 --g2 3,-1` produces the two pair input `e(2 * G1, 3 * G2) * e(6 * G1, -G2)`.
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Comma separated scalars for the G1 generator, negative values are taken mod r
    #[arg(long, required = true, value_delimiter = ',', allow_negative_numbers = true)]
    g1: Vec<i64>,
    /// Comma separated scalars for the G2 generator, negative values are taken mod r
    #[arg(long, required = true, value_delimiter = ',', allow_negative_numbers = true)]
    g2: Vec<i64>,
    /// Also evaluate the pairing check over the built input
    #[arg(long)]
    check: bool,
}

impl Cmd {
    /// Runs the vector command.
    pub fn run(&self) -> Result<(), Error> {
        let input = self.build()?;
        println!("{}", hex::encode_prefixed(input.serialize()));
        if self.check {
            println!("result: {}", evaluate(&input)?);
        }
        Ok(())
    }

    fn build(&self) -> Result<PairingInput<DefaultBackend>, Error> {
        if self.g1.len() != self.g2.len() {
            return Err(Error::ScalarCountMismatch {
                g1: self.g1.len(),
                g2: self.g2.len(),
            });
        }
        let pairs = self
            .g1
            .iter()
            .zip(&self.g2)
            .map(|(a, b)| generator_pair::<DefaultBackend>(&signed_scalar(*a), &signed_scalar(*b)))
            .collect();
        Ok(PairingInput::new(pairs)?)
    }
}

/// Big-endian scalar for `value mod r`.
pub fn signed_scalar(value: i64) -> [u8; SCALAR_LENGTH] {
    let magnitude = U256::from(value.unsigned_abs());
    let scalar = if value < 0 {
        U256::from_be_bytes(SUBGROUP_ORDER_REPR) - magnitude
    } else {
        magnitude
    };
    scalar.to_be_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use blspair::pairing_check;

    fn cmd(g1: &[i64], g2: &[i64]) -> Cmd {
        Cmd {
            g1: g1.to_vec(),
            g2: g2.to_vec(),
            check: false,
        }
    }

    #[test]
    fn negative_scalars_wrap_around_the_group_order() {
        let mut expected = SUBGROUP_ORDER_REPR;
        expected[31] -= 1;
        assert_eq!(signed_scalar(-1), expected);
        assert_eq!(signed_scalar(0), [0u8; SCALAR_LENGTH]);
        assert_eq!(signed_scalar(7)[31], 7);
    }

    #[test]
    fn builds_a_passing_vector() {
        let input = cmd(&[2, 6], &[3, -1]).build().unwrap().serialize();
        assert_eq!(pairing_check(&input).unwrap()[31], 1);

        let input = cmd(&[2, 6], &[3, 1]).build().unwrap().serialize();
        assert_eq!(pairing_check(&input).unwrap()[31], 0);
    }

    #[test]
    fn rejects_mismatched_scalar_lists() {
        assert!(matches!(
            cmd(&[1, 2], &[1]).build(),
            Err(Error::ScalarCountMismatch { g1: 2, g2: 1 })
        ));
    }

    #[test]
    fn zero_scalars_build_identity_pairs() {
        let input = cmd(&[0], &[5]).build().unwrap();
        assert!(input.serialize()[..128].iter().all(|byte| *byte == 0));
        assert!(evaluate(&input).unwrap());
    }
}
