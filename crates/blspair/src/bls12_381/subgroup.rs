//! Prime order subgroup validation.
//!
//! From EIP-2537: scalar multiplications, MSMs and pairings MUST perform a
//! subgroup check. On any input that fails the subgroup check, the precompile
//! MUST return an error.
//!
//! The full curve groups have a cofactor relative to the order `r` subgroup, so a
//! point that passed the curve equation may still carry a small order component.
//! The point at infinity is in every subgroup.
use super::backend::Bls12381Backend;
use crate::PairingError;

/// Checks that a G1 point known to be on the curve belongs to the order `r` subgroup.
pub fn check_g1_subgroup<B: Bls12381Backend>(point: &B::G1) -> Result<(), PairingError> {
    if B::g1_xy(point).is_none() || B::g1_is_in_subgroup(point) {
        return Ok(());
    }
    Err(PairingError::NotInSubgroup)
}

/// Checks that a G2 point known to be on the curve belongs to the order `r` subgroup.
pub fn check_g2_subgroup<B: Bls12381Backend>(point: &B::G2) -> Result<(), PairingError> {
    if B::g2_xy(point).is_none() || B::g2_is_in_subgroup(point) {
        return Ok(());
    }
    Err(PairingError::NotInSubgroup)
}
