//! Curve arithmetic consumed by the pairing pipeline.
//!
//! The codecs and the pairing checker only talk to the curve through
//! [`Bls12381Backend`], so any conforming pairing library can be plugged in.
use crate::bls12_381_const::{FP_LENGTH, SCALAR_LENGTH};
use crate::PairingError;
use core::fmt::Debug;

/// BLS12-381 arithmetic capability.
///
/// Implementors are zero sized markers, all operations are associated functions.
pub trait Bls12381Backend {
    /// Base field element.
    type Fp: Copy + Eq + Debug + Send + Sync;
    /// Affine point on the G1 curve, including the point at infinity.
    type G1: Copy + Eq + Debug + Send + Sync;
    /// Affine point on the G2 curve, including the point at infinity.
    type G2: Copy + Eq + Debug + Send + Sync;

    /// Parses a 48 byte big-endian field element. Returns `None` if the value
    /// is not strictly below the modulus.
    fn fp_from_bendian(input: &[u8; FP_LENGTH]) -> Option<Self::Fp>;

    /// Serializes a field element into its 48 byte big-endian canonical form.
    fn fp_to_bendian(fp: &Self::Fp) -> [u8; FP_LENGTH];

    /// G1 point at infinity.
    fn g1_identity() -> Self::G1;

    /// Builds a G1 point from affine coordinates without any validation.
    fn g1_from_xy_unchecked(x: Self::Fp, y: Self::Fp) -> Self::G1;

    /// Affine coordinates of a G1 point, `None` for the point at infinity.
    fn g1_xy(p: &Self::G1) -> Option<(Self::Fp, Self::Fp)>;

    /// `y^2 = x^3 + 4` check.
    fn g1_is_on_curve(p: &Self::G1) -> bool;

    /// Prime order subgroup check, assuming the point is on the curve.
    fn g1_is_in_subgroup(p: &Self::G1) -> bool;

    /// G2 point at infinity.
    fn g2_identity() -> Self::G2;

    /// Builds a G2 point from `[c0, c1]` coordinates without any validation.
    fn g2_from_xy_unchecked(x: [Self::Fp; 2], y: [Self::Fp; 2]) -> Self::G2;

    /// Affine `[c0, c1]` coordinates of a G2 point, `None` for the point at infinity.
    fn g2_xy(p: &Self::G2) -> Option<([Self::Fp; 2], [Self::Fp; 2])>;

    /// `y^2 = x^3 + 4(1 + i)` check.
    fn g2_is_on_curve(p: &Self::G2) -> bool;

    /// Prime order subgroup check, assuming the point is on the curve.
    fn g2_is_in_subgroup(p: &Self::G2) -> bool;

    /// Returns whether the product of the pairings of all pairs is the
    /// identity of the target group.
    ///
    /// Callers never pass an empty slice nor points at infinity.
    fn multi_pairing_check(pairs: &[(Self::G1, Self::G2)]) -> Result<bool, PairingError>;

    /// Fixed generator of G1.
    fn g1_generator() -> Self::G1;

    /// Fixed generator of G2.
    fn g2_generator() -> Self::G2;

    /// Multiplies a G1 point by a big-endian scalar. The scalar is reduced
    /// modulo the subgroup order.
    ///
    /// Only used to build inputs, never while verifying one.
    fn g1_mul(p: &Self::G1, scalar: &[u8; SCALAR_LENGTH]) -> Self::G1;

    /// Multiplies a G2 point by a big-endian scalar. The scalar is reduced
    /// modulo the subgroup order.
    ///
    /// Only used to build inputs, never while verifying one.
    fn g2_mul(p: &Self::G2, scalar: &[u8; SCALAR_LENGTH]) -> Self::G2;
}

cfg_if::cfg_if! {
    if #[cfg(feature = "blst")] {
        /// Backend used by [`pairing_check`](crate::pairing_check) and the precompile.
        pub type DefaultBackend = super::blst::BlstBackend;
    } else {
        /// Backend used by [`pairing_check`](crate::pairing_check) and the precompile.
        pub type DefaultBackend = super::arkworks::ArkworksBackend;
    }
}

/// Encodes a small integer as a 32 byte big-endian scalar.
pub fn scalar_from_u64(value: u64) -> [u8; SCALAR_LENGTH] {
    let mut out = [0u8; SCALAR_LENGTH];
    out[SCALAR_LENGTH - 8..].copy_from_slice(&value.to_be_bytes());
    out
}
