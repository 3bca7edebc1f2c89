// This module contains a safe wrapper around the blst library.

use super::backend::Bls12381Backend;
use super::utils::is_canonical;
use crate::bls12_381_const::{FP_LENGTH, SCALAR_LENGTH};
use crate::PairingError;

use blst::{
    blst_bendian_from_fp, blst_final_exp, blst_fp, blst_fp12, blst_fp12_is_one, blst_fp12_mul,
    blst_fp2, blst_fp_from_bendian, blst_miller_loop, blst_p1, blst_p1_affine,
    blst_p1_affine_generator, blst_p1_affine_in_g1, blst_p1_affine_is_inf,
    blst_p1_affine_on_curve, blst_p1_from_affine, blst_p1_mult, blst_p1_to_affine, blst_p2,
    blst_p2_affine, blst_p2_affine_generator, blst_p2_affine_in_g2, blst_p2_affine_is_inf,
    blst_p2_affine_on_curve, blst_p2_from_affine, blst_p2_mult, blst_p2_to_affine, blst_scalar,
    blst_scalar_from_be_bytes,
};

/// [`Bls12381Backend`] implemented with the `blst` C library.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlstBackend;

fn p1_to_affine(p: &blst_p1) -> blst_p1_affine {
    let mut p_affine = blst_p1_affine::default();
    // SAFETY: both inputs are valid blst types
    unsafe { blst_p1_to_affine(&mut p_affine, p) };
    p_affine
}

fn p1_from_affine(p_affine: &blst_p1_affine) -> blst_p1 {
    let mut p = blst_p1::default();
    // SAFETY: both inputs are valid blst types
    unsafe { blst_p1_from_affine(&mut p, p_affine) };
    p
}

fn p2_to_affine(p: &blst_p2) -> blst_p2_affine {
    let mut p_affine = blst_p2_affine::default();
    // SAFETY: both inputs are valid blst types
    unsafe { blst_p2_to_affine(&mut p_affine, p) };
    p_affine
}

fn p2_from_affine(p_affine: &blst_p2_affine) -> blst_p2 {
    let mut p = blst_p2::default();
    // SAFETY: both inputs are valid blst types
    unsafe { blst_p2_from_affine(&mut p, p_affine) };
    p
}

/// Reduces a big-endian scalar modulo the subgroup order.
fn scalar_from_bendian(input: &[u8; SCALAR_LENGTH]) -> blst_scalar {
    let mut out = blst_scalar::default();
    // SAFETY: input length is fixed, out is a blst value.
    // The return value only reports whether the input was already reduced.
    unsafe { blst_scalar_from_be_bytes(&mut out, input.as_ptr(), SCALAR_LENGTH) };
    out
}

/// Computes a single miller loop for a given G1, G2 pair
fn compute_miller_loop(g1: &blst_p1_affine, g2: &blst_p2_affine) -> blst_fp12 {
    let mut result = blst_fp12::default();

    // SAFETY: All arguments are valid blst types
    unsafe { blst_miller_loop(&mut result, g2, g1) }

    result
}

/// multiply_fp12 multiplies two fp12 elements
fn multiply_fp12(a: &blst_fp12, b: &blst_fp12) -> blst_fp12 {
    let mut result = blst_fp12::default();

    // SAFETY: All arguments are valid blst types
    unsafe { blst_fp12_mul(&mut result, a, b) }

    result
}

/// final_exp computes the final exponentiation on an fp12 element
fn final_exp(f: &blst_fp12) -> blst_fp12 {
    let mut result = blst_fp12::default();

    // SAFETY: All arguments are valid blst types
    unsafe { blst_final_exp(&mut result, f) }

    result
}

/// is_fp12_one checks if an fp12 element equals
/// multiplicative identity element, one
fn is_fp12_one(f: &blst_fp12) -> bool {
    // SAFETY: argument is a valid blst type
    unsafe { blst_fp12_is_one(f) }
}

impl Bls12381Backend for BlstBackend {
    type Fp = blst_fp;
    type G1 = blst_p1_affine;
    type G2 = blst_p2_affine;

    fn fp_from_bendian(input: &[u8; FP_LENGTH]) -> Option<blst_fp> {
        // `blst_fp_from_bendian` silently reduces, the range check has to happen first.
        if !is_canonical(input) {
            return None;
        }
        let mut fp = blst_fp::default();
        // SAFETY: input has fixed length, and fp is a blst value.
        unsafe { blst_fp_from_bendian(&mut fp, input.as_ptr()) };
        Some(fp)
    }

    fn fp_to_bendian(fp: &blst_fp) -> [u8; FP_LENGTH] {
        let mut out = [0u8; FP_LENGTH];
        // SAFETY: out has fixed length, fp is a blst value.
        unsafe { blst_bendian_from_fp(out.as_mut_ptr(), fp) };
        out
    }

    fn g1_identity() -> blst_p1_affine {
        // blst represents the point at infinity as all zero coordinates.
        blst_p1_affine::default()
    }

    fn g1_from_xy_unchecked(x: blst_fp, y: blst_fp) -> blst_p1_affine {
        blst_p1_affine { x, y }
    }

    fn g1_xy(p: &blst_p1_affine) -> Option<(blst_fp, blst_fp)> {
        // SAFETY: p is a blst value.
        if unsafe { blst_p1_affine_is_inf(p) } {
            return None;
        }
        Some((p.x, p.y))
    }

    fn g1_is_on_curve(p: &blst_p1_affine) -> bool {
        // SAFETY: p is a blst value.
        unsafe { blst_p1_affine_on_curve(p) }
    }

    fn g1_is_in_subgroup(p: &blst_p1_affine) -> bool {
        // SAFETY: p is a blst value.
        unsafe { blst_p1_affine_in_g1(p) }
    }

    fn g2_identity() -> blst_p2_affine {
        blst_p2_affine::default()
    }

    fn g2_from_xy_unchecked(x: [blst_fp; 2], y: [blst_fp; 2]) -> blst_p2_affine {
        blst_p2_affine {
            x: blst_fp2 { fp: x },
            y: blst_fp2 { fp: y },
        }
    }

    fn g2_xy(p: &blst_p2_affine) -> Option<([blst_fp; 2], [blst_fp; 2])> {
        // SAFETY: p is a blst value.
        if unsafe { blst_p2_affine_is_inf(p) } {
            return None;
        }
        Some((p.x.fp, p.y.fp))
    }

    fn g2_is_on_curve(p: &blst_p2_affine) -> bool {
        // SAFETY: p is a blst value.
        unsafe { blst_p2_affine_on_curve(p) }
    }

    fn g2_is_in_subgroup(p: &blst_p2_affine) -> bool {
        // SAFETY: p is a blst value.
        unsafe { blst_p2_affine_in_g2(p) }
    }

    /// Accumulates the miller loops of all pairs and applies a single final
    /// exponentiation.
    fn multi_pairing_check(
        pairs: &[(blst_p1_affine, blst_p2_affine)],
    ) -> Result<bool, PairingError> {
        let Some(((first_g1, first_g2), rest)) = pairs.split_first() else {
            return Err(PairingError::PairingComputeError);
        };

        let mut acc = compute_miller_loop(first_g1, first_g2);
        for (g1, g2) in rest {
            let ml = compute_miller_loop(g1, g2);
            acc = multiply_fp12(&acc, &ml);
        }

        Ok(is_fp12_one(&final_exp(&acc)))
    }

    fn g1_generator() -> blst_p1_affine {
        // SAFETY: blst returns a pointer to a static value.
        unsafe { *blst_p1_affine_generator() }
    }

    fn g2_generator() -> blst_p2_affine {
        // SAFETY: blst returns a pointer to a static value.
        unsafe { *blst_p2_affine_generator() }
    }

    fn g1_mul(p: &blst_p1_affine, scalar: &[u8; SCALAR_LENGTH]) -> blst_p1_affine {
        let scalar = scalar_from_bendian(scalar);
        let p = p1_from_affine(p);
        let mut out = blst_p1::default();
        // SAFETY: scalar.b is 32 bytes long, the rest are blst values.
        unsafe { blst_p1_mult(&mut out, &p, scalar.b.as_ptr(), 8 * SCALAR_LENGTH) };
        p1_to_affine(&out)
    }

    fn g2_mul(p: &blst_p2_affine, scalar: &[u8; SCALAR_LENGTH]) -> blst_p2_affine {
        let scalar = scalar_from_bendian(scalar);
        let p = p2_from_affine(p);
        let mut out = blst_p2::default();
        // SAFETY: scalar.b is 32 bytes long, the rest are blst values.
        unsafe { blst_p2_mult(&mut out, &p, scalar.b.as_ptr(), 8 * SCALAR_LENGTH) };
        p2_to_affine(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bls12_381::arkworks::ArkworksBackend;
    use crate::bls12_381::backend::scalar_from_u64;
    use crate::bls12_381_const::MODULUS_REPR;

    #[test]
    fn modulus_is_rejected() {
        assert_eq!(BlstBackend::fp_from_bendian(&MODULUS_REPR), None);
    }

    #[test]
    fn generator_multiples_match_arkworks() {
        for k in [1u64, 2, 3, 6] {
            let scalar = scalar_from_u64(k);
            let blst = BlstBackend::g1_mul(&BlstBackend::g1_generator(), &scalar);
            let ark = ArkworksBackend::g1_mul(&ArkworksBackend::g1_generator(), &scalar);
            let (bx, by) = BlstBackend::g1_xy(&blst).unwrap();
            let (ax, ay) = ArkworksBackend::g1_xy(&ark).unwrap();
            assert_eq!(BlstBackend::fp_to_bendian(&bx), ArkworksBackend::fp_to_bendian(&ax));
            assert_eq!(BlstBackend::fp_to_bendian(&by), ArkworksBackend::fp_to_bendian(&ay));
        }
    }
}
