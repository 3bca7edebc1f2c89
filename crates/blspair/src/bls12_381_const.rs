//! Constants of the [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537) pairing
//! check wire format and gas schedule.
use alloy_primitives::{address, Address};

/// Address of the `BLS12_PAIRING_CHECK` precompile.
pub const PAIRING_ADDRESS: Address = address!("0x000000000000000000000000000000000000000f");
/// Per pair part of the pairing gas cost.
pub const PAIRING_MULTIPLIER_BASE: u64 = 32600;
/// Constant part of the pairing gas cost.
pub const PAIRING_OFFSET_BASE: u64 = 37700;
/// Length of one (G1, G2) pair in the pairing input.
pub const PAIRING_INPUT_LENGTH: usize = PADDED_G1_LENGTH + PADDED_G2_LENGTH;
/// Length of the pairing output.
pub const PAIRING_OUTPUT_LENGTH: usize = 32;

/// Finite field element input length.
pub const FP_LENGTH: usize = 48;
/// Finite field element padded input length.
pub const PADDED_FP_LENGTH: usize = 64;
/// Quadratic extension of finite field element padded input length.
pub const PADDED_FP2_LENGTH: usize = 2 * PADDED_FP_LENGTH;
/// Input elements padding length.
pub const FP_PAD_BY: usize = PADDED_FP_LENGTH - FP_LENGTH;
/// Padded G1 point length.
pub const PADDED_G1_LENGTH: usize = 2 * PADDED_FP_LENGTH;
/// Padded G2 point length.
pub const PADDED_G2_LENGTH: usize = 2 * PADDED_FP2_LENGTH;
/// Scalar length used by the scalar multiplication helpers.
pub const SCALAR_LENGTH: usize = 32;

// Big-endian non-Montgomery form.
/// Base field modulus `p`.
pub const MODULUS_REPR: [u8; FP_LENGTH] = [
    0x1a, 0x01, 0x11, 0xea, 0x39, 0x7f, 0xe6, 0x9a, 0x4b, 0x1b, 0xa7, 0xb6, 0x43, 0x4b, 0xac, 0xd7,
    0x64, 0x77, 0x4b, 0x84, 0xf3, 0x85, 0x12, 0xbf, 0x67, 0x30, 0xd2, 0xa0, 0xf6, 0xb0, 0xf6, 0x24,
    0x1e, 0xab, 0xff, 0xfe, 0xb1, 0x53, 0xff, 0xff, 0xb9, 0xfe, 0xff, 0xff, 0xff, 0xff, 0xaa, 0xab,
];

/// Order `r` of the prime order subgroups, big-endian.
pub const SUBGROUP_ORDER_REPR: [u8; SCALAR_LENGTH] = [
    0x73, 0xed, 0xa7, 0x53, 0x29, 0x9d, 0x7d, 0x48, 0x33, 0x39, 0xd8, 0x08, 0x09, 0xa1, 0xd8, 0x05,
    0x53, 0xbd, 0xa4, 0x02, 0xff, 0xfe, 0x5b, 0xfe, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01,
];
