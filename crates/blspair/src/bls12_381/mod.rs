//! BLS12-381 pairing check added in [`EIP-2537`](https://eips.ethereum.org/EIPS/eip-2537).
//!
//! Data flows through the modules in this order: [`pairing_input`] splits the
//! buffer into pairs, [`utils`] decodes field elements, [`g1`] and [`g2`]
//! decode points, [`subgroup`] validates them and [`pairing`] evaluates the
//! product of pairings.
pub mod arkworks;
pub mod backend;
#[cfg(feature = "blst")]
pub mod blst;
pub mod g1;
pub mod g2;
pub mod pairing;
pub mod pairing_input;
pub mod subgroup;
pub mod utils;

pub use arkworks::ArkworksBackend;
pub use backend::{scalar_from_u64, Bls12381Backend, DefaultBackend};
#[cfg(feature = "blst")]
pub use self::blst::BlstBackend;
pub use pairing_input::{generator_pair, PairingInput, PairingPair};
