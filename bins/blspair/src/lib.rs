//! Command line front end for the `blspair` crate.
//!
//! Every subcommand reads or writes the EIP-2537 pairing check wire format as
//! hex. Set `RUST_LOG=debug` to see why an input is rejected.
pub mod cmd;
