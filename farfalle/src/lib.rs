//! A Farfalle-style authenticated-encryption construction over finite
//! fields.
//!
//! A short master key and a public nonce are expanded into per-block mask
//! material that encrypts a sequence of field-element blocks and binds them
//! into a single authentication tag. The throughput-defining asymmetry of
//! the design: one expensive many-round permutation call bootstraps a
//! session, after which each block costs only a cheap rolling step plus one
//! few-round permutation call.
//!
//! The per-round mixing formula is an injected [`MixingLayer`]
//! capability, so cipher variants and new field families plug in without
//! touching the orchestration here.
//!
//! Nonce uniqueness per key is a caller-level protocol precondition; it is
//! not detected or enforced by this crate.
//!
//! [`MixingLayer`]: f4_symmetric::MixingLayer

#![no_std]

extern crate alloc;

mod error;
mod farfalle;
mod iterated;
mod key_schedule;
mod mixing;
mod rolling;
mod round_constants;

pub use error::*;
pub use farfalle::*;
pub use iterated::*;
pub use key_schedule::*;
pub use mixing::*;
pub use rolling::*;
pub use round_constants::*;

/// Width of every permutation state, fixed by the round-constant blocking
/// of four constants per round.
pub const STATE_WIDTH: usize = 4;
