//! Finite-field element types for the Farfalle4 construction.
//!
//! Two field families are provided: [`Gfp128`], a prime field with a 128-bit
//! modulus, and [`Gf2_128`], the binary extension field
//! `GF(2)[x]/(x^128 + x^7 + x^2 + x + 1)`. Both implement the [`Field`]
//! trait, which is the complete operation set the construction layer relies
//! on; new field families plug in by implementing it.

#![no_std]

extern crate alloc;

mod field;
mod gf2_128;
mod gfp128;

pub use field::*;
pub use gf2_128::*;
pub use gfp128::*;
