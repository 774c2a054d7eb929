//! Trait seams for symmetric permutation-based primitives.

#![no_std]

mod mixer;
mod permutation;

pub use mixer::*;
pub use permutation::*;
