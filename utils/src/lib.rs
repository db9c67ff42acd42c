#![cfg_attr(not(feature = "std"), no_std)]

//! Common code for the Any Sketch crates
//!
//! 1. [SEC1 compressed encoding](./src/ec.rs) of short Weierstrass curve points and the named curves supported
//! 2. [Commutative Elgamal](./src/elgamal.rs) encryption of group elements, additively homomorphic in the exponent
//! when messages are encoded as multiples of the generator

extern crate alloc;

#[macro_use]
pub mod macros;
pub mod ec;
pub mod elgamal;
pub mod error;
