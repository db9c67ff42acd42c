#![cfg_attr(not(feature = "std"), no_std)]

//! # Uniform pseudorandom generator
//!
//! A keyed, deterministic byte stream. Parties that share a `(key, iv)` seed derive identical bytes,
//! e.g. shared blinding factors, by requesting the same sizes in the same order. The stream can't be
//! rewound, create a new generator from the same seed to start over.
//!
//! The only implementation is [AES-256 in counter mode](./src/aes_ctr_prng.rs).

extern crate alloc;

pub mod aes_ctr_prng;
pub mod error;

pub use aes_ctr_prng::{AesCtrPrng, AES_256_IV_SIZE, AES_256_KEY_SIZE};

use crate::error::PrngError;
use ark_std::vec::Vec;

pub trait UniformPseudorandomGenerator {
    /// Returns the next `num_bytes` bytes of the stream. Fails if `num_bytes` is 0.
    fn pseudorandom_bytes(&mut self, num_bytes: usize) -> Result<Vec<u8>, PrngError>;
}
