#![cfg_attr(not(feature = "std"), no_std)]

//! # Encrypted sketches
//!
//! A [sketch](./src/sketch.rs) is a list of registers, each with an index and a fixed number of counters. The
//! [encrypter](./src/encrypter.rs) turns it into a flat byte string of Elgamal ciphertexts under another party's
//! public key: for every register, in order, the encryption of `index * G` followed by the encryption of
//! `min(value, max_counter_value) * G` for each value, in config order. Every ciphertext is the pair `(u, e)` of
//! [SEC1 compressed points](../utils/src/ec.rs) so on P-256 it is 66 bytes and the output is
//! `registers * (1 + values per register) * 66` bytes with no other framing.
//!
//! Since counters are encoded in the exponent, adding ciphertexts adds counters which lets later stages aggregate
//! encrypted registers. The holder of the secret key can [decrypt](./src/decrypter.rs) a sketch and [decode](./src/decoder.rs)
//! counters by lookup as long as they stay within `max_counter_value`.

extern crate alloc;

pub mod ciphertext;
pub mod decoder;
pub mod decrypter;
pub mod encoding;
pub mod encrypter;
pub mod error;
pub mod sketch;

pub use ciphertext::{CiphertextPair, EncryptedRegister, EncryptedSketch, PublicKeyBytes};
pub use decoder::CounterDecoder;
pub use decrypter::{DecryptedRegister, SketchDecrypter};
pub use encoding::{clamp_counter, encode_counter};
pub use encrypter::{create_with_public_key, SketchEncrypter};
pub use sketch::{Aggregator, Register, Sketch, SketchConfig, ValueSpec};

pub type P256SketchEncrypter = SketchEncrypter<ark_secp256r1::Config>;
pub type P256SketchDecrypter = SketchDecrypter<ark_secp256r1::Config>;
