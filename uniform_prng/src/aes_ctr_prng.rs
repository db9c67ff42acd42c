//! Pseudorandom generator producing the keystream of AES-256 in counter mode as specified in
//! [NIST SP 800-38A](https://nvlpubs.nist.gov/nistpubs/legacy/sp/nistspecialpublication800-38a.pdf).
//!
//! The IV is the first counter block. Counter blocks are big-endian 128-bit integers incremented by 1
//! per block, wrapping around at `2^128`, which is also what OpenSSL's `EVP_aes_256_ctr` does, so the
//! output matches encrypting zeroes with it.
//!
//! Like the PRNG in MP-SPDZ and SCALE-MAMBA, counter blocks are encrypted in batches of 8, i.e. 128
//! bytes of keystream are computed at once and handed out over as many requests as needed. Bytes are
//! never skipped at request or batch boundaries so the output of a sequence of requests is the same as
//! the output of a single request for their total size.

use crate::{error::PrngError, UniformPseudorandomGenerator};
use aes::{
    cipher::{
        generic_array::{
            typenum::{U16, U8},
            GenericArray,
        },
        BlockEncrypt, KeyInit,
    },
    Aes256,
};
use ark_std::{
    cmp::min,
    rand::{CryptoRng, Error, RngCore},
    vec,
    vec::Vec,
};
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use zeroize::{Zeroize, ZeroizeOnDrop};

pub const AES_256_KEY_SIZE: usize = 32;
pub const AES_256_IV_SIZE: usize = 16;

const AES_BLK_SIZE: usize = 16;
const PIPELINES_USIZE: usize = 8;
const PIPELINES_U128: u128 = 8;
const STATE_SIZE: usize = PIPELINES_USIZE * AES_BLK_SIZE;

type Block128 = GenericArray<u8, U16>;
type Block128x8 = GenericArray<Block128, U8>;

struct KeystreamState {
    /// Encryptions of the current batch of counter blocks
    blocks: Block128x8,
    /// Counter block at the start of the next batch
    next_counter: u128,
    /// Bytes of `blocks` already handed out
    used_bytes: usize,
}

impl KeystreamState {
    /// The state starts exhausted so that the first request encrypts the first batch
    fn new(initial_counter: u128) -> Self {
        Self {
            blocks: Block128x8::default(),
            next_counter: initial_counter,
            used_bytes: STATE_SIZE,
        }
    }

    /// Overwrites the blocks with the next batch of counters
    fn write_counters(&mut self) {
        let counter = self.next_counter;
        for (i, block) in self.blocks.iter_mut().enumerate() {
            BigEndian::write_u128(block, counter.wrapping_add(i as u128));
        }
        self.next_counter = counter.wrapping_add(PIPELINES_U128);
        self.used_bytes = 0;
    }

    /// Copies unused keystream into `dest`, at most up to the end of the current block. Returns the
    /// number of bytes copied.
    fn read_into(&mut self, dest: &mut [u8]) -> usize {
        let block = &self.blocks[self.used_bytes / AES_BLK_SIZE];
        let offset = self.used_bytes % AES_BLK_SIZE;
        let len = min(AES_BLK_SIZE - offset, dest.len());
        dest[..len].copy_from_slice(&block[offset..offset + len]);
        self.used_bytes += len;
        len
    }
}

impl Drop for KeystreamState {
    fn drop(&mut self) {
        for block in self.blocks.iter_mut() {
            block.as_mut_slice().zeroize();
        }
        self.next_counter.zeroize();
    }
}

impl ZeroizeOnDrop for KeystreamState {}

/// AES-256-CTR keystream generator. Every request advances the counter, so a generator must not be
/// shared between threads without ordering the requests.
pub struct AesCtrPrng {
    state: KeystreamState,
    cipher: Aes256,
}

impl AesCtrPrng {
    pub fn new(key: &[u8], iv: &[u8]) -> Result<Self, PrngError> {
        if key.len() != AES_256_KEY_SIZE {
            return Err(PrngError::InvalidKeySize(key.len(), AES_256_KEY_SIZE));
        }
        if iv.len() != AES_256_IV_SIZE {
            return Err(PrngError::InvalidIvSize(iv.len(), AES_256_IV_SIZE));
        }
        Ok(Self {
            state: KeystreamState::new(BigEndian::read_u128(iv)),
            cipher: Aes256::new(GenericArray::from_slice(key)),
        })
    }

    /// Encrypts the next batch of counter blocks in place, all 8 in one pipelined call
    fn next(&mut self) {
        self.state.write_counters();
        self.cipher.encrypt_blocks(&mut self.state.blocks);
    }

    /// Fills `dest` with the keystream continuing from where the last request stopped
    fn fill_from_keystream(&mut self, dest: &mut [u8]) {
        let mut dest_start = 0;
        while dest_start < dest.len() {
            if self.state.used_bytes == STATE_SIZE {
                self.next();
            }
            dest_start += self.state.read_into(&mut dest[dest_start..]);
        }
    }
}

impl UniformPseudorandomGenerator for AesCtrPrng {
    fn pseudorandom_bytes(&mut self, num_bytes: usize) -> Result<Vec<u8>, PrngError> {
        if num_bytes == 0 {
            return Err(PrngError::NonPositiveByteCount);
        }
        let mut bytes = vec![0; num_bytes];
        self.fill_from_keystream(&mut bytes);
        Ok(bytes)
    }
}

/// Reads the same keystream as `pseudorandom_bytes` so that parties sharing a seed can use the
/// generator wherever an RNG is expected, e.g. to draw identical ephemeral keys.
impl RngCore for AesCtrPrng {
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0; 4];
        self.fill_from_keystream(&mut bytes);
        LittleEndian::read_u32(&bytes)
    }

    fn next_u64(&mut self) -> u64 {
        let mut bytes = [0; 8];
        self.fill_from_keystream(&mut bytes);
        LittleEndian::read_u64(&bytes)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill_from_keystream(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_from_keystream(dest);
        Ok(())
    }
}

impl CryptoRng for AesCtrPrng {}
