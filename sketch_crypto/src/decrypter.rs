//! Decryption of encrypted sketches by the holder of the secret key

use crate::{
    ciphertext::{CiphertextPair, EncryptedRegister, EncryptedSketch},
    decoder::CounterDecoder,
    error::SketchError,
};
use any_sketch_utils::{
    ec::{CompressedPoint, NamedCurve},
    elgamal::CommutativeElGamal,
    error::ElGamalError,
};
use ark_ec::{short_weierstrass::Affine, AffineRepr};
use ark_ff::PrimeField;
use ark_std::{cfg_iter, end_timer, start_timer, vec::Vec};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecryptedRegister {
    /// Encoding of `index * G`. Indices aren't bounded like counters so they are left as points which can
    /// be compared against `encode_counter(index)`. `None` for index 0.
    pub index: Option<Vec<u8>>,
    pub values: Vec<u64>,
}

pub struct SketchDecrypter<P: NamedCurve>
where
    P::BaseField: PrimeField,
{
    cipher: CommutativeElGamal<Affine<P>>,
    decoder: CounterDecoder<Affine<P>>,
}

impl<P: NamedCurve> SketchDecrypter<P>
where
    P::BaseField: PrimeField,
{
    /// `cipher` must hold the secret key. Counters up to `max_counter_value` can be decoded.
    pub fn new(
        cipher: CommutativeElGamal<Affine<P>>,
        max_counter_value: u64,
    ) -> Result<Self, SketchError> {
        if !cipher.has_secret_key() {
            return Err(ElGamalError::MissingSecretKey.into());
        }
        Ok(Self {
            cipher,
            decoder: CounterDecoder::new(max_counter_value)?,
        })
    }

    pub fn cipher(&self) -> &CommutativeElGamal<Affine<P>> {
        &self.cipher
    }

    pub fn decoder(&self) -> &CounterDecoder<Affine<P>> {
        &self.decoder
    }

    /// Decrypts a sketch whose registers have `value_spec_count` values each
    pub fn decrypt(
        &self,
        encrypted: &EncryptedSketch,
        value_spec_count: usize,
    ) -> Result<Vec<DecryptedRegister>, SketchError> {
        let registers = encrypted.registers::<Affine<P>>(value_spec_count)?;
        let decrypt_time = start_timer!(|| "Decrypt sketch");
        let decrypted = cfg_iter!(registers)
            .map(|register| self.decrypt_register(register))
            .collect::<Result<Vec<_>, _>>();
        end_timer!(decrypt_time);
        decrypted
    }

    pub fn decrypt_register(
        &self,
        register: &EncryptedRegister,
    ) -> Result<DecryptedRegister, SketchError> {
        let index = self.decrypt_ciphertext(&register.index)?;
        let index = if index.is_zero() {
            None
        } else {
            Some(index.to_compressed()?)
        };
        let values = register
            .values
            .iter()
            .map(|v| self.decrypt_counter(v))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DecryptedRegister { index, values })
    }

    /// Decrypted point of a single ciphertext
    pub fn decrypt_ciphertext(&self, pair: &CiphertextPair) -> Result<Affine<P>, SketchError> {
        Ok(self.cipher.decrypt(&pair.to_ciphertext()?)?)
    }

    pub fn decrypt_counter(&self, pair: &CiphertextPair) -> Result<u64, SketchError> {
        self.decoder.decode(&self.decrypt_ciphertext(pair)?)
    }
}
