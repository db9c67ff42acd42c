//! Wire representation of ciphertexts and encrypted sketches

use crate::{
    encoding::{ciphertext_size, encrypted_register_size},
    error::SketchError,
};
use any_sketch_utils::{
    ec::{add_compressed, CompressedPoint},
    elgamal::Ciphertext,
    error::PointEncodingError,
};
use ark_ec::AffineRepr;
use ark_std::{vec, vec::Vec};
use serde::{Deserialize, Serialize};

/// Encodings of the two points of an Elgamal ciphertext
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CiphertextPair {
    /// `r * g`
    pub u: Vec<u8>,
    /// `m + r * y`
    pub e: Vec<u8>,
}

impl CiphertextPair {
    pub fn new(u: Vec<u8>, e: Vec<u8>) -> Self {
        Self { u, e }
    }

    /// Splits the concatenation `u || e` of two encoded points
    pub fn from_bytes<G: CompressedPoint>(bytes: &[u8]) -> Result<Self, SketchError> {
        let size = G::encoded_size();
        if bytes.len() != 2 * size {
            return Err(PointEncodingError::InvalidLength(2 * size, bytes.len()).into());
        }
        Ok(Self::new(bytes[..size].to_vec(), bytes[size..].to_vec()))
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        [&self.u[..], &self.e[..]].concat()
    }

    pub fn from_ciphertext<G: AffineRepr + CompressedPoint>(
        ciphertext: &Ciphertext<G>,
    ) -> Result<Self, SketchError> {
        let mut bytes = vec![0; ciphertext_size::<G>()];
        ciphertext.write_compressed(&mut bytes)?;
        Self::from_bytes::<G>(&bytes)
    }

    pub fn to_ciphertext<G: AffineRepr + CompressedPoint>(
        &self,
    ) -> Result<Ciphertext<G>, SketchError> {
        Ok(Ciphertext::from_compressed(&self.u, &self.e)?)
    }

    /// Component-wise point addition. The result decrypts to the sum of the plaintexts, so for
    /// encrypted counters `a` and `b` it decrypts to `(a + b) * G`.
    pub fn add<G: AffineRepr + CompressedPoint>(&self, other: &Self) -> Result<Self, SketchError> {
        Ok(Self::new(
            add_compressed::<G>(&self.u, &other.u)?,
            add_compressed::<G>(&self.e, &other.e)?,
        ))
    }
}

/// Encryptions of one register's index and values
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptedRegister {
    pub index: CiphertextPair,
    pub values: Vec<CiphertextPair>,
}

/// Encodings of the two points `g` and `y` of an Elgamal public key
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyBytes {
    pub gen: Vec<u8>,
    pub y: Vec<u8>,
}

impl PublicKeyBytes {
    pub fn new(gen: Vec<u8>, y: Vec<u8>) -> Self {
        Self { gen, y }
    }
}

/// Concatenated ciphertexts of a sketch without any framing. The number of values per register is needed
/// to find register boundaries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedSketch(pub Vec<u8>);

impl EncryptedSketch {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All ciphertexts in order, registers not separated
    pub fn ciphertexts<G: CompressedPoint>(&self) -> Result<Vec<CiphertextPair>, SketchError> {
        let size = ciphertext_size::<G>();
        if self.0.len() % size != 0 {
            return Err(SketchError::InvalidEncryptedSketchLength(
                size,
                self.0.len(),
            ));
        }
        self.0
            .chunks_exact(size)
            .map(CiphertextPair::from_bytes::<G>)
            .collect()
    }

    pub fn registers<G: CompressedPoint>(
        &self,
        value_spec_count: usize,
    ) -> Result<Vec<EncryptedRegister>, SketchError> {
        let register_size = encrypted_register_size::<G>(value_spec_count);
        if self.0.len() % register_size != 0 {
            return Err(SketchError::InvalidEncryptedSketchLength(
                register_size,
                self.0.len(),
            ));
        }
        let size = ciphertext_size::<G>();
        self.0
            .chunks_exact(register_size)
            .map(|register| {
                let index = CiphertextPair::from_bytes::<G>(&register[..size])?;
                let values = register[size..]
                    .chunks_exact(size)
                    .map(CiphertextPair::from_bytes::<G>)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(EncryptedRegister { index, values })
            })
            .collect()
    }
}

impl AsRef<[u8]> for EncryptedSketch {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
