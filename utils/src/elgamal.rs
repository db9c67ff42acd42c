//! Elgamal encryption
//!
//! The public key is a pair `(g, y = x * g)` where `x` is the secret key. A message `m`, a group element,
//! is encrypted as `(u, e) = (r * g, m + r * y)` for a fresh random `r`. Adding two ciphertexts component-wise
//! gives an encryption of the sum of their messages and the encryption with `x * y` of an encryption with `y`
//! equals the encryption with `y` of an encryption with `x * y`, hence "commutative".

use crate::{
    ec::CompressedPoint,
    error::{ElGamalError, PointEncodingError},
};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{ops::Add, rand::RngCore, vec::Vec, UniformRand};
use zeroize::{Zeroize, ZeroizeOnDrop};

#[derive(
    Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop, CanonicalSerialize, CanonicalDeserialize,
)]
pub struct SecretKey<F: PrimeField>(pub F);

#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct PublicKey<G: AffineRepr> {
    /// Generator `g`
    pub gen: G,
    /// `x * g`
    pub y: G,
}

impl<F: PrimeField> SecretKey<F> {
    pub fn new<R: RngCore>(rng: &mut R) -> Self {
        Self(F::rand(rng))
    }
}

impl<G: AffineRepr> PublicKey<G> {
    pub fn new(secret_key: &SecretKey<G::ScalarField>, gen: &G) -> Self {
        Self {
            gen: *gen,
            y: gen.mul_bigint(secret_key.0.into_bigint()).into_affine(),
        }
    }
}

pub fn keygen<R: RngCore, G: AffineRepr>(
    rng: &mut R,
    gen: &G,
) -> (SecretKey<G::ScalarField>, PublicKey<G>) {
    let sk = SecretKey::new(rng);
    let pk = PublicKey::new(&sk, gen);
    (sk, pk)
}

/// Elgamal encryption of a group element `m`
#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Ciphertext<G: AffineRepr> {
    /// Ephemeral public key `r * g`
    pub u: G,
    /// `m + r * y`
    pub e: G,
}

impl<G: AffineRepr> Ciphertext<G> {
    /// Returns the ciphertext and randomness created for encryption
    pub fn new<R: RngCore>(
        rng: &mut R,
        msg: &G,
        public_key: &PublicKey<G>,
    ) -> (Self, G::ScalarField) {
        let r = G::ScalarField::rand(rng);
        (Self::new_given_randomness(msg, &r, public_key), r)
    }

    pub fn new_given_randomness(
        msg: &G,
        randomness: &G::ScalarField,
        public_key: &PublicKey<G>,
    ) -> Self {
        let r = randomness.into_bigint();
        Self {
            u: public_key.gen.mul_bigint(r).into_affine(),
            e: (public_key.y.mul_bigint(r) + msg).into_affine(),
        }
    }

    pub fn decrypt(&self, secret_key: &G::ScalarField) -> G {
        (self.e.into_group() - self.u * secret_key).into_affine()
    }
}

/// Component-wise addition, an encryption of the sum of the messages
impl<G: AffineRepr> Add for Ciphertext<G> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            u: (self.u.into_group() + other.u).into_affine(),
            e: (self.e.into_group() + other.e).into_affine(),
        }
    }
}

impl<G: AffineRepr + CompressedPoint> Ciphertext<G> {
    /// Writes the encodings of `u` and `e`, in that order, into `out`
    pub fn write_compressed(&self, out: &mut [u8]) -> Result<(), PointEncodingError> {
        let size = G::encoded_size();
        crate::expect_equality!(2 * size, out.len(), PointEncodingError::InvalidLength);
        self.u.write_compressed(&mut out[..size])?;
        self.e.write_compressed(&mut out[size..])
    }

    pub fn from_compressed(u: &[u8], e: &[u8]) -> Result<Self, PointEncodingError> {
        Ok(Self {
            u: G::from_compressed(u)?,
            e: G::from_compressed(e)?,
        })
    }
}

/// Encrypts group elements with caller chosen randomness. Lets the encryption of many messages be
/// split into drawing randomness, which needs the RNG, and the group operations, which don't.
pub trait HomomorphicCipher<G: AffineRepr> {
    fn encrypt_given_randomness(&self, msg: &G, randomness: &G::ScalarField) -> Ciphertext<G>;
}

/// Elgamal cipher over the group's standard generator which either holds a key pair or only a
/// public key received from another party.
#[derive(Clone, Debug)]
pub struct CommutativeElGamal<G: AffineRepr> {
    public_key: PublicKey<G>,
    secret_key: Option<SecretKey<G::ScalarField>>,
}

impl<G: AffineRepr> CommutativeElGamal<G> {
    pub fn new_key_pair<R: RngCore>(rng: &mut R) -> Self {
        let (sk, pk) = keygen(rng, &G::generator());
        Self {
            public_key: pk,
            secret_key: Some(sk),
        }
    }

    /// Cipher able to encrypt but not decrypt
    pub fn from_public_key(public_key: PublicKey<G>) -> Self {
        Self {
            public_key,
            secret_key: None,
        }
    }

    pub fn public_key(&self) -> &PublicKey<G> {
        &self.public_key
    }

    pub fn has_secret_key(&self) -> bool {
        self.secret_key.is_some()
    }

    pub fn encrypt<R: RngCore>(&self, rng: &mut R, msg: &G) -> Ciphertext<G> {
        Ciphertext::new(rng, msg, &self.public_key).0
    }

    pub fn decrypt(&self, ciphertext: &Ciphertext<G>) -> Result<G, ElGamalError> {
        let sk = self
            .secret_key
            .as_ref()
            .ok_or(ElGamalError::MissingSecretKey)?;
        Ok(ciphertext.decrypt(&sk.0))
    }
}

impl<G: AffineRepr> HomomorphicCipher<G> for CommutativeElGamal<G> {
    fn encrypt_given_randomness(&self, msg: &G, randomness: &G::ScalarField) -> Ciphertext<G> {
        Ciphertext::new_given_randomness(msg, randomness, &self.public_key)
    }
}

impl<G: AffineRepr + CompressedPoint> CommutativeElGamal<G> {
    /// Creates the cipher from the encodings of `g` and `y`
    pub fn from_public_key_bytes(gen: &[u8], y: &[u8]) -> Result<Self, ElGamalError> {
        Ok(Self::from_public_key(PublicKey {
            gen: G::from_compressed(gen)?,
            y: G::from_compressed(y)?,
        }))
    }

    /// Returns the encodings of `g` and `y`
    pub fn public_key_bytes(&self) -> Result<(Vec<u8>, Vec<u8>), ElGamalError> {
        Ok((
            self.public_key.gen.to_compressed()?,
            self.public_key.y.to_compressed()?,
        ))
    }

    /// Decrypts the ciphertext given as the encodings of `u` and `e` and returns the encoding of the
    /// message. Fails with `PointAtInfinity` if the message is the identity.
    pub fn decrypt_to_bytes(&self, u: &[u8], e: &[u8]) -> Result<Vec<u8>, ElGamalError> {
        let msg = self.decrypt(&Ciphertext::from_compressed(u, e)?)?;
        Ok(msg.to_compressed()?)
    }
}
