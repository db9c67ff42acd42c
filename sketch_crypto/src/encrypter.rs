//! Encryption of sketches under another party's Elgamal public key.
//!
//! All randomness is drawn from the caller's RNG up front, one scalar per ciphertext in output order, so
//! the group operations can run in parallel and the output only depends on the RNG's stream. Passing a
//! seeded generator, like the AES-CTR one of the `uniform_prng` crate, makes encryption reproducible.

use crate::{
    ciphertext::{EncryptedSketch, PublicKeyBytes},
    encoding::{ciphertext_size, clamp_counter, encode_counter, encrypted_sketch_size},
    error::SketchError,
    sketch::Sketch,
};
use any_sketch_utils::{
    ec::{CurveId, NamedCurve},
    elgamal::{CommutativeElGamal, HomomorphicCipher},
    expect_equality, expect_non_negative,
};
use ark_ec::short_weierstrass::Affine;
use ark_ff::PrimeField;
use ark_std::{
    cfg_chunks_mut, cfg_into_iter, end_timer,
    marker::PhantomData,
    rand::{CryptoRng, RngCore},
    start_timer, vec,
    vec::Vec,
    UniformRand,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Encrypts sketches over the curve `P` with the cipher `C`, by default Elgamal with only a public key
#[derive(Clone)]
pub struct SketchEncrypter<P: NamedCurve, C = CommutativeElGamal<Affine<P>>> {
    cipher: C,
    max_counter_value: u64,
    _curve: PhantomData<P>,
}

impl<P: NamedCurve> SketchEncrypter<P>
where
    P::BaseField: PrimeField,
{
    /// Creates an encrypter for the public key `(g, y)` given as compressed points. Counters are capped at
    /// `max_counter_value`.
    pub fn new(
        curve_id: CurveId,
        max_counter_value: i64,
        public_key: &PublicKeyBytes,
    ) -> Result<Self, SketchError> {
        expect_equality!(P::CURVE_ID, curve_id, SketchError::CurveMismatch);
        expect_non_negative!(max_counter_value, SketchError::NegativeMaxCounterValue);
        let cipher = CommutativeElGamal::from_public_key_bytes(&public_key.gen, &public_key.y)?;
        Ok(Self::with_cipher(cipher, max_counter_value as u64))
    }
}

impl<P: NamedCurve, C: HomomorphicCipher<Affine<P>>> SketchEncrypter<P, C>
where
    P::BaseField: PrimeField,
{
    pub fn with_cipher(cipher: C, max_counter_value: u64) -> Self {
        Self {
            cipher,
            max_counter_value,
            _curve: PhantomData,
        }
    }

    pub fn cipher(&self) -> &C {
        &self.cipher
    }

    pub fn max_counter_value(&self) -> u64 {
        self.max_counter_value
    }

    /// Encrypts every register of the sketch, in order. For each register the output has the ciphertext of
    /// `index * G` followed by the ciphertexts of the clamped values, `value * G`, in config order. The
    /// sketch is checked first so a malformed register fails before anything is encrypted.
    pub fn encrypt<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        sketch: &Sketch,
    ) -> Result<EncryptedSketch, SketchError>
    where
        C: Sync,
    {
        sketch.validate()?;
        let value_spec_count = sketch.config().value_spec_count();

        let encrypt_time = start_timer!(|| "Encrypt sketch");
        let messages = sketch
            .registers()
            .iter()
            .flat_map(|register| {
                ark_std::iter::once(register.index).chain(
                    register
                        .values
                        .iter()
                        .map(|v| clamp_counter(*v, self.max_counter_value)),
                )
            })
            .map(|m| (m, P::ScalarField::rand(rng)))
            .collect::<Vec<_>>();

        let size = encrypted_sketch_size::<Affine<P>>(sketch.register_count(), value_spec_count);
        let mut out = vec![0; size];
        let cipher = &self.cipher;
        cfg_chunks_mut!(out, ciphertext_size::<Affine<P>>())
            .zip(cfg_into_iter!(messages))
            .try_for_each(|(chunk, (m, r))| {
                cipher
                    .encrypt_given_randomness(&encode_counter::<Affine<P>>(m), &r)
                    .write_compressed(chunk)
            })?;
        end_timer!(encrypt_time);
        Ok(EncryptedSketch(out))
    }
}

/// Creates an encrypter for the curve with OpenSSL NID `curve_id`. Only P-256 (`415`) is supported.
pub fn create_with_public_key(
    curve_id: i32,
    max_counter_value: i64,
    public_key: &PublicKeyBytes,
) -> Result<SketchEncrypter<ark_secp256r1::Config>, SketchError> {
    let curve = CurveId::from_nid(curve_id).ok_or(SketchError::UnsupportedCurve(curve_id))?;
    SketchEncrypter::new(curve, max_counter_value, public_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ciphertext::CiphertextPair,
        sketch::{Aggregator, Register, SketchConfig, ValueSpec},
    };
    use any_sketch_utils::{ec::CompressedPoint, error::PointEncodingError};
    use ark_secp256r1::Config;
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    fn key_pair(rng: &mut StdRng) -> (CommutativeElGamal<Affine<Config>>, PublicKeyBytes) {
        let cipher = CommutativeElGamal::new_key_pair(rng);
        let (gen, y) = cipher.public_key_bytes().unwrap();
        (cipher, PublicKeyBytes::new(gen, y))
    }

    fn sum_config(count: usize) -> SketchConfig {
        SketchConfig::new(vec![ValueSpec::new(Aggregator::Sum); count])
    }

    #[test]
    fn construction() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let (_, public_key) = key_pair(&mut rng);

        let encrypter = create_with_public_key(415, 10, &public_key).unwrap();
        assert_eq!(encrypter.max_counter_value(), 10);
        assert!(!encrypter.cipher().has_secret_key());
        assert!(create_with_public_key(415, 0, &public_key).is_ok());

        // secp256k1
        assert_eq!(
            create_with_public_key(714, 10, &public_key).err(),
            Some(SketchError::UnsupportedCurve(714))
        );
        assert_eq!(
            create_with_public_key(415, -1, &public_key).err(),
            Some(SketchError::NegativeMaxCounterValue(-1))
        );

        let mut bad_key = public_key.clone();
        bad_key.y[0] = 0x04;
        assert_eq!(
            create_with_public_key(415, 10, &bad_key).err(),
            Some(SketchError::ElGamal(
                PointEncodingError::InvalidPrefix(0x04).into()
            ))
        );
        bad_key.y = vec![];
        assert_eq!(
            create_with_public_key(415, 10, &bad_key).err(),
            Some(SketchError::ElGamal(
                PointEncodingError::InvalidLength(33, 0).into()
            ))
        );
    }

    #[test]
    fn output_layout() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let (cipher, public_key) = key_pair(&mut rng);
        let encrypter =
            SketchEncrypter::<Config>::new(CurveId::Prime256v1, 100, &public_key).unwrap();

        let mut sketch = Sketch::new(sum_config(2));
        sketch.add_register(Register::new(7, vec![1, 2]));
        sketch.add_register(Register::new(3, vec![150, 4]));
        let encrypted = encrypter.encrypt(&mut rng, &sketch).unwrap();
        assert_eq!(encrypted.len(), 2 * 3 * 66);

        let decrypted = encrypted
            .ciphertexts::<Affine<Config>>()
            .unwrap()
            .iter()
            .map(|pair| cipher.decrypt(&pair.to_ciphertext().unwrap()).unwrap())
            .collect::<Vec<_>>();
        // The second register's first value is clamped
        let expected = [7, 1, 2, 3, 100, 4]
            .into_iter()
            .map(encode_counter::<Affine<Config>>)
            .collect::<Vec<_>>();
        assert_eq!(decrypted, expected);
    }

    #[test]
    fn output_depends_only_on_the_rng() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let (_, public_key) = key_pair(&mut rng);
        let encrypter = create_with_public_key(415, 10, &public_key).unwrap();

        let sketch = Sketch::with_registers(
            sum_config(3),
            (0..20).map(|i| Register::new(i, vec![i, 2 * i, 3 * i])).collect(),
        );
        let a = encrypter
            .encrypt(&mut StdRng::seed_from_u64(1u64), &sketch)
            .unwrap();
        let b = encrypter
            .encrypt(&mut StdRng::seed_from_u64(1u64), &sketch)
            .unwrap();
        let c = encrypter
            .encrypt(&mut StdRng::seed_from_u64(2u64), &sketch)
            .unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), c.len());
    }

    #[test]
    fn malformed_sketch_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let (_, public_key) = key_pair(&mut rng);
        let encrypter = create_with_public_key(415, 10, &public_key).unwrap();

        let sketch = Sketch::with_registers(
            sum_config(2),
            vec![Register::new(1, vec![1, 1]), Register::new(2, vec![1, 1, 1])],
        );
        assert_eq!(
            encrypter.encrypt(&mut rng, &sketch),
            Err(SketchError::IncorrectNumberOfValues(1, 2, 3))
        );

        // A zero value encrypts the identity, only its decryption has no encoding
        let sketch = Sketch::with_registers(sum_config(1), vec![Register::new(1, vec![0])]);
        let encrypted = encrypter.encrypt(&mut rng, &sketch).unwrap();
        assert_eq!(encrypted.len(), 132);

        let empty = encrypter
            .encrypt(&mut rng, &Sketch::new(sum_config(4)))
            .unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn register_without_values() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let (cipher, public_key) = key_pair(&mut rng);
        let encrypter = create_with_public_key(415, 10, &public_key).unwrap();

        let sketch = Sketch::with_registers(SketchConfig::default(), vec![Register::new(5, vec![])]);
        let encrypted = encrypter.encrypt(&mut rng, &sketch).unwrap();
        let pair = CiphertextPair::from_bytes::<Affine<Config>>(encrypted.as_bytes()).unwrap();
        assert_eq!(
            cipher.decrypt_to_bytes(&pair.u, &pair.e).unwrap(),
            encode_counter::<Affine<Config>>(5).to_compressed().unwrap()
        );
    }
}
