use any_sketch_crypto::{
    Aggregator, CiphertextPair, EncryptedSketch, PublicKeyBytes, Register, Sketch, SketchConfig,
    ValueSpec,
};
use any_sketch_utils::elgamal::CommutativeElGamal;
use ark_std::rand::RngCore;

pub type G = ark_secp256r1::Affine;

#[macro_use]
pub mod serialization;

pub const CIPHERTEXT_SIZE: usize = 66;

/// Config with `unique` values aggregated as unique followed by `sum` values aggregated as sum
pub fn create_sketch_config(unique: usize, sum: usize) -> SketchConfig {
    let mut values = vec![ValueSpec::new(Aggregator::Unique); unique];
    values.extend(vec![ValueSpec::new(Aggregator::Sum); sum]);
    SketchConfig::new(values)
}

/// Appends `count` registers with random non-zero indices and values in `0..=max_value`
pub fn add_random_registers<R: RngCore>(
    rng: &mut R,
    count: usize,
    max_value: u64,
    sketch: &mut Sketch,
) {
    let value_count = sketch.config().value_spec_count();
    for _ in 0..count {
        let index = rng.next_u64().max(1);
        let values = (0..value_count)
            .map(|_| rng.next_u64() % (max_value + 1))
            .collect();
        sketch.add_register(Register::new(index, values));
    }
}

/// Sketch with a single register holding `values`
pub fn single_register_sketch(index: u64, values: Vec<u64>) -> Sketch {
    Sketch::with_registers(
        create_sketch_config(0, values.len()),
        vec![Register::new(index, values)],
    )
}

pub fn p256_key_pair<R: RngCore>(rng: &mut R) -> (CommutativeElGamal<G>, PublicKeyBytes) {
    let cipher = CommutativeElGamal::new_key_pair(rng);
    let (gen, y) = cipher.public_key_bytes().unwrap();
    (cipher, PublicKeyBytes::new(gen, y))
}

/// The `i`-th ciphertext of an encrypted sketch, counting across registers
pub fn ciphertext_at(encrypted: &EncryptedSketch, i: usize) -> CiphertextPair {
    let start = i * CIPHERTEXT_SIZE;
    CiphertextPair::from_bytes::<G>(&encrypted.as_bytes()[start..start + CIPHERTEXT_SIZE]).unwrap()
}
