use any_sketch_crypto::{create_with_public_key, P256SketchEncrypter, Sketch};
use ark_std::rand::RngCore;
use test_utils::{add_random_registers, create_sketch_config, p256_key_pair};

/// Encrypter for a fresh P-256 key and a sketch of `register_count` registers with `unique` unique and
/// `sum` sum values. Values go up to twice `max_counter_value` so some of them get clamped.
pub fn setup_sketch_encryption<R: RngCore>(
    rng: &mut R,
    max_counter_value: i64,
    register_count: usize,
    unique: usize,
    sum: usize,
) -> (P256SketchEncrypter, Sketch) {
    let (_, public_key) = p256_key_pair(rng);
    let encrypter = create_with_public_key(415, max_counter_value, &public_key).unwrap();
    let mut sketch = Sketch::new(create_sketch_config(unique, sum));
    add_random_registers(rng, register_count, 2 * max_counter_value as u64, &mut sketch);
    (encrypter, sketch)
}
