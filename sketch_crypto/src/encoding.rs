//! Mapping of register indices and counters to group elements, and sizes of the encrypted output

use any_sketch_utils::ec::CompressedPoint;
use ark_ec::{AffineRepr, CurveGroup};
use ark_std::cmp::min;

/// Caps `value` at `max_counter_value`. What is above the cap is lost on purpose as it bounds the
/// table needed to decode counters.
pub fn clamp_counter(value: u64, max_counter_value: u64) -> u64 {
    min(value, max_counter_value)
}

/// `value * G` for the standard generator `G` of the group. `0` maps to the identity.
pub fn encode_counter<G: AffineRepr>(value: u64) -> G {
    G::generator().mul_bigint([value]).into_affine()
}

/// Byte size of an encrypted scalar, the encodings of `u` and `e`
pub fn ciphertext_size<G: CompressedPoint>() -> usize {
    2 * G::encoded_size()
}

/// Byte size of an encrypted register, the encrypted index and `value_spec_count` encrypted values
pub fn encrypted_register_size<G: CompressedPoint>(value_spec_count: usize) -> usize {
    (1 + value_spec_count) * ciphertext_size::<G>()
}

pub fn encrypted_sketch_size<G: CompressedPoint>(
    register_count: usize,
    value_spec_count: usize,
) -> usize {
    register_count * encrypted_register_size::<G>(value_spec_count)
}
