use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PrngError {
    /// Supplied key length, required key length
    InvalidKeySize(usize, usize),
    /// Supplied IV length, required IV length
    InvalidIvSize(usize, usize),
    /// Number of pseudorandom bytes must be a positive value
    NonPositiveByteCount,
}
