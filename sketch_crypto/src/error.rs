use any_sketch_utils::{
    ec::CurveId,
    error::{ElGamalError, PointEncodingError},
};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SketchError {
    /// OpenSSL NID of a curve that isn't supported
    UnsupportedCurve(i32),
    /// Curve the encrypter works on, curve that was asked for
    CurveMismatch(CurveId, CurveId),
    NegativeMaxCounterValue(i64),
    /// Position of the register, number of value specs in the config, number of values in the register
    IncorrectNumberOfValues(usize, usize, usize),
    /// Byte size of an encrypted register, byte size of the encrypted sketch
    InvalidEncryptedSketchLength(usize, usize),
    /// Requested maximum counter value, largest supported one
    CounterTableTooLarge(u64, u64),
    /// Decrypted point is not `v * G` for any `v` up to the decoder's maximum
    CounterOutOfRange,
    ElGamal(ElGamalError),
    PointEncoding(PointEncodingError),
}

impl From<ElGamalError> for SketchError {
    fn from(e: ElGamalError) -> Self {
        Self::ElGamal(e)
    }
}

impl From<PointEncodingError> for SketchError {
    fn from(e: PointEncodingError) -> Self {
        Self::PointEncoding(e)
    }
}
