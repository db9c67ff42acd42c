use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PointEncodingError {
    /// The identity has no compressed encoding. Decrypting an encryption of `0 * G` ends here.
    PointAtInfinity,
    /// Expected length, found length
    InvalidLength(usize, usize),
    /// The first byte of a compressed point must be `0x02` or `0x03`
    InvalidPrefix(u8),
    /// The x coordinate is not smaller than the field modulus
    NonCanonicalCoordinate,
    NotOnCurve,
    NotInSubgroup,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ElGamalError {
    /// Only the holder of the key pair can decrypt, not a cipher created from a public key
    MissingSecretKey,
    PointEncoding(PointEncodingError),
}

impl From<PointEncodingError> for ElGamalError {
    fn from(e: PointEncodingError) -> Self {
        Self::PointEncoding(e)
    }
}
