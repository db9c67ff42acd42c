//! SEC1 compressed encoding of short Weierstrass curve points. A point `(x, y)` is written as one byte
//! carrying the parity of `y` (`0x02` for even, `0x03` for odd) followed by `x` in big-endian, padded
//! to the byte size of the base field. This is the encoding other parties of the measurement protocol
//! parse so it must stay bit-exact; arkworks' own compressed serialization puts flags in the last
//! byte of a little-endian `x` and can't be used on the wire.

use crate::error::PointEncodingError;
use ark_ec::{
    short_weierstrass::{Affine, SWCurveConfig},
    AffineRepr, CurveGroup,
};
use ark_ff::{BigInteger, PrimeField};
use ark_std::{vec, vec::Vec};
use serde::Serialize;

pub const EVEN_Y_PREFIX: u8 = 0x02;
pub const ODD_Y_PREFIX: u8 = 0x03;

/// Curves which can be selected by their OpenSSL NID
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CurveId {
    /// NIST P-256, `NID_X9_62_prime256v1`
    Prime256v1,
}

impl CurveId {
    pub const PRIME256V1_NID: i32 = 415;

    pub fn from_nid(nid: i32) -> Option<Self> {
        match nid {
            Self::PRIME256V1_NID => Some(Self::Prime256v1),
            _ => None,
        }
    }

    pub fn nid(&self) -> i32 {
        match self {
            Self::Prime256v1 => Self::PRIME256V1_NID,
        }
    }
}

/// A curve configuration with a well known name
pub trait NamedCurve: SWCurveConfig {
    const CURVE_ID: CurveId;
}

impl NamedCurve for ark_secp256r1::Config {
    const CURVE_ID: CurveId = CurveId::Prime256v1;
}

/// Fixed width compressed encoding of a group element. The identity has no encoding.
pub trait CompressedPoint: Sized {
    /// Byte size of every encoded point
    fn encoded_size() -> usize;

    /// Writes the encoding into `out` which must be exactly `encoded_size()` bytes long
    fn write_compressed(&self, out: &mut [u8]) -> Result<(), PointEncodingError>;

    fn from_compressed(bytes: &[u8]) -> Result<Self, PointEncodingError>;

    fn to_compressed(&self) -> Result<Vec<u8>, PointEncodingError> {
        let mut out = vec![0; Self::encoded_size()];
        self.write_compressed(&mut out)?;
        Ok(out)
    }
}

fn coordinate_size<F: PrimeField>() -> usize {
    ((F::MODULUS_BIT_SIZE + 7) / 8) as usize
}

/// Big-endian bytes of `f` without the padding added by the limb representation
fn coordinate_bytes<F: PrimeField>(f: &F) -> Vec<u8> {
    let mut bytes = f.into_bigint().to_bytes_be();
    let padding = bytes.len() - coordinate_size::<F>();
    bytes.drain(..padding);
    bytes
}

impl<P: SWCurveConfig> CompressedPoint for Affine<P>
where
    P::BaseField: PrimeField,
{
    fn encoded_size() -> usize {
        1 + coordinate_size::<P::BaseField>()
    }

    fn write_compressed(&self, out: &mut [u8]) -> Result<(), PointEncodingError> {
        expect_equality!(
            Self::encoded_size(),
            out.len(),
            PointEncodingError::InvalidLength
        );
        if self.infinity {
            return Err(PointEncodingError::PointAtInfinity);
        }
        out[0] = if self.y.into_bigint().is_odd() {
            ODD_Y_PREFIX
        } else {
            EVEN_Y_PREFIX
        };
        out[1..].copy_from_slice(&coordinate_bytes(&self.x));
        Ok(())
    }

    fn from_compressed(bytes: &[u8]) -> Result<Self, PointEncodingError> {
        expect_equality!(
            Self::encoded_size(),
            bytes.len(),
            PointEncodingError::InvalidLength
        );
        let y_is_odd = match bytes[0] {
            EVEN_Y_PREFIX => false,
            ODD_Y_PREFIX => true,
            p => return Err(PointEncodingError::InvalidPrefix(p)),
        };
        let x = P::BaseField::from_be_bytes_mod_order(&bytes[1..]);
        // Reduction hides an `x` that is not less than the modulus
        if coordinate_bytes(&x) != bytes[1..] {
            return Err(PointEncodingError::NonCanonicalCoordinate);
        }
        let mut point = Affine::<P>::get_point_from_x_unchecked(x, false)
            .ok_or(PointEncodingError::NotOnCurve)?;
        if point.y.into_bigint().is_odd() != y_is_odd {
            point = -point;
            // y = 0 is its own negation
            if point.y.into_bigint().is_odd() != y_is_odd {
                return Err(PointEncodingError::NotOnCurve);
            }
        }
        if !point.is_in_correct_subgroup_assuming_on_curve() {
            return Err(PointEncodingError::NotInSubgroup);
        }
        Ok(point)
    }
}

/// Adds two encoded points and returns the encoding of the sum
pub fn add_compressed<G: AffineRepr + CompressedPoint>(
    a: &[u8],
    b: &[u8],
) -> Result<Vec<u8>, PointEncodingError> {
    let sum = (G::from_compressed(a)?.into_group() + G::from_compressed(b)?).into_affine();
    sum.to_compressed()
}
