//! Affine points and their byte encodings.
//!
//! # Encoding
//!
//! Points are encoded big-endian with three flag bits in the most
//! significant bits of the first byte, which are always free because the
//! base field modulus has 381 bits:
//!
//! | bit    | meaning                                         |
//! |--------|-------------------------------------------------|
//! | `0x80` | compressed (48 bytes, `x` only)                 |
//! | `0x40` | point at infinity, all other bits zero          |
//! | `0x20` | `y` is odd (compressed encoding only)           |
//!
//! The uncompressed encoding is `x || y`, 96 bytes. The identity encodes as
//! `0xc0` followed by zeros when compressed and `0x40` followed by zeros when
//! uncompressed.

use super::{field::FieldElement, projective::ProjectivePoint};
use crate::{COMPRESSED_POINT_SIZE, Error, FIELD_SIZE, Result, UNCOMPRESSED_POINT_SIZE};
use bls12_381::G1Affine;
use core::{fmt, ops::Neg};
use elliptic_curve::subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

const COMPRESSED_FLAG: u8 = 0x80;
const INFINITY_FLAG: u8 = 0x40;
const Y_ODD_FLAG: u8 = 0x20;
const FLAG_MASK: u8 = COMPRESSED_FLAG | INFINITY_FLAG | Y_ODD_FLAG;

/// Point serialization format.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum PointFormat {
    /// `x` coordinate and the parity of `y`.
    #[default]
    Compressed,
    /// Both coordinates.
    Uncompressed,
}

impl PointFormat {
    /// Length in bytes of a point encoded in this format.
    pub const fn encoded_len(self) -> usize {
        match self {
            PointFormat::Compressed => COMPRESSED_POINT_SIZE,
            PointFormat::Uncompressed => UNCOMPRESSED_POINT_SIZE,
        }
    }

    /// Detect the format from an encoding's length.
    pub fn from_encoded_len(len: usize) -> Option<Self> {
        match len {
            COMPRESSED_POINT_SIZE => Some(PointFormat::Compressed),
            UNCOMPRESSED_POINT_SIZE => Some(PointFormat::Uncompressed),
            _ => None,
        }
    }
}

/// Encoded point in either [`PointFormat`].
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct EncodedPoint {
    bytes: [u8; UNCOMPRESSED_POINT_SIZE],
    format: PointFormat,
}

impl EncodedPoint {
    /// Format of this encoding.
    pub fn format(&self) -> PointFormat {
        self.format
    }

    /// Encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.format.encoded_len()]
    }

    /// Length of the encoding in bytes.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.format.encoded_len()
    }
}

impl AsRef<[u8]> for EncodedPoint {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for EncodedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedPoint({:?}, ", self.format)?;
        for byte in self.as_bytes() {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

/// Point in the G1 subgroup, in affine coordinates.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct AffinePoint(pub(crate) G1Affine);

impl AffinePoint {
    /// Returns the point at infinity.
    pub fn identity() -> Self {
        Self(G1Affine::identity())
    }

    /// Returns the fixed base point of G1.
    pub fn generator() -> Self {
        Self(G1Affine::generator())
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> Choice {
        self.0.is_identity()
    }

    /// Returns the `(x, y)` coordinates, or `None` for the point at infinity.
    pub fn coordinates(&self) -> Option<(FieldElement, FieldElement)> {
        if self.is_identity().into() {
            return None;
        }

        let bytes = self.0.to_uncompressed();
        let (x, y) = bytes.split_at(FIELD_SIZE);
        let x = FieldElement::from_be_slice(x).ok()?;
        let y = FieldElement::from_be_slice(y).ok()?;
        Some((x, y))
    }

    /// Build a point from affine coordinates.
    ///
    /// Returns `None` unless `(x, y)` lies on the curve and in G1.
    pub fn from_coordinates(x: &FieldElement, y: &FieldElement) -> CtOption<Self> {
        let mut bytes = [0u8; UNCOMPRESSED_POINT_SIZE];
        bytes[..FIELD_SIZE].copy_from_slice(&x.to_be_bytes());
        bytes[FIELD_SIZE..].copy_from_slice(&y.to_be_bytes());
        G1Affine::from_uncompressed(&bytes).map(Self)
    }

    /// Serialize this point in the given format.
    pub fn to_bytes(&self, format: PointFormat) -> EncodedPoint {
        let mut bytes = [0u8; UNCOMPRESSED_POINT_SIZE];
        match format {
            PointFormat::Compressed => {
                bytes[..COMPRESSED_POINT_SIZE].copy_from_slice(&self.to_compressed())
            }
            PointFormat::Uncompressed => bytes.copy_from_slice(&self.to_uncompressed()),
        }
        EncodedPoint { bytes, format }
    }

    /// Serialize as `x` with the compression, infinity and parity flags.
    pub fn to_compressed(&self) -> [u8; COMPRESSED_POINT_SIZE] {
        let mut out = [0u8; COMPRESSED_POINT_SIZE];

        match self.coordinates() {
            Some((x, y)) => {
                out.copy_from_slice(&x.to_be_bytes());
                out[0] |= COMPRESSED_FLAG;
                out[0] |= u8::conditional_select(&0, &Y_ODD_FLAG, y.is_odd());
            }
            None => out[0] = COMPRESSED_FLAG | INFINITY_FLAG,
        }

        out
    }

    /// Serialize as `x || y`, or the infinity flag followed by zeros.
    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_POINT_SIZE] {
        let mut out = [0u8; UNCOMPRESSED_POINT_SIZE];

        match self.coordinates() {
            Some((x, y)) => {
                out[..FIELD_SIZE].copy_from_slice(&x.to_be_bytes());
                out[FIELD_SIZE..].copy_from_slice(&y.to_be_bytes());
            }
            None => out[0] = INFINITY_FLAG,
        }

        out
    }

    /// Decode a point in the given format.
    ///
    /// Fails on a length that does not match `format`, on inconsistent
    /// flags, on coordinates that are not reduced modulo `p` and on points
    /// that are not on the curve or not in G1.
    pub fn from_bytes(format: PointFormat, bytes: &[u8]) -> Result<Self> {
        let decoded = match format {
            PointFormat::Compressed => {
                let bytes = bytes.try_into().map_err(|_| Error::InvalidPointEncoding)?;
                Self::from_compressed(bytes)
            }
            PointFormat::Uncompressed => {
                let bytes = bytes.try_into().map_err(|_| Error::InvalidPointEncoding)?;
                Self::from_uncompressed(bytes)
            }
        };

        Option::from(decoded).ok_or(Error::InvalidPointEncoding)
    }

    /// Decode a point, detecting the format from the input length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let format = PointFormat::from_encoded_len(bytes.len()).ok_or(Error::InvalidPointEncoding)?;
        Self::from_bytes(format, bytes)
    }

    /// Decode a compressed point.
    pub fn from_compressed(bytes: &[u8; COMPRESSED_POINT_SIZE]) -> CtOption<Self> {
        let compressed = Choice::from(bytes[0] >> 7);
        let infinity = Choice::from((bytes[0] >> 6) & 1);
        let y_odd = Choice::from((bytes[0] >> 5) & 1);

        let mut x_bytes = *bytes;
        x_bytes[0] &= !FLAG_MASK;
        let x_is_zero = x_bytes[..].ct_eq(&[0u8; COMPRESSED_POINT_SIZE][..]);

        let finite = FieldElement::from_be_bytes(&x_bytes).and_then(|x| {
            x.curve_rhs().sqrt().and_then(|y| {
                let flip = y.is_odd() ^ y_odd;
                let y = FieldElement::conditional_select(&y, &-y, flip);
                Self::from_coordinates(&x, &y)
            })
        });
        let finite = CtOption::new(
            finite.unwrap_or(Self::identity()),
            finite.is_some() & !infinity,
        );
        let identity = CtOption::new(Self::identity(), infinity & !y_odd & x_is_zero);

        let decoded = finite.or_else(|| identity);
        CtOption::new(
            decoded.unwrap_or(Self::identity()),
            decoded.is_some() & compressed,
        )
    }

    /// Decode an uncompressed point.
    pub fn from_uncompressed(bytes: &[u8; UNCOMPRESSED_POINT_SIZE]) -> CtOption<Self> {
        let compressed = Choice::from(bytes[0] >> 7);
        let infinity = Choice::from((bytes[0] >> 6) & 1);
        let y_odd = Choice::from((bytes[0] >> 5) & 1);

        let mut coords = *bytes;
        coords[0] &= !FLAG_MASK;
        let coords_are_zero = coords[..].ct_eq(&[0u8; UNCOMPRESSED_POINT_SIZE][..]);

        let (x_bytes, y_bytes) = coords.split_at(FIELD_SIZE);
        let mut x_arr = [0u8; FIELD_SIZE];
        let mut y_arr = [0u8; FIELD_SIZE];
        x_arr.copy_from_slice(x_bytes);
        y_arr.copy_from_slice(y_bytes);

        let finite = FieldElement::from_be_bytes(&x_arr).and_then(|x| {
            FieldElement::from_be_bytes(&y_arr).and_then(|y| Self::from_coordinates(&x, &y))
        });
        let finite = CtOption::new(
            finite.unwrap_or(Self::identity()),
            finite.is_some() & !infinity,
        );
        let identity = CtOption::new(Self::identity(), infinity & coords_are_zero);

        let decoded = finite.or_else(|| identity);
        CtOption::new(
            decoded.unwrap_or(Self::identity()),
            decoded.is_some() & !compressed & !y_odd,
        )
    }
}

impl Default for AffinePoint {
    fn default() -> Self {
        Self::identity()
    }
}

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(G1Affine::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl TryFrom<&[u8]> for AffinePoint {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

impl From<&AffinePoint> for EncodedPoint {
    fn from(point: &AffinePoint) -> EncodedPoint {
        point.to_bytes(PointFormat::default())
    }
}

impl fmt::Debug for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.coordinates() {
            Some((x, y)) => f
                .debug_struct("AffinePoint")
                .field("x", &x)
                .field("y", &y)
                .finish(),
            None => f.write_str("AffinePoint(identity)"),
        }
    }
}

impl Neg for AffinePoint {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Neg for &AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        -(*self)
    }
}

impl From<&ProjectivePoint> for AffinePoint {
    fn from(p: &ProjectivePoint) -> AffinePoint {
        p.to_affine()
    }
}
