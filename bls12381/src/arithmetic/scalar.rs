//! Scalar field arithmetic modulo the G1 subgroup order.

use crate::{Error, Result, SCALAR_SIZE, U256, U512};
use bls12_381::Scalar as Fr;
use core::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use elliptic_curve::{
    bigint::Encoding,
    consts::{U32, U64},
    ff::Field,
    generic_array::GenericArray,
    ops::Reduce,
    rand_core::RngCore,
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption},
    zeroize::DefaultIsZeroes,
};

/// Scalars are elements in the finite field modulo `r`.
///
/// # Encoding
///
/// The external encoding is 32 bytes, big-endian, and must be reduced
/// modulo `r` ([`Scalar::from_be_bytes`]). Integers of any size, including
/// negative ones, can be brought into range with the `reduce_*` constructors
/// and [`From<i64>`].
///
/// # Sampling
///
/// [`Scalar::random`] uses rejection sampling, so the result is exactly
/// uniform over `[0, r)` for a uniform input stream.
#[derive(Clone, Copy, Default, Eq, PartialEq)]
pub struct Scalar(pub(crate) Fr);

impl Scalar {
    /// Zero scalar.
    pub const ZERO: Self = Self(<Fr as Field>::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self(<Fr as Field>::ONE);

    /// Decode a [`Scalar`] from its canonical big-endian encoding.
    ///
    /// Returns `None` if the encoded integer is not below the order.
    pub fn from_be_bytes(bytes: &[u8; SCALAR_SIZE]) -> CtOption<Self> {
        let mut le = *bytes;
        le.reverse();
        Fr::from_bytes(&le).map(Self)
    }

    /// Decode a [`Scalar`] from a big-endian byte slice of exactly
    /// [`SCALAR_SIZE`] bytes.
    pub fn from_be_slice(slice: &[u8]) -> Result<Self> {
        let bytes = <&[u8; SCALAR_SIZE]>::try_from(slice).map_err(|_| Error::InvalidScalarEncoding)?;
        Option::from(Self::from_be_bytes(bytes)).ok_or(Error::InvalidScalarEncoding)
    }

    /// Returns the big-endian encoding of this scalar.
    pub fn to_be_bytes(&self) -> [u8; SCALAR_SIZE] {
        let mut bytes = self.0.to_bytes();
        bytes.reverse();
        bytes
    }

    /// Interpret a big-endian byte string of any length as an unsigned
    /// integer and reduce it modulo `r`.
    ///
    /// Runs in time proportional to the input length only.
    pub fn reduce_be_slice(bytes: &[u8]) -> Self {
        // 2^256 mod r
        let shift = Self::reduce_le_wide(&{
            let mut wide = [0u8; 64];
            wide[SCALAR_SIZE] = 1;
            wide
        });

        let (head, tail) = bytes.split_at(bytes.len() % SCALAR_SIZE);
        let mut acc = Self::reduce_be_chunk(head);

        for chunk in tail.chunks_exact(SCALAR_SIZE) {
            acc = acc * shift + Self::reduce_be_chunk(chunk);
        }

        acc
    }

    /// Reduce a signed integer given as a sign and a big-endian magnitude.
    pub fn reduce_signed_be_slice(negative: bool, magnitude: &[u8]) -> Self {
        let k = Self::reduce_be_slice(magnitude);
        Self::conditional_select(&k, &-k, Choice::from(negative as u8))
    }

    /// Generate a uniformly random scalar in `[0, r)` by rejection sampling.
    ///
    /// Each draw takes 32 bytes from `rng`, clears the top bit (the order
    /// has 255 bits) and is accepted if it is below the order, which happens
    /// with probability ~0.906. The loop terminates with probability 1 and
    /// leaks only the number of rejected draws.
    pub fn random(mut rng: impl RngCore) -> Self {
        let mut bytes = [0u8; SCALAR_SIZE];

        loop {
            rng.fill_bytes(&mut bytes);
            bytes[0] &= 0x7f;

            if let Some(scalar) = Option::from(Self::from_be_bytes(&bytes)) {
                return scalar;
            }
        }
    }

    /// Determine if this scalar is zero.
    pub fn is_zero(&self) -> Choice {
        self.0.ct_eq(&Fr::ZERO)
    }

    /// Compute modular square.
    #[must_use]
    pub fn square(&self) -> Self {
        Self(self.0.square())
    }

    /// Double this scalar.
    #[must_use]
    pub fn double(&self) -> Self {
        Self(self.0.double())
    }

    /// Compute the multiplicative inverse, if this scalar is non-zero.
    pub fn invert(&self) -> CtOption<Self> {
        self.0.invert().map(Self)
    }

    fn reduce_le_wide(bytes: &[u8; 64]) -> Self {
        Self(Fr::from_bytes_wide(bytes))
    }

    /// Reduce at most 32 big-endian bytes.
    fn reduce_be_chunk(chunk: &[u8]) -> Self {
        debug_assert!(chunk.len() <= SCALAR_SIZE);

        let mut wide = [0u8; 64];
        for (dst, src) in wide.iter_mut().zip(chunk.iter().rev()) {
            *dst = *src;
        }

        Self::reduce_le_wide(&wide)
    }
}

impl Reduce<U256> for Scalar {
    type Bytes = GenericArray<u8, U32>;

    fn reduce(w: U256) -> Self {
        let mut wide = [0u8; 64];
        wide[..SCALAR_SIZE].copy_from_slice(&w.to_le_bytes());
        Self::reduce_le_wide(&wide)
    }

    fn reduce_bytes(bytes: &GenericArray<u8, U32>) -> Self {
        Self::reduce(U256::from_be_slice(bytes))
    }
}

impl Reduce<U512> for Scalar {
    type Bytes = GenericArray<u8, U64>;

    fn reduce(w: U512) -> Self {
        Self::reduce_le_wide(&w.to_le_bytes())
    }

    fn reduce_bytes(bytes: &GenericArray<u8, U64>) -> Self {
        Self::reduce(U512::from_be_slice(bytes))
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(Fr::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl DefaultIsZeroes for Scalar {}

impl From<u64> for Scalar {
    fn from(k: u64) -> Self {
        Self(Fr::from(k))
    }
}

impl From<i64> for Scalar {
    fn from(k: i64) -> Self {
        let magnitude = Self::from(k.unsigned_abs());
        Self::conditional_select(&magnitude, &-magnitude, Choice::from((k < 0) as u8))
    }
}

impl From<Scalar> for [u8; SCALAR_SIZE] {
    fn from(scalar: Scalar) -> Self {
        scalar.to_be_bytes()
    }
}

impl TryFrom<&[u8]> for Scalar {
    type Error = Error;

    fn try_from(slice: &[u8]) -> Result<Self> {
        Self::from_be_slice(slice)
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar(0x{self:X})")
    }
}

impl fmt::LowerHex for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_be_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_be_bytes() {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

impl Add<Scalar> for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 + rhs.0)
    }
}

impl Add<&Scalar> for Scalar {
    type Output = Scalar;

    fn add(self, rhs: &Scalar) -> Scalar {
        Scalar(self.0 + rhs.0)
    }
}

impl AddAssign<Scalar> for Scalar {
    fn add_assign(&mut self, rhs: Scalar) {
        *self = *self + rhs;
    }
}

impl Sub<Scalar> for Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 - rhs.0)
    }
}

impl Sub<&Scalar> for Scalar {
    type Output = Scalar;

    fn sub(self, rhs: &Scalar) -> Scalar {
        Scalar(self.0 - rhs.0)
    }
}

impl SubAssign<Scalar> for Scalar {
    fn sub_assign(&mut self, rhs: Scalar) {
        *self = *self - rhs;
    }
}

impl Mul<Scalar> for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 * rhs.0)
    }
}

impl Mul<&Scalar> for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: &Scalar) -> Scalar {
        Scalar(self.0 * rhs.0)
    }
}

impl MulAssign<Scalar> for Scalar {
    fn mul_assign(&mut self, rhs: Scalar) {
        *self = *self * rhs;
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        Scalar(-self.0)
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        -*self
    }
}
