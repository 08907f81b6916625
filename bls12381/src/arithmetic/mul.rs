//! Constant-time scalar multiplication.
//!
//! Both entry points recode the scalar into 65 signed radix-16 digits and
//! select table entries in constant time, so the sequence of group
//! operations does not depend on the scalar.

use super::{projective::ProjectivePoint, scalar::Scalar};
use core::ops::{Mul, MulAssign};
use elliptic_curve::subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

#[cfg(all(
    feature = "precomputed-tables",
    not(any(feature = "critical-section", feature = "std"))
))]
compile_error!("`precomputed-tables` feature requires either `critical-section` or `std`");

#[cfg(all(feature = "precomputed-tables", feature = "critical-section"))]
use once_cell::sync::Lazy as LazyLock;
#[cfg(all(
    feature = "precomputed-tables",
    all(feature = "std", not(feature = "critical-section"))
))]
use std::sync::LazyLock;

/// Number of entries in a [`LookupTable`].
const LUT_SIZE: usize = 8;

/// Number of radix-16 digits of a recoded scalar.
const DIGITS: usize = 65;

/// Number of generator tables, each spaced by two digits.
#[cfg(feature = "precomputed-tables")]
const GEN_TABLES: usize = DIGITS.div_ceil(2);

/// Lookup table containing precomputed values `[p, 2p, 3p, ..., 8p]`
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LookupTable([ProjectivePoint; LUT_SIZE]);

impl From<&ProjectivePoint> for LookupTable {
    fn from(p: &ProjectivePoint) -> Self {
        let mut points = [*p; LUT_SIZE];
        for j in 0..(LUT_SIZE - 1) {
            points[j + 1] = *p + &points[j];
        }
        LookupTable(points)
    }
}

impl LookupTable {
    /// Given -8 <= x <= 8, returns x * p in constant time.
    pub(crate) fn select(&self, x: i8) -> ProjectivePoint {
        debug_assert!((-8..=8).contains(&x));

        // Compute xabs = |x|
        let xmask = x >> 7;
        let xabs = (x + xmask) ^ xmask;

        let mut t = ProjectivePoint::identity();
        for j in 1..(LUT_SIZE + 1) {
            let c = (xabs as u8).ct_eq(&(j as u8));
            t.conditional_assign(&self.0[j - 1], c);
        }
        // Now t == |x| * p.

        let neg_mask = Choice::from((xmask & 1) as u8);
        t.conditional_assign(&-t, neg_mask);
        // Now t == x * p.

        t
    }
}

/// Returns `[a_0, ..., a_64]` such that `sum(a_j * 2^(j * 4)) == x`,
/// and `-8 <= a_j <= 7`.
fn to_radix_16(x: &Scalar) -> [i8; DIGITS] {
    // The order has 255 bits, so the final carry always fits in `a_64`.
    let mut output = [0i8; DIGITS];

    // Step 1: change radix.
    let bytes = x.0.to_bytes();
    for (i, byte) in bytes.iter().enumerate() {
        output[2 * i] = (byte & 0xf) as i8;
        output[2 * i + 1] = ((byte >> 4) & 0xf) as i8;
    }

    // Step 2: recenter coefficients from [0,16) to [-8,8)
    for i in 0..(DIGITS - 1) {
        let carry = (output[i] + 8) >> 4;
        output[i] -= carry << 4;
        output[i + 1] += carry;
    }

    output
}

/// Multiply an arbitrary point with a 4-bit fixed window.
pub(crate) fn mul_windowed(x: &ProjectivePoint, k: &Scalar) -> ProjectivePoint {
    let scalar_digits = to_radix_16(k);
    let lookup_table = LookupTable::from(x);
    let mut acc = lookup_table.select(scalar_digits[DIGITS - 1]);
    for i in (0..(DIGITS - 1)).rev() {
        for _j in 0..4 {
            acc = acc.double();
        }
        acc += &lookup_table.select(scalar_digits[i]);
    }
    acc
}

/// `[ 256^i G ]` for every `i` in `0..GEN_TABLES`, built on first use.
#[cfg(feature = "precomputed-tables")]
static GEN_LOOKUP_TABLE: LazyLock<[LookupTable; GEN_TABLES]> = LazyLock::new(|| {
    let mut gen_point = ProjectivePoint::generator();
    let mut res = [LookupTable::default(); GEN_TABLES];

    for table in res.iter_mut() {
        *table = LookupTable::from(&gen_point);
        for _ in 0..8 {
            gen_point = gen_point.double();
        }
    }

    res
});

/// Multiply the generator using the precomputed tables.
///
/// Odd digits are summed first and shifted by one radix step, which needs
/// only four doublings in total.
#[cfg(feature = "precomputed-tables")]
pub(crate) fn mul_by_generator(k: &Scalar) -> ProjectivePoint {
    let digits = to_radix_16(k);
    let table = &*GEN_LOOKUP_TABLE;

    let mut acc = ProjectivePoint::identity();
    for (i, lut) in table.iter().enumerate().take(DIGITS / 2) {
        acc += &lut.select(digits[2 * i + 1]);
    }

    for _ in 0..4 {
        acc = acc.double();
    }

    for (i, lut) in table.iter().enumerate() {
        acc += &lut.select(digits[2 * i]);
    }

    acc
}

#[cfg(not(feature = "precomputed-tables"))]
pub(crate) fn mul_by_generator(k: &Scalar) -> ProjectivePoint {
    mul_windowed(&ProjectivePoint::generator(), k)
}

impl Mul<Scalar> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, other: Scalar) -> ProjectivePoint {
        mul_windowed(&self, &other)
    }
}

impl Mul<&Scalar> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, other: &Scalar) -> ProjectivePoint {
        mul_windowed(self, other)
    }
}

impl Mul<&Scalar> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, other: &Scalar) -> ProjectivePoint {
        mul_windowed(&self, other)
    }
}

impl MulAssign<Scalar> for ProjectivePoint {
    fn mul_assign(&mut self, rhs: Scalar) {
        *self = mul_windowed(self, &rhs);
    }
}

impl MulAssign<&Scalar> for ProjectivePoint {
    fn mul_assign(&mut self, rhs: &Scalar) {
        *self = mul_windowed(self, rhs);
    }
}
