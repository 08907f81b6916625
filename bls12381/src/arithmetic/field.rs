//! Base field `Fp` of BLS12-381.
//!
//! Elements are kept in Montgomery form in a fixed-width [`U384`], using the
//! constant-modulus residue type from `crypto-bigint`.

use crate::{Error, FIELD_SIZE, MODULUS, RAW_DIGITS, Result};
use core::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use elliptic_curve::{
    bigint::{Encoding, U384, impl_modulus, modular::constant_mod::Residue},
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeLess, CtOption},
    zeroize::DefaultIsZeroes,
};

impl_modulus!(FieldModulus, U384, crate::MODULUS_HEX);

type Fp = Residue<FieldModulus, { U384::LIMBS }>;

/// `(p + 1) / 4`, the square root exponent (`p ≡ 3 mod 4`).
const SQRT_EXP: U384 = U384::from_be_hex(
    "0680447a8e5ff9a692c6e9ed90d2eb35d91dd2e13ce144afd9cc34a83dac3d8907aaffffac54ffffee7fbfffffffeaab",
);

/// Element of the BLS12-381 base field, modulo
///
/// ```text
/// p = 1A0111EA 397FE69A 4B1BA7B6 434BACD7 64774B84 F38512BF
///     6730D2A0 F6B0F624 1EABFFFE B153FFFF B9FEFFFF FFFFAAAB
/// ```
#[derive(Clone, Copy)]
pub struct FieldElement(Fp);

impl FieldElement {
    /// Zero element.
    pub const ZERO: Self = Self(Fp::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self(Fp::ONE);

    /// Coefficient `b` of the G1 curve equation `y² = x³ + 4`.
    pub(crate) const EQUATION_B: Self = Self::from_u64(4);

    /// Convert a `u64` into a [`FieldElement`].
    pub const fn from_u64(w: u64) -> Self {
        Self(Fp::new(&U384::from_u64(w)))
    }

    /// Decode a [`FieldElement`] from its canonical big-endian encoding.
    ///
    /// Returns `None` if the encoded integer is not below the modulus.
    pub fn from_be_bytes(bytes: &[u8; FIELD_SIZE]) -> CtOption<Self> {
        let uint = U384::from_be_slice(bytes);
        let is_reduced = ConstantTimeLess::ct_lt(&uint, &MODULUS);
        CtOption::new(Self(Fp::new(&uint)), is_reduced)
    }

    /// Decode a [`FieldElement`] from a big-endian byte slice.
    pub fn from_be_slice(slice: &[u8]) -> Result<Self> {
        let bytes = <&[u8; FIELD_SIZE]>::try_from(slice).map_err(|_| Error::InvalidFieldEncoding)?;
        Option::from(Self::from_be_bytes(bytes)).ok_or(Error::InvalidFieldEncoding)
    }

    /// Read a [`FieldElement`] from little-endian 64-bit digits, reducing the
    /// resulting 384-bit integer modulo `p`.
    pub fn from_raw_digits(digits: &[u64; RAW_DIGITS]) -> Self {
        let mut bytes = [0u8; FIELD_SIZE];

        for (chunk, digit) in bytes.chunks_exact_mut(8).zip(digits) {
            chunk.copy_from_slice(&digit.to_le_bytes());
        }

        Self(Fp::new(&U384::from_le_slice(&bytes)))
    }

    /// Returns the canonical big-endian encoding of this element.
    pub fn to_be_bytes(&self) -> [u8; FIELD_SIZE] {
        self.0.retrieve().to_be_bytes()
    }

    /// Translate out of the Montgomery domain.
    pub fn to_canonical(&self) -> U384 {
        self.0.retrieve()
    }

    /// Determine if this element is odd: `self mod 2 == 1`.
    pub fn is_odd(&self) -> Choice {
        Choice::from(self.to_be_bytes()[FIELD_SIZE - 1] & 1)
    }

    /// Determine if this element is zero.
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Double element (add it to itself).
    #[must_use]
    pub fn double(&self) -> Self {
        Self(self.0 + self.0)
    }

    /// Compute modular square.
    #[must_use]
    pub fn square(&self) -> Self {
        Self(self.0.square())
    }

    /// Compute the square root of this element, if it is a quadratic residue.
    ///
    /// Since `p ≡ 3 mod 4` the candidate root is `self^((p + 1) / 4)`.
    pub fn sqrt(&self) -> CtOption<Self> {
        let root = Self(self.0.pow(&SQRT_EXP));
        CtOption::new(root, root.square().ct_eq(self))
    }

    /// Right-hand side of the curve equation for this `x`: `x³ + 4`.
    pub(crate) fn curve_rhs(&self) -> Self {
        self.square() * self + Self::EQUATION_B
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(Fp::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl Default for FieldElement {
    fn default() -> Self {
        Self::ZERO
    }
}

impl DefaultIsZeroes for FieldElement {}

impl Eq for FieldElement {}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl From<u64> for FieldElement {
    fn from(n: u64) -> FieldElement {
        Self::from_u64(n)
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{self:X})")
    }
}

impl fmt::LowerHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_be_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_be_bytes() {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

impl Add<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: FieldElement) -> FieldElement {
        FieldElement(self.0 + rhs.0)
    }
}

impl Add<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: &FieldElement) -> FieldElement {
        FieldElement(self.0 + rhs.0)
    }
}

impl AddAssign<FieldElement> for FieldElement {
    fn add_assign(&mut self, rhs: FieldElement) {
        *self = *self + rhs;
    }
}

impl Sub<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: FieldElement) -> FieldElement {
        FieldElement(self.0 - rhs.0)
    }
}

impl Sub<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: &FieldElement) -> FieldElement {
        FieldElement(self.0 - rhs.0)
    }
}

impl SubAssign<FieldElement> for FieldElement {
    fn sub_assign(&mut self, rhs: FieldElement) {
        *self = *self - rhs;
    }
}

impl Mul<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: FieldElement) -> FieldElement {
        FieldElement(self.0 * rhs.0)
    }
}

impl Mul<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: &FieldElement) -> FieldElement {
        FieldElement(self.0 * rhs.0)
    }
}

impl MulAssign<FieldElement> for FieldElement {
    fn mul_assign(&mut self, rhs: FieldElement) {
        *self = *self * rhs;
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement(-self.0)
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        -*self
    }
}
