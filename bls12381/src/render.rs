//! Human-readable dumps of byte buffers, field elements, scalars and points.
//!
//! Nothing in the arithmetic depends on this module. It exists for
//! inspecting intermediate values while debugging or writing test vectors:
//!
//! ```
//! use bls12381::{render::labeled, Scalar};
//!
//! let out = format!("{}", labeled("k", &Scalar::from(255u64)));
//! assert!(out.starts_with("[k]:\n"));
//! assert!(out.ends_with("FF"));
//! ```

use crate::{AffinePoint, FieldElement, ProjectivePoint, Scalar};
use core::fmt;

/// Values which can be dumped in a stable text form.
pub trait Render {
    /// Write the text form of `self` to `f`.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Bytes as comma-terminated lowercase hex pairs, e.g. `00,ff,`.
impl Render for [u8] {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self {
            write!(f, "{byte:02x},")?;
        }
        Ok(())
    }
}

impl<const N: usize> Render for [u8; N] {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self[..].render(f)
    }
}

impl Render for FieldElement {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:X}")
    }
}

impl Render for Scalar {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:X}")
    }
}

/// Affine coordinates, one per line, or `infinity`.
impl Render for AffinePoint {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.coordinates() {
            Some((x, y)) => write!(f, "x: {x:X}\ny: {y:X}"),
            None => f.write_str("infinity"),
        }
    }
}

impl Render for ProjectivePoint {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_affine().render(f)
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

/// [`Display`](fmt::Display) adapter returned by [`labeled`].
pub struct Labeled<'a, T: ?Sized> {
    label: &'a str,
    value: &'a T,
}

impl<T: Render + ?Sized> fmt::Display for Labeled<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]:", self.label)?;
        self.value.render(f)
    }
}

impl<T: Render + ?Sized> fmt::Debug for Labeled<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Format `value` under a `[label]:` header line.
pub fn labeled<'a, T: Render + ?Sized>(label: &'a str, value: &'a T) -> Labeled<'a, T> {
    Labeled { label, value }
}

/// Write `value` under a `[label]:` header line to standard error.
#[cfg(feature = "std")]
pub fn debug_print<T: Render + ?Sized>(label: &str, value: &T) {
    std::eprintln!("{}", labeled(label, value));
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::labeled;
    use crate::{AffinePoint, FieldElement, ProjectivePoint, Scalar};
    use alloc::format;

    #[test]
    fn bytes() {
        let out = format!("{}", labeled("buf", &[0x00u8, 0xab, 0x10][..]));
        assert_eq!(out, "[buf]:\n00,ab,10,");
    }

    #[test]
    fn byte_array() {
        assert_eq!(format!("{}", labeled("a", &[1u8, 2])), "[a]:\n01,02,");
    }

    #[test]
    fn field_element() {
        let out = format!("{}", labeled("x", &FieldElement::from(0xabcu64)));
        assert_eq!(out, format!("[x]:\n{}ABC", "0".repeat(93)));
    }

    #[test]
    fn scalar() {
        let out = format!("{}", labeled("k", &Scalar::ONE));
        assert_eq!(out, format!("[k]:\n{}1", "0".repeat(63)));
    }

    #[test]
    fn points() {
        let id = format!("{}", labeled("P", &AffinePoint::identity()));
        assert_eq!(id, "[P]:\ninfinity");

        let g = format!("{}", labeled("G", &ProjectivePoint::generator()));
        assert!(g.starts_with("[G]:\nx: 17F1D3A73197D794"));
        assert!(g.contains("\ny: 08B3F481E3AAA0F1"));
    }
}
