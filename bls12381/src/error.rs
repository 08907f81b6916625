//! Error types.

use core::fmt::{self, Display, Formatter};

/// Result type with the `bls12381` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned by seeding, sampling and decoding.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// Seed is shorter than [`MIN_SEED_LEN`](crate::MIN_SEED_LEN).
    InsufficientEntropy {
        /// Length of the rejected seed.
        len: usize,
    },
    /// Random source was used before being seeded.
    UninitializedSource,
    /// Scalar bytes have the wrong length or are not reduced modulo the order.
    InvalidScalarEncoding,
    /// Field element bytes have the wrong length or are not reduced modulo `p`.
    InvalidFieldEncoding,
    /// Point bytes are malformed, off the curve, or outside G1.
    InvalidPointEncoding,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::InsufficientEntropy { len } => write!(
                f,
                "seed of {len} bytes is shorter than the {} byte minimum",
                crate::MIN_SEED_LEN
            ),
            Error::UninitializedSource => write!(f, "random source has not been seeded"),
            Error::InvalidScalarEncoding => write!(f, "scalar encoding is invalid"),
            Error::InvalidFieldEncoding => write!(f, "field element encoding is invalid"),
            Error::InvalidPointEncoding => write!(f, "point encoding is invalid"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for elliptic_curve::Error {
    fn from(_: Error) -> Self {
        elliptic_curve::Error
    }
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::Error;
    use alloc::string::ToString;

    #[test]
    fn insufficient_entropy_reports_length() {
        let msg = Error::InsufficientEntropy { len: 7 }.to_string();
        assert_eq!(msg, "seed of 7 bytes is shorter than the 32 byte minimum");
    }
}
