#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Usage
//!
//! ```
//! use bls12381::{PointFormat, ProjectivePoint, RandomSource};
//!
//! let mut source = RandomSource::from_seed(&[0x42; 32])?;
//! let k = source.random_scalar()?;
//!
//! let point = ProjectivePoint::mul_by_generator(&k);
//! let bytes = point.to_affine().to_bytes(PointFormat::Compressed);
//! assert_eq!(bytes.len(), 48);
//! # Ok::<(), bls12381::Error>(())
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod arithmetic;
mod drbg;
mod error;
mod source;

pub mod render;

pub use crate::{
    arithmetic::{
        affine::{AffinePoint, EncodedPoint, PointFormat},
        field::FieldElement,
        projective::ProjectivePoint,
        scalar::Scalar,
    },
    drbg::HashDrbg,
    error::{Error, Result},
    source::RandomSource,
};
pub use elliptic_curve::{
    self,
    bigint::{U256, U384, U512},
};

#[cfg(feature = "std")]
pub use crate::source::SharedRandomSource;

/// Order of the BLS12-381 G1 subgroup (i.e. scalar modulus) serialized as
/// hexadecimal.
///
/// ```text
/// r = 73EDA753 299D7D48 3339D808 09A1D805 53BDA402 FFFE5BFE FFFFFFFF 00000001
/// ```
///
/// With the BLS parameter `z = -0xd201000000010000`, `r = z⁴ - z² + 1`.
const ORDER_HEX: &str = "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001";

/// Base field modulus serialized as hexadecimal.
///
/// `p = (z - 1)² · r / 3 + z`
const MODULUS_HEX: &str = "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab";

/// Order of the G1 subgroup.
pub const ORDER: U256 = U256::from_be_hex(ORDER_HEX);

/// Modulus of the base field `Fp`.
pub const MODULUS: U384 = U384::from_be_hex(MODULUS_HEX);

/// Bit length of [`ORDER`].
pub const ORDER_BITS: u32 = 255;

/// Size of an encoded [`Scalar`] in bytes.
pub const SCALAR_SIZE: usize = 32;

/// Size of an encoded [`FieldElement`] in bytes.
pub const FIELD_SIZE: usize = 48;

/// Number of little-endian 64-bit digits read by
/// [`FieldElement::from_raw_digits`].
pub const RAW_DIGITS: usize = FIELD_SIZE / 8;

/// Size of a compressed G1 point in bytes.
pub const COMPRESSED_POINT_SIZE: usize = FIELD_SIZE;

/// Size of an uncompressed G1 point in bytes.
pub const UNCOMPRESSED_POINT_SIZE: usize = 2 * FIELD_SIZE;

/// Minimum seed length accepted by [`RandomSource::seed`], in bytes.
///
/// Matches the 256-bit security strength of Hash_DRBG over SHA-256.
pub const MIN_SEED_LEN: usize = 32;
