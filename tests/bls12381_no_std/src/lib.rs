//! Builds `bls12381` without `std` to catch accidental `std` usage.

#![no_std]

use bls12381::{PointFormat, ProjectivePoint, RandomSource, Result};

/// Sample a scalar and return the compressed encoding of its public point.
pub fn public_point(seed: &[u8]) -> Result<[u8; 48]> {
    let mut source = RandomSource::from_seed(seed)?;
    let k = source.random_scalar()?;
    let point = ProjectivePoint::mul_by_generator(&k).to_affine();

    let mut out = [0u8; 48];
    out.copy_from_slice(point.to_bytes(PointFormat::Compressed).as_bytes());
    Ok(out)
}
