//! Arithmetic on the BLS12-381 base field, scalar field and the G1 subgroup.
//!
//! The group law and the scalar field come from the [`bls12_381`] crate; the
//! types here wrap them with the encodings and sampling rules this crate
//! exposes.

pub(crate) mod affine;
pub(crate) mod field;
pub(crate) mod mul;
pub(crate) mod projective;
pub(crate) mod scalar;
