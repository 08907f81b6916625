//! Point codec tests.

use bls12381::{
    AffinePoint, COMPRESSED_POINT_SIZE, Error, FieldElement, PointFormat, ProjectivePoint,
    RAW_DIGITS, Scalar, UNCOMPRESSED_POINT_SIZE, U256,
    elliptic_curve::ops::Reduce,
};
use hex_literal::hex;
use proptest::{prelude::any, prop_compose, proptest};

const COMPRESSED_BASEPOINT: &[u8] = &hex!(
    "b7f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb"
);

const COMPRESSED_IDENTITY: &[u8] = &hex!(
    "c00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000"
);

prop_compose! {
    fn point()(bytes in any::<[u8; 32]>()) -> AffinePoint {
        let k = <Scalar as Reduce<U256>>::reduce_bytes(&bytes.into());
        ProjectivePoint::mul_by_generator(&k).to_affine()
    }
}

#[test]
fn generator_x_from_raw_digits() {
    let digits: [u64; RAW_DIGITS] = [
        0xfb3a_f00a_db22_c6bb,
        0x6c55_e83f_f97a_1aef,
        0xa14e_3a3f_171b_ac58,
        0xc368_8c4f_9774_b905,
        0x2695_638c_4fa9_ac0f,
        0x17f1_d3a7_3197_d794,
    ];

    let (x, _) = AffinePoint::generator().coordinates().unwrap();
    assert_eq!(FieldElement::from_raw_digits(&digits), x);
}

#[test]
fn default_format_is_compressed() {
    assert_eq!(PointFormat::default(), PointFormat::Compressed);
    assert_eq!(PointFormat::Compressed.encoded_len(), COMPRESSED_POINT_SIZE);
    assert_eq!(PointFormat::Uncompressed.encoded_len(), UNCOMPRESSED_POINT_SIZE);
}

#[test]
fn generator_vector() {
    let g = AffinePoint::generator();
    assert_eq!(g.to_bytes(PointFormat::Compressed).as_ref(), COMPRESSED_BASEPOINT);
    assert_eq!(AffinePoint::try_from(COMPRESSED_BASEPOINT), Ok(g));
}

#[test]
fn identity_vector() {
    let id = AffinePoint::identity();
    assert_eq!(id.to_bytes(PointFormat::Compressed).as_bytes(), COMPRESSED_IDENTITY);
    assert_eq!(
        AffinePoint::from_bytes(PointFormat::Compressed, COMPRESSED_IDENTITY),
        Ok(id)
    );
}

#[test]
fn format_must_match_length() {
    let uncompressed = AffinePoint::generator().to_bytes(PointFormat::Uncompressed);
    assert_eq!(
        AffinePoint::from_bytes(PointFormat::Compressed, uncompressed.as_bytes()),
        Err(Error::InvalidPointEncoding)
    );
    assert_eq!(
        AffinePoint::from_bytes(PointFormat::Uncompressed, COMPRESSED_BASEPOINT),
        Err(Error::InvalidPointEncoding)
    );
    assert_eq!(AffinePoint::from_slice(&[]), Err(Error::InvalidPointEncoding));
}

#[test]
fn x_without_square_root_is_rejected() {
    // x = 1: 1 + 4 = 5 is not a square modulo p.
    let mut bytes = [0u8; 48];
    bytes[0] = 0x80;
    bytes[47] = 1;
    assert_eq!(
        AffinePoint::from_bytes(PointFormat::Compressed, &bytes),
        Err(Error::InvalidPointEncoding)
    );
}

proptest! {
    #[test]
    fn compressed_round_trip(p in point()) {
        let bytes = p.to_bytes(PointFormat::Compressed);
        assert_eq!(bytes.len(), COMPRESSED_POINT_SIZE);
        assert_eq!(AffinePoint::from_bytes(PointFormat::Compressed, bytes.as_bytes()), Ok(p));
    }

    #[test]
    fn uncompressed_round_trip(p in point()) {
        let bytes = p.to_bytes(PointFormat::Uncompressed);
        assert_eq!(bytes.len(), UNCOMPRESSED_POINT_SIZE);
        assert_eq!(AffinePoint::from_slice(bytes.as_bytes()), Ok(p));
    }

    #[test]
    fn compressed_flags(p in point()) {
        let bytes = p.to_compressed();
        match p.coordinates() {
            Some((_, y)) => {
                assert_eq!(bytes[0] & 0xc0, 0x80);
                assert_eq!(bytes[0] & 0x20 != 0, bool::from(y.is_odd()));
            }
            None => assert_eq!(&bytes[..], COMPRESSED_IDENTITY),
        }
    }

    #[test]
    fn flipped_parity_decodes_to_negation(p in point()) {
        let mut bytes = p.to_compressed();
        if p.coordinates().is_some() {
            bytes[0] ^= 0x20;
            assert_eq!(AffinePoint::from_compressed(&bytes).unwrap(), -p);
        }
    }
}
