#![no_main]
use bls12381::{AffinePoint, PointFormat, ProjectivePoint, Scalar};
use libfuzzer_sys::fuzz_target;
use rand_chacha::{ChaChaRng, rand_core::SeedableRng};

fn test_group(p1: ProjectivePoint, p2: ProjectivePoint, s: Scalar) {
    let sum = p1 + p2;
    let scalar_mul = p1 * s;

    // Test that addition and doubling are consistent
    assert_eq!(p1.double(), p1 + p1 - ProjectivePoint::identity());

    // Test that negation works correctly
    assert!(bool::from((sum + (-sum)).is_identity()));

    // Test scalar multiplication distributive property
    assert_eq!(scalar_mul + scalar_mul, p1 * (s + s));
}

fn test_round_trip(p: &AffinePoint) {
    for format in [PointFormat::Compressed, PointFormat::Uncompressed] {
        let bytes = p.to_bytes(format);
        assert_eq!(AffinePoint::from_bytes(format, bytes.as_bytes()).as_ref(), Ok(p));
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 160 {
        return;
    }

    let seed: [u8; 32] = data[..32].try_into().unwrap();
    let mut rng = ChaChaRng::from_seed(seed);

    // Arbitrary bytes must either decode to a valid point or be rejected.
    let decoded = [
        AffinePoint::from_slice(&data[16..16 + 48]),
        AffinePoint::from_slice(&data[32..32 + 96]),
        AffinePoint::from_slice(&data[64..64 + usize::from(data[3] & 0x5f)]),
    ];

    for p in decoded.iter().flatten() {
        test_round_trip(p);
    }

    // Mostly-valid encodings with a few flipped bits exercise the flag checks.
    let q = ProjectivePoint::mul_by_generator(&Scalar::random(&mut rng)).to_affine();
    let mut compressed = q.to_compressed();
    compressed[usize::from(data[4]) % 48] ^= data[5];
    if let Ok(p) = AffinePoint::from_slice(&compressed) {
        test_round_trip(&p);
    }

    let p1 = decoded[0].map(ProjectivePoint::from).unwrap_or_else(|_| q.into());
    let p2 = decoded[1].map(ProjectivePoint::from).unwrap_or_else(|_| ProjectivePoint::generator());
    test_group(p1, p2, Scalar::reduce_be_slice(&data[128..160]));
});
