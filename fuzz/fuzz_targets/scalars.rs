#![no_main]
use bls12381::{HashDrbg, MIN_SEED_LEN, ProjectivePoint, RandomSource, Scalar};
use libfuzzer_sys::fuzz_target;

fn test_scalar(k1: Scalar, k2: Scalar, k3: Scalar) {
    // Associativity
    assert_eq!(k1 + (k2 + k3), (k1 + k2) + k3);
    assert_eq!(k1 * (k2 * k3), (k1 * k2) * k3);

    // Commutativity
    assert_eq!(k1 + k2, k2 + k1);
    assert_eq!(k1 * k2, k2 * k1);

    // Identity
    assert_eq!(k1 + Scalar::ZERO, k1);
    assert_eq!(k1 * Scalar::ONE, k1);
    assert_eq!(k1 - k1, Scalar::ZERO);

    // Distributivity
    assert_eq!(k1 * (k2 + k3), k1 * k2 + k1 * k3);

    // Inverse
    if !bool::from(k1.is_zero()) {
        assert_eq!(k1 * k1.invert().unwrap(), Scalar::ONE);
    }

    // Encoding
    assert_eq!(Scalar::from_be_slice(&k1.to_be_bytes()), Ok(k1));
}

fuzz_target!(|data: &[u8]| {
    // Seeding either succeeds or reports the seed length.
    let source = RandomSource::from_seed(data);
    assert_eq!(source.is_ok(), data.len() >= MIN_SEED_LEN);

    let Ok(mut source) = source else {
        return;
    };

    let k1 = source.random_scalar().unwrap();
    let k2 = source.random_scalar().unwrap();
    let k3 = Scalar::reduce_be_slice(data);
    test_scalar(k1, k2, k3);

    // The sampler is a pure function of the seed.
    let mut replay = HashDrbg::new(data).unwrap();
    assert_eq!(Scalar::random(&mut replay), k1);

    assert_eq!(
        ProjectivePoint::mul_by_generator(&(k1 + k2)),
        ProjectivePoint::mul_by_generator(&k1) + ProjectivePoint::mul_by_generator(&k2)
    );
});
