//! Statistical check that sampled scalars are uniform over `[0, r)`.

use bls12381::{ORDER, RandomSource, elliptic_curve::bigint::Encoding};

const SAMPLES: usize = 10_000;
const BUCKETS: usize = 16;

/// 99.9th percentile of the chi-squared distribution with 15 degrees of
/// freedom is 37.70.
const CHI_SQUARED_LIMIT: f64 = 40.0;

fn top_u64(bytes: &[u8; 32]) -> u64 {
    let mut top = [0u8; 8];
    top.copy_from_slice(&bytes[..8]);
    u64::from_be_bytes(top)
}

#[test]
fn scalars_fill_buckets_evenly() {
    let order_top = top_u64(&ORDER.to_be_bytes()) as u128 + 1;
    let mut counts = [0usize; BUCKETS];

    for i in 0..SAMPLES {
        let mut seed = [0u8; 32];
        seed[..8].copy_from_slice(&(i as u64).to_be_bytes());

        let k = RandomSource::from_seed(&seed)
            .and_then(|mut source| source.random_scalar())
            .unwrap();

        let bucket = (top_u64(&k.to_be_bytes()) as u128 * BUCKETS as u128 / order_top) as usize;
        counts[bucket] += 1;
    }

    let expected = SAMPLES as f64 / BUCKETS as f64;
    let chi_squared: f64 = counts
        .iter()
        .map(|&n| {
            let d = n as f64 - expected;
            d * d / expected
        })
        .sum();

    assert!(
        chi_squared < CHI_SQUARED_LIMIT,
        "chi-squared {chi_squared:.2} over {BUCKETS} buckets: {counts:?}"
    );
}
