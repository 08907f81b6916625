//! Hash_DRBG over SHA-256 (NIST SP 800-90A Rev. 1, section 10.1.1).
//!
//! Only instantiation and generation are implemented: there is no reseed
//! counter limit, no prediction resistance and no additional input.
//! Seeding again means instantiating a fresh generator.

use crate::{Error, MIN_SEED_LEN, Result};
use elliptic_curve::{
    rand_core::{self, CryptoRng, RngCore},
    zeroize::{Zeroize, ZeroizeOnDrop},
};
use sha2::{Digest, Sha256};

/// `seedlen` for SHA-256, in bytes (440 bits).
const SEED_LEN: usize = 55;

/// SHA-256 output length in bytes.
const OUT_LEN: usize = 32;

/// Largest request served by a single generate call, in bytes.
const MAX_REQUEST: usize = 1 << 16;

/// Deterministic random bit generator instantiated from a seed.
///
/// Two generators instantiated with the same seed produce the same byte
/// stream. The internal state is zeroized on drop.
#[derive(Clone)]
pub struct HashDrbg {
    v: [u8; SEED_LEN],
    c: [u8; SEED_LEN],
    reseed_counter: u64,
}

impl HashDrbg {
    /// Instantiate a generator with `seed` as the entropy input.
    ///
    /// Fails with [`Error::InsufficientEntropy`] if `seed` is shorter than
    /// [`MIN_SEED_LEN`].
    pub fn new(seed: &[u8]) -> Result<Self> {
        if seed.len() < MIN_SEED_LEN {
            return Err(Error::InsufficientEntropy { len: seed.len() });
        }

        let v = hash_df(&[seed]);
        let c = hash_df(&[&[0x00], &v]);

        Ok(Self {
            v,
            c,
            reseed_counter: 1,
        })
    }

    /// Fill `dest` with output, in requests of at most 64 KiB.
    pub fn generate(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(MAX_REQUEST) {
            self.generate_request(chunk);
        }
    }

    fn generate_request(&mut self, dest: &mut [u8]) {
        let mut data = self.v;
        for block in dest.chunks_mut(OUT_LEN) {
            let w = Sha256::digest(data);
            block.copy_from_slice(&w[..block.len()]);
            add_assign_be(&mut data, &[1]);
        }
        data.zeroize();

        let h = Sha256::new()
            .chain_update([0x03u8])
            .chain_update(self.v)
            .finalize();

        let c = self.c;
        add_assign_be(&mut self.v, &h);
        add_assign_be(&mut self.v, &c);
        add_assign_be(&mut self.v, &self.reseed_counter.to_be_bytes());
        self.reseed_counter += 1;
    }
}

/// `Hash_df`: derive `SEED_LEN` bytes from the concatenation of `inputs`.
fn hash_df(inputs: &[&[u8]]) -> [u8; SEED_LEN] {
    let no_of_bits = (SEED_LEN as u32 * 8).to_be_bytes();
    let mut out = [0u8; SEED_LEN];

    for (counter, block) in (1u8..).zip(out.chunks_mut(OUT_LEN)) {
        let mut hasher = Sha256::new().chain_update([counter]).chain_update(no_of_bits);
        for input in inputs {
            hasher.update(input);
        }
        let digest = hasher.finalize();
        block.copy_from_slice(&digest[..block.len()]);
    }

    out
}

/// `acc = (acc + rhs) mod 2^(8 * SEED_LEN)` on big-endian byte strings.
fn add_assign_be(acc: &mut [u8; SEED_LEN], rhs: &[u8]) {
    debug_assert!(rhs.len() <= SEED_LEN);

    let mut carry = 0u16;
    let mut rhs = rhs.iter().rev();
    for byte in acc.iter_mut().rev() {
        let sum = *byte as u16 + *rhs.next().unwrap_or(&0) as u16 + carry;
        *byte = sum as u8;
        carry = sum >> 8;
    }
}

impl RngCore for HashDrbg {
    fn next_u32(&mut self) -> u32 {
        rand_core::impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        rand_core::impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.generate(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand_core::Error> {
        self.generate(dest);
        Ok(())
    }
}

impl CryptoRng for HashDrbg {}

impl Drop for HashDrbg {
    fn drop(&mut self) {
        self.v.zeroize();
        self.c.zeroize();
        self.reseed_counter.zeroize();
    }
}

impl ZeroizeOnDrop for HashDrbg {}

impl core::fmt::Debug for HashDrbg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HashDrbg").finish_non_exhaustive()
    }
}
