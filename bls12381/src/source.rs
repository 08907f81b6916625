//! Seedable randomness source and scalar sampling.

use crate::{Error, HashDrbg, Result, Scalar};

/// Explicitly owned random state.
///
/// Created unseeded; every sampling operation fails with
/// [`Error::UninitializedSource`] until [`RandomSource::seed`] succeeds.
/// Seeding discards any previous state, so equal seeds always yield equal
/// streams.
#[derive(Debug, Default)]
pub struct RandomSource {
    drbg: Option<HashDrbg>,
}

impl RandomSource {
    /// Create an unseeded source.
    pub const fn new() -> Self {
        Self { drbg: None }
    }

    /// Create a source seeded with `seed`.
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        let mut source = Self::new();
        source.seed(seed)?;
        Ok(source)
    }

    /// (Re)initialize the state from `seed`.
    ///
    /// On [`Error::InsufficientEntropy`] the previous state is kept.
    pub fn seed(&mut self, seed: &[u8]) -> Result<()> {
        self.drbg = Some(HashDrbg::new(seed)?);
        Ok(())
    }

    /// Has this source been seeded?
    pub fn is_seeded(&self) -> bool {
        self.drbg.is_some()
    }

    /// Borrow the underlying generator, e.g. to pass it as an RNG to
    /// another API.
    pub fn rng(&mut self) -> Result<&mut HashDrbg> {
        self.drbg.as_mut().ok_or(Error::UninitializedSource)
    }

    /// Fill `dest` with pseudo-random bytes.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        self.rng()?.generate(dest);
        Ok(())
    }

    /// Sample a uniformly random scalar in `[0, r)`.
    pub fn random_scalar(&mut self) -> Result<Scalar> {
        Ok(Scalar::random(self.rng()?))
    }
}

#[cfg(feature = "std")]
pub use self::shared::SharedRandomSource;

#[cfg(feature = "std")]
mod shared {
    use super::RandomSource;
    use crate::{Result, Scalar};
    use std::sync::{Mutex, MutexGuard, PoisonError};

    /// [`RandomSource`] behind a mutex, for sharing between threads.
    ///
    /// Each operation holds the lock for its whole duration, so concurrent
    /// callers observe disjoint parts of the output stream.
    #[derive(Debug, Default)]
    pub struct SharedRandomSource {
        inner: Mutex<RandomSource>,
    }

    impl SharedRandomSource {
        /// Create an unseeded shared source.
        pub const fn new() -> Self {
            Self {
                inner: Mutex::new(RandomSource::new()),
            }
        }

        /// (Re)initialize the state from `seed`.
        pub fn seed(&self, seed: &[u8]) -> Result<()> {
            self.lock().seed(seed)
        }

        /// Has this source been seeded?
        pub fn is_seeded(&self) -> bool {
            self.lock().is_seeded()
        }

        /// Fill `dest` with pseudo-random bytes.
        pub fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
            self.lock().fill_bytes(dest)
        }

        /// Sample a uniformly random scalar in `[0, r)`.
        pub fn random_scalar(&self) -> Result<Scalar> {
            self.lock().random_scalar()
        }

        fn lock(&self) -> MutexGuard<'_, RandomSource> {
            // State is only ever replaced wholesale; a poisoned value is consistent.
            self.inner.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }

    impl From<RandomSource> for SharedRandomSource {
        fn from(source: RandomSource) -> Self {
            Self {
                inner: Mutex::new(source),
            }
        }
    }
}
