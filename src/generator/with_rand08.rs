//! Integration with `rand` (v0.8) crate.
//!
//! Only generators marked with [`CryptoRng`] are accepted:
//!
//! ```compile_fail
//! use uuid7_codec::V7Generator;
//!
//! let _ = V7Generator::with_rand08(rand::rngs::mock::StepRng::new(0, 1));
//! ```

use super::{RandSource, V7Generator};
use rand::{CryptoRng, RngCore};

/// An adapter that implements [`RandSource`] for cryptographically secure [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore + CryptoRng> RandSource for Adapter<T> {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }
}

impl<T: RngCore + CryptoRng> V7Generator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] and [`CryptoRng`] from `rand` (v0.8) crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid7_codec::V7Generator;
    ///
    /// let mut g = V7Generator::with_rand08(rand::thread_rng());
    /// println!("{}", g.generate()?);
    /// # Ok::<(), uuid7_codec::Error>(())
    /// ```
    pub const fn with_rand08(rng: T) -> Self {
        Self::new(Adapter(rng))
    }
}
