//! UUIDv7 generator and related types.

use crate::packer::{pack_be, unpack_be};
use crate::{Error, Result, Uuid};

pub mod with_rand08;


/// A trait that defines the minimum random number generator interface for [`V7Generator`].
///
/// Implementations should be cryptographically secure. A source shared by multiple threads must
/// provide its own synchronization; [`V7Generator`] takes it by `&mut`.
pub trait RandSource {
    /// Returns the next random `u32`.
    fn next_u32(&mut self) -> u32;

    /// Returns the next random `u64`.
    fn next_u64(&mut self) -> u64;
}

/// A trait that defines the minimum system clock interface for [`V7Generator`].
pub trait TimeSource {
    /// Returns the current Unix timestamp in milliseconds, negative if the clock is set before the
    /// Unix epoch.
    fn unix_ts_ms(&mut self) -> i64;
}

/// The default [`TimeSource`] that reads [`std::time::SystemTime`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    fn unix_ts_ms(&mut self) -> i64 {
        use std::time;
        match time::SystemTime::now().duration_since(time::UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX),
            Err(err) => millis_before_epoch(err.duration()),
        }
    }
}

/// Converts the distance of a pre-epoch instant from the epoch into a negative millisecond count,
/// rounding toward negative infinity so that any pre-epoch instant is negative.
fn millis_before_epoch(before: std::time::Duration) -> i64 {
    let ms = before.as_millis() + u128::from(before.subsec_nanos() % 1_000_000 != 0);
    i64::try_from(ms).map_or(i64::MIN, |ms| -ms)
}

/// Represents a UUIDv7 generator that composes identifiers from a clock and a random number
/// generator.
///
/// The generator carries no state between calls other than its two sources; identifiers created
/// within the same millisecond are ordered only by their random bits.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use std::{sync, thread};
/// use uuid7_codec::V7Generator;
///
/// let g = sync::Arc::new(sync::Mutex::new(V7Generator::with_rand08(OsRng)));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate().unwrap(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V7Generator<R, T = StdSystemTime> {
    /// The random number generator used by the generator.
    rand_source: R,

    /// The system clock used by the generator.
    time_source: T,
}

impl<R: RandSource> V7Generator<R> {
    /// Creates a generator instance that reads the system clock.
    pub const fn new(rand_source: R) -> Self {
        Self {
            rand_source,
            time_source: StdSystemTime,
        }
    }
}

impl<R: RandSource, T: TimeSource> V7Generator<R, T> {
    /// Creates a generator instance with specified random number generator and system clock.
    pub const fn with_rand_and_time_sources(rand_source: R, time_source: T) -> Self {
        Self {
            rand_source,
            time_source,
        }
    }

    /// Generates a new UUIDv7 object from the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimestamp`] if the clock reports a time before the Unix epoch.
    pub fn generate(&mut self) -> Result<Uuid> {
        let unix_ts_ms = self.time_source.unix_ts_ms();
        self.generate_core(unix_ts_ms)
    }

    /// Generates a new UUIDv7 from the current timestamp and returns its lowercase 8-4-4-4-12
    /// string representation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimestamp`] if the clock reports a time before the Unix epoch.
    pub fn generate_string(&mut self) -> Result<String> {
        self.generate().map(String::from)
    }
}

impl<R: RandSource, T> V7Generator<R, T> {
    /// Generates a new UUIDv7 object from the `unix_ts_ms` passed.
    ///
    /// Only the least significant 48 bits of `unix_ts_ms` are stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimestamp`] if `unix_ts_ms` is negative.
    pub fn generate_core(&mut self, unix_ts_ms: i64) -> Result<Uuid> {
        const MAX_RAND_A: u32 = (1 << 12) - 1;
        const MAX_RAND_B: u64 = (1 << 62) - 1;

        let Ok(unix_ts_ms) = u64::try_from(unix_ts_ms) else {
            tracing::warn!(unix_ts_ms, "system clock is set before the Unix epoch");
            return Err(Error::InvalidTimestamp { unix_ts_ms });
        };

        let unix_ts_ms = unpack_be::<u64, 6>(pack_be::<u64, 6>(unix_ts_ms));
        let rand_a = (self.rand_source.next_u32() & MAX_RAND_A) as u16;
        let rand_b = self.rand_source.next_u64() & MAX_RAND_B;
        Ok(Uuid::from_fields_v7(unix_ts_ms, rand_a, rand_b))
    }
}
