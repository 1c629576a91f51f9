//! Default generator and entry point functions

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::cell::RefCell;

use rand::rngs::{adapter::ReseedingRng, OsRng};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha12Core;

use crate::generator::{RandSource, V7Generator};
use crate::{Result, Uuid};

thread_local! {
    static DEFAULT_GENERATOR: RefCell<V7Generator<DefaultRng>> = RefCell::new(new_default_generator());
}

/// The random number generator of the thread-local default generator.
///
/// Employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to emulate the strategy used by
/// [`rand::rngs::ThreadRng`].
#[derive(Debug)]
struct DefaultRng(ReseedingRng<ChaCha12Core, OsRng>);

impl RandSource for DefaultRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }
}

fn new_default_generator() -> V7Generator<DefaultRng> {
    tracing::debug!("seeding default UUIDv7 generator");
    V7Generator::new(DefaultRng(ReseedingRng::new(
        ChaCha12Core::from_entropy(),
        1024 * 64,
        OsRng,
    )))
}

/// Generates a UUIDv7 object.
///
/// This function employs a thread-local generator and needs no locking. On Unix, this function
/// reseeds the generator when the process ID changes (i.e. upon process forks) to prevent
/// collisions across processes.
///
/// # Errors
///
/// Returns [`Error::InvalidTimestamp`](crate::Error::InvalidTimestamp) if the system clock is set
/// before the Unix epoch.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid7_codec::uuid7()?;
/// println!("{uuid}"); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// # Ok::<(), uuid7_codec::Error>(())
/// ```
pub fn uuid7() -> Result<Uuid> {
    DEFAULT_GENERATOR.with(|g| {
        if unix_fork_safety::pid_changed() {
            tracing::debug!("process ID changed; discarding inherited generator state");
            g.replace(new_default_generator());
        }

        g.borrow_mut().generate()
    })
}

/// Generates a UUIDv7 and returns its lowercase 8-4-4-4-12 string representation.
///
/// # Errors
///
/// Returns [`Error::InvalidTimestamp`](crate::Error::InvalidTimestamp) if the system clock is set
/// before the Unix epoch.
///
/// # Examples
///
/// ```rust
/// let text = uuid7_codec::uuid7_string()?;
/// assert_eq!(text.len(), 36);
/// # Ok::<(), uuid7_codec::Error>(())
/// ```
pub fn uuid7_string() -> Result<String> {
    uuid7().map(String::from)
}

#[cfg(unix)]
mod unix_fork_safety {
    use std::{cell::Cell, process};

    thread_local! {
        static PID: Cell<u32> = Cell::new(process::id());
    }

    /// Returns true if the process ID has changed since the last call on this thread.
    pub fn pid_changed() -> bool {
        PID.with(|last_pid| {
            let pid = process::id();
            pid != last_pid.replace(pid)
        })
    }
}

#[cfg(not(unix))]
mod unix_fork_safety {
    pub const fn pid_changed() -> bool {
        false
    }
}
