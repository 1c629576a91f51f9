//! UUID version 7 codec: generation, strict parsing, canonical formatting, and field inspection
//!
//! ```rust
//! # #[cfg(feature = "global_gen")]
//! # {
//! let uuid = uuid7_codec::uuid7()?;
//! println!("{}", uuid); // e.g. "01809424-3e59-7c05-9219-566f82fff672"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let parsed: uuid7_codec::Uuid = "01809424-3e59-7c05-9219-566f82fff672".parse()?;
//! assert_eq!(parsed.version(), 7);
//! assert_eq!(parsed.variant(), uuid7_codec::Variant::RfcCompliant);
//! # }
//! # Ok::<(), uuid7_codec::Error>(())
//! ```
//!
//! See [RFC 9562](https://www.rfc-editor.org/rfc/rfc9562).
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |        rand_a         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                        rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 48-bit `unix_ts_ms` field is dedicated to the Unix timestamp in
//!   milliseconds. Timestamps that do not fit in 48 bits wrap around.
//! - The 4-bit `ver` field is set at `0111`.
//! - The 12-bit `rand_a` field is filled with a cryptographically strong random number.
//! - The 2-bit `var` field is set at `10`.
//! - The remaining 62 `rand_b` bits are filled with a cryptographically strong random
//!   number.
//!
//! Identifiers generated within the same millisecond are ordered only by their random bits; no
//! counter is carried between calls, so the generator holds no state besides its clock and random
//! number sources.
//!
//! # Parsing
//!
//! [`parse`] accepts any string whose non-hyphen characters are exactly 32 hexadecimal digits.
//! Stricter grammars are available through [`parse_with`] and [`HyphenPolicy`]:
//!
//! ```rust
//! use uuid7_codec::{parse_with, Error, HyphenPolicy};
//!
//! assert!(parse_with("0180a8f05b847438ab50f068decfbfd7", HyphenPolicy::Anywhere).is_ok());
//! assert_eq!(
//!     parse_with("0180a8f05b847438ab50f068decfbfd7", HyphenPolicy::Canonical),
//!     Err(Error::InvalidChar { ch: '5', index: 8 })
//! );
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::{Error, Result};

pub mod packer;

pub mod codec;
pub use codec::{format, parse, parse_with, Case, HyphenPolicy};

pub mod inspect;
pub use inspect::{variant_of, version_of, Variant, Version};

mod uuid;
pub use self::uuid::Uuid;

pub mod generator;
pub use generator::V7Generator;

mod entry;
#[cfg(feature = "global_gen")]
pub use entry::{uuid7, uuid7_string};
