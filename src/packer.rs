//! Big-endian packing of unsigned integers into fixed-length byte arrays.
//!
//! The target length is a const generic parameter checked against the width of the integer type
//! when the function is instantiated, so a zero-length or over-wide request fails to compile:
//!
//! ```compile_fail
//! let _ = uuid7_codec::packer::pack_be::<u16, 3>(0);
//! ```
//!
//! ```compile_fail
//! let _ = uuid7_codec::packer::pack_be::<u64, 0>(0);
//! ```

mod sealed {
    pub trait Sealed {}
}

/// Unsigned integer types accepted by [`pack_be`] and [`unpack_be`].
///
/// This trait is sealed and implemented for `u8`, `u16`, `u32`, `u64`, and `u128`.
pub trait Packable: sealed::Sealed + Copy + Into<u128> {
    /// Width of the type in bytes.
    const BYTES: usize;

    /// Converts from `u128`, discarding the high-order bits that do not fit.
    fn truncate_from(value: u128) -> Self;
}

macro_rules! impl_packable {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Packable for $t {
            const BYTES: usize = std::mem::size_of::<$t>();

            fn truncate_from(value: u128) -> Self {
                value as $t
            }
        }
    )*};
}

impl_packable!(u8, u16, u32, u64, u128);

const fn assert_width<T: Packable, const N: usize>() {
    assert!(
        0 < N && N <= T::BYTES,
        "byte count must be between 1 and the width of the integer type"
    );
}

/// Returns the `N` least significant bytes of `value`, most significant byte first.
///
/// Choosing an `N` smaller than the width of `T` discards the high-order bytes.
///
/// # Examples
///
/// ```rust
/// use uuid7_codec::packer::pack_be;
///
/// assert_eq!(pack_be::<u64, 6>(0x0123_4567_89ab_cdef), [0x45, 0x67, 0x89, 0xab, 0xcd, 0xef]);
/// assert_eq!(pack_be::<u16, 2>(0x7abc), [0x7a, 0xbc]);
/// ```
pub fn pack_be<T: Packable, const N: usize>(value: T) -> [u8; N] {
    const { assert_width::<T, N>() };

    let wide = value.into().to_be_bytes();
    let mut dst = [0u8; N];
    dst.copy_from_slice(&wide[wide.len() - N..]);
    dst
}

/// Reads `N` bytes, most significant first, into the low-order bytes of a `T`.
///
/// # Examples
///
/// ```rust
/// use uuid7_codec::packer::unpack_be;
///
/// assert_eq!(unpack_be::<u64, 6>([0x45, 0x67, 0x89, 0xab, 0xcd, 0xef]), 0x4567_89ab_cdef);
/// ```
pub fn unpack_be<T: Packable, const N: usize>(bytes: [u8; N]) -> T {
    const { assert_width::<T, N>() };

    let value = bytes
        .iter()
        .fold(0u128, |acc, &e| (acc << 8) | u128::from(e));
    T::truncate_from(value)
}
