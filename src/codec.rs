//! Conversion between 16-byte UUID values and their hexadecimal text forms.

use fstr::FStr;

use crate::{Error, Result};

/// Letter case of the hexadecimal digits produced by [`format`] and [`encode`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Case {
    /// `0123456789abcdef`
    #[default]
    Lower,

    /// `0123456789ABCDEF`
    Upper,
}

/// Placement rules for hyphens accepted by [`parse_with`].
///
/// | Policy                | `8-4-4-4-12` | 32 digits only | Hyphens elsewhere |
/// | --------------------- | ------------ | -------------- | ----------------- |
/// | [`Anywhere`]          | Accepted     | Accepted       | Accepted          |
/// | [`CanonicalOrSimple`] | Accepted     | Accepted       | Rejected          |
/// | [`Canonical`]         | Accepted     | Rejected       | Rejected          |
///
/// Under the stricter policies a hyphen found in a digit position, or any other character found in
/// a hyphen position, is reported as [`Error::InvalidChar`].
///
/// [`Anywhere`]: HyphenPolicy::Anywhere
/// [`CanonicalOrSimple`]: HyphenPolicy::CanonicalOrSimple
/// [`Canonical`]: HyphenPolicy::Canonical
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum HyphenPolicy {
    /// Strips every hyphen regardless of position or count.
    #[default]
    Anywhere,

    /// Requires hyphens at character offsets 8, 13, 18, and 23 and nowhere else.
    Canonical,

    /// Same as [`Canonical`](HyphenPolicy::Canonical), but also accepts the 32-digit form
    /// without any hyphen.
    ///
    /// The input is held to the 8-4-4-4-12 grammar if it has a hyphen at offset 8, and to the
    /// 32-digit grammar otherwise, so a stray hyphen is reported where it appears.
    CanonicalOrSimple,
}

/// Hyphen offsets of the 8-4-4-4-12 representation.
const HYPHEN_OFFSETS: [usize; 4] = [8, 13, 18, 23];

/// Parses a UUID string, ignoring hyphens wherever they appear.
///
/// Equivalent to [`parse_with`] with [`HyphenPolicy::Anywhere`].
///
/// # Errors
///
/// Returns [`Error::InvalidChar`] upon the first character that is neither a hexadecimal digit nor
/// a hyphen, or [`Error::HexCharsWrongLength`] if the number of hexadecimal digits is not 32.
///
/// # Examples
///
/// ```rust
/// use uuid7_codec::{parse, Error};
///
/// let bytes = parse("f81d4fae-7dec-11d0-a765-00a0c91e6bf6")?;
/// assert_eq!(bytes[0], 0xf8);
///
/// assert_eq!(
///     parse("f81d4fae-7dec-11d0-a765-00a0c91e6bf"),
///     Err(Error::HexCharsWrongLength { len: 31 })
/// );
/// # Ok::<(), uuid7_codec::Error>(())
/// ```
pub fn parse(input: &str) -> Result<[u8; 16]> {
    parse_with(input, HyphenPolicy::Anywhere)
}

/// Parses a UUID string under the hyphen placement rules of `policy`.
///
/// Hexadecimal digits are accepted in either case.
///
/// # Errors
///
/// Returns [`Error::InvalidChar`] upon the first character not permitted at its position, or
/// [`Error::HexCharsWrongLength`] if the number of hexadecimal digits is not 32.
pub fn parse_with(input: &str, policy: HyphenPolicy) -> Result<[u8; 16]> {
    let result = scan_digits(input, policy).map(decode_digits);
    if let Err(err) = &result {
        tracing::trace!(%err, ?policy, "rejected UUID string");
    }
    result
}

/// Collects the values of the hexadecimal digits in `input`, validating hyphens along the way.
fn scan_digits(input: &str, policy: HyphenPolicy) -> Result<[u8; 32]> {
    let fixed_hyphens = match policy {
        HyphenPolicy::Anywhere => false,
        HyphenPolicy::Canonical => true,
        HyphenPolicy::CanonicalOrSimple => input.chars().nth(HYPHEN_OFFSETS[0]) == Some('-'),
    };

    let mut digits = [0u8; 32];
    let mut len = 0;
    for (pos, (index, ch)) in input.char_indices().enumerate() {
        let hyphen_expected = if fixed_hyphens {
            HYPHEN_OFFSETS.contains(&pos)
        } else {
            policy == HyphenPolicy::Anywhere && ch == '-'
        };

        if hyphen_expected {
            if ch == '-' {
                continue;
            }
            return Err(Error::InvalidChar { ch, index });
        }

        let value = ch.to_digit(16).ok_or(Error::InvalidChar { ch, index })?;
        if let Some(e) = digits.get_mut(len) {
            *e = value as u8;
        }
        len += 1;
    }

    if len == digits.len() {
        Ok(digits)
    } else {
        Err(Error::HexCharsWrongLength { len })
    }
}

fn decode_digits(digits: [u8; 32]) -> [u8; 16] {
    let mut dst = [0u8; 16];
    for (e, pair) in dst.iter_mut().zip(digits.chunks_exact(2)) {
        *e = (pair[0] << 4) | pair[1];
    }
    dst
}

/// Returns the 8-4-4-4-12 representation of `bytes` in a stack-allocated string.
///
/// # Examples
///
/// ```rust
/// use uuid7_codec::{codec::encode, Case};
///
/// let bytes = [0xab; 16];
/// let text = encode(&bytes, Case::Upper);
/// assert_eq!(&text as &str, "ABABABAB-ABAB-ABAB-ABAB-ABABABABABAB");
/// ```
pub fn encode(bytes: &[u8; 16], case: Case) -> FStr<36> {
    let digits: &[u8; 16] = match case {
        Case::Lower => b"0123456789abcdef",
        Case::Upper => b"0123456789ABCDEF",
    };

    let mut buffer = [0u8; 36];
    let mut buf_iter = buffer.iter_mut();
    for (i, &e) in bytes.iter().enumerate() {
        if let (Some(hi), Some(lo)) = (buf_iter.next(), buf_iter.next()) {
            *hi = digits[(e >> 4) as usize];
            *lo = digits[(e & 15) as usize];
        }
        if i == 3 || i == 5 || i == 7 || i == 9 {
            if let Some(hyphen) = buf_iter.next() {
                *hyphen = b'-';
            }
        }
    }
    debug_assert!(buffer.is_ascii() && !buffer.contains(&0));
    // SAFETY: every byte of the buffer is an ASCII hex digit or hyphen
    unsafe { FStr::from_inner_unchecked(buffer) }
}

/// Returns the 8-4-4-4-12 representation of `bytes` as an owned string.
///
/// # Examples
///
/// ```rust
/// use uuid7_codec::{format, parse, Case};
///
/// let text = "017f22e2-79b0-7cc3-98c4-dc0c0c07398f";
/// assert_eq!(format(&parse(text)?, Case::Lower), text);
/// assert_eq!(format(&parse(text)?, Case::Upper), text.to_uppercase());
/// # Ok::<(), uuid7_codec::Error>(())
/// ```
pub fn format(bytes: &[u8; 16], case: Case) -> String {
    encode(bytes, case).to_string()
}

#[cfg(test)]
mod tests {
    use super::{encode, format, parse, parse_with, Case, HyphenPolicy};
    use crate::Error;
    use rand::{rngs::StdRng, RngCore, SeedableRng};

    const ALL_POLICIES: [HyphenPolicy; 3] = [
        HyphenPolicy::Anywhere,
        HyphenPolicy::Canonical,
        HyphenPolicy::CanonicalOrSimple,
    ];

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [(&'static str, [u8; 16])] {
        &[
            ("00000000-0000-0000-0000-000000000000", [0u8; 16]),
            ("ffffffff-ffff-ffff-ffff-ffffffffffff", [0xffu8; 16]),
            (
                "0180ae59-078c-7b80-b113-2fe14a615fb3",
                [
                    1, 128, 174, 89, 7, 140, 123, 128, 177, 19, 47, 225, 74, 97, 95, 179,
                ],
            ),
            (
                "0180ae59-0791-7e79-8804-02ce2b5bc8d2",
                [
                    1, 128, 174, 89, 7, 145, 126, 121, 136, 4, 2, 206, 43, 91, 200, 210,
                ],
            ),
            (
                "f81d4fae-7dec-11d0-a765-00a0c91e6bf6",
                [
                    0xf8, 0x1d, 0x4f, 0xae, 0x7d, 0xec, 0x11, 0xd0, 0xa7, 0x65, 0x00, 0xa0, 0xc9,
                    0x1e, 0x6b, 0xf6,
                ],
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (text, bytes) in prepare_cases() {
            assert_eq!(&format(bytes, Case::Lower), text);
            assert_eq!(format(bytes, Case::Upper), text.to_uppercase());
            assert_eq!(&encode(bytes, Case::Lower) as &str, *text);
            for policy in ALL_POLICIES {
                assert_eq!(parse_with(text, policy), Ok(*bytes));
                assert_eq!(parse_with(&text.to_uppercase(), policy), Ok(*bytes));
            }
        }
    }

    /// Parses formatted random values back to same bytes
    #[test]
    fn parses_formatted_random_values_back_to_same_bytes() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..10_000 {
            let mut bytes = [0u8; 16];
            rng.fill_bytes(&mut bytes);
            assert_eq!(parse(&format(&bytes, Case::Lower)), Ok(bytes));
            assert_eq!(parse(&format(&bytes, Case::Upper)), Ok(bytes));
        }
    }

    /// Rejects strings with wrong number of digits
    #[test]
    fn rejects_strings_with_wrong_number_of_digits() {
        assert_eq!(
            parse("f81d4fae-7dec-11d0-a765-00a0c91e6bf"),
            Err(Error::HexCharsWrongLength { len: 31 })
        );
        assert_eq!(
            parse("f81d4fae-7dec-11d0-a765-00a0c91e6bf6a"),
            Err(Error::HexCharsWrongLength { len: 33 })
        );
        assert_eq!(parse(""), Err(Error::HexCharsWrongLength { len: 0 }));
        assert_eq!(parse("----"), Err(Error::HexCharsWrongLength { len: 0 }));
        for policy in ALL_POLICIES {
            assert_eq!(
                parse_with("f81d4fae-7dec-11d0-a765-00a0c91e6bf", policy),
                Err(Error::HexCharsWrongLength { len: 31 })
            );
        }
    }

    /// Rejects strings containing non-hexadecimal characters
    #[test]
    fn rejects_strings_containing_non_hexadecimal_characters() {
        assert_eq!(
            parse("g81d4fae-7dec-11d0-a765-00a0c91e6bf6"),
            Err(Error::InvalidChar { ch: 'g', index: 0 })
        );

        let cases = [
            (" 0180a8f0-5b82-75b4-9fef-ecad657c30bb", ' ', 0),
            ("0180a8f0-5b84-7438-ab50-f0626f78002b ", ' ', 36),
            ("+0180a8f0-5b84-7438-ab50-f06405d35edb", '+', 0),
            ("{0180a8f0-5b84-7438-ab50-f06ac2e5e082}", '{', 0),
            ("0180a8f0-5b84-74 8-ab50-f06bed27bdc7", ' ', 16),
            ("0180a8g0-5b84-7438-ab50-f06c91175b8a", 'g', 6),
            ("0180a8f0-5b84-7438-ab50_f06d3ea24429", '_', 23),
            ("0180a8f0-5b84-7438-ab50-f06d3ea2442é", 'é', 35),
        ];
        for (text, ch, index) in cases {
            for policy in ALL_POLICIES {
                assert_eq!(
                    parse_with(text, policy),
                    Err(Error::InvalidChar { ch, index }),
                    "{:?} under {:?}",
                    text,
                    policy
                );
            }
        }
    }

    /// Reports invalid character before wrong length
    #[test]
    fn reports_invalid_character_before_wrong_length() {
        assert_eq!(
            parse("0123456789abcdef0123456789abcdef0123z"),
            Err(Error::InvalidChar { ch: 'z', index: 36 })
        );
    }

    /// Tolerates hyphens anywhere by default
    #[test]
    fn tolerates_hyphens_anywhere_by_default() {
        let expected = parse("0180a8f0-5b84-7438-ab50-f068decfbfd7");
        assert!(expected.is_ok());
        let cases = [
            "0180a8f05b847438ab50f068decfbfd7",
            "0180a8f0-5b847438-ab50-f068decfbfd7",
            "-0180a8f0-5b84-7438-ab50-f068decfbfd7-",
            "0-1-8-0-a8f05b847438ab50f068decfbfd7",
            "0180a8f0--5b84--7438--ab50--f068decfbfd7",
        ];
        for text in cases {
            assert_eq!(parse(text), expected);
            assert_eq!(parse_with(text, HyphenPolicy::Anywhere), expected);
        }
    }

    /// Requires hyphens at fixed offsets under canonical policy
    #[test]
    fn requires_hyphens_at_fixed_offsets_under_canonical_policy() {
        let policy = HyphenPolicy::Canonical;
        assert_eq!(
            parse_with("0180a8f05b847438ab50f068decfbfd7", policy),
            Err(Error::InvalidChar { ch: '5', index: 8 })
        );
        assert_eq!(
            parse_with("0180a8f0-5b847438-ab50-f068decfbfd7", policy),
            Err(Error::InvalidChar { ch: '7', index: 13 })
        );
        assert_eq!(
            parse_with("-0180a8f0-5b84-7438-ab50-f068decfbfd7", policy),
            Err(Error::InvalidChar { ch: '-', index: 0 })
        );
        assert_eq!(
            parse_with("0180a8f0-5b84-7438-ab50-f068decfbfd7-", policy),
            Err(Error::InvalidChar { ch: '-', index: 36 })
        );
        assert_eq!(
            parse_with("0180a8f0-5b84-7438-ab50-f068decf", policy),
            Err(Error::HexCharsWrongLength { len: 28 })
        );
    }

    /// Accepts simple form under canonical or simple policy
    #[test]
    fn accepts_simple_form_under_canonical_or_simple_policy() {
        let policy = HyphenPolicy::CanonicalOrSimple;
        let expected = parse("0180a8f0-5b84-7438-ab50-f068decfbfd7");
        assert_eq!(
            parse_with("0180a8f05b847438ab50f068decfbfd7", policy),
            expected
        );
        assert_eq!(
            parse_with("0180A8F05B847438AB50F068DECFBFD7", policy),
            expected
        );
        assert_eq!(
            parse_with("0180a8f0-5b847438-ab50-f068decfbfd7", policy),
            Err(Error::InvalidChar { ch: '7', index: 13 })
        );
        assert_eq!(
            parse_with("0180a8f05b847438ab50f068decfbfd7-", policy),
            Err(Error::InvalidChar { ch: '-', index: 32 })
        );
        assert_eq!(
            parse_with("0180a8f05b847438-ab50f068decfbfd7", policy),
            Err(Error::InvalidChar { ch: '-', index: 16 })
        );
        assert_eq!(
            parse_with("0180a8f0-5b84-7438-ab50-f068decfbfd7-", policy),
            Err(Error::InvalidChar { ch: '-', index: 36 })
        );
    }

    /// Defaults to permissive policy and lowercase
    #[test]
    fn defaults_to_permissive_policy_and_lowercase() {
        assert_eq!(HyphenPolicy::default(), HyphenPolicy::Anywhere);
        assert_eq!(Case::default(), Case::Lower);
    }
}
