/// Error returned by the parsing and generation functions.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum Error {
    /// A character that is neither a hexadecimal digit nor an acceptable hyphen was found.
    #[error("invalid character {ch:?} at index {index}")]
    InvalidChar {
        /// The offending character.
        ch: char,
        /// Byte offset of the character in the input string.
        index: usize,
    },

    /// The input did not contain exactly 32 hexadecimal digits.
    #[error("expected 32 hexadecimal digits, found {len}")]
    HexCharsWrongLength {
        /// Number of hexadecimal digits found.
        len: usize,
    },

    /// The system clock reported a time before the Unix epoch.
    #[error("timestamp {unix_ts_ms} ms is before the Unix epoch")]
    InvalidTimestamp {
        /// The millisecond count reported by the clock.
        unix_ts_ms: i64,
    },
}

/// Result type for the parsing and generation functions.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::Error;

    /// Renders readable messages
    #[test]
    fn renders_readable_messages() {
        assert_eq!(
            Error::InvalidChar { ch: 'g', index: 0 }.to_string(),
            "invalid character 'g' at index 0"
        );
        assert_eq!(
            Error::HexCharsWrongLength { len: 31 }.to_string(),
            "expected 32 hexadecimal digits, found 31"
        );
        assert_eq!(
            Error::InvalidTimestamp { unix_ts_ms: -1 }.to_string(),
            "timestamp -1 ms is before the Unix epoch"
        );
    }
}
