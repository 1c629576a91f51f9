//! Classification of the variant and version fields of a UUID.

use std::fmt;

/// Bitmask of the NCS backward compatibility variant (`0xxxxxxx`).
pub const VARIANT_NCS_RESERVED: u8 = 0x00;

/// Bitmask of the variant specified by RFC 9562 (`10xxxxxx`).
pub const VARIANT_RFC_COMPLIANT: u8 = 0x80;

/// Bitmask of the Microsoft backward compatibility variant (`110xxxxx`).
pub const VARIANT_MICROSOFT_RESERVED: u8 = 0xc0;

/// Bitmask of the variant reserved for future definition (`111xxxxx`).
pub const VARIANT_FUTURE_RESERVED: u8 = 0xe0;

/// Octet carrying the variant field.
const VARIANT_OCTET: usize = 8;

/// Octet carrying the version field in its upper nibble.
const VERSION_OCTET: usize = 6;

/// Layout family indicated by the variant field of a UUID.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Variant {
    /// `0xxxxxxx`: reserved for NCS backward compatibility, including the Nil UUID.
    NcsReserved,

    /// `10xxxxxx`: the layout used by UUID versions 1 through 8.
    RfcCompliant,

    /// `110xxxxx`: reserved for Microsoft backward compatibility.
    MicrosoftReserved,

    /// `111xxxxx`: reserved for future definition, including the Max UUID.
    FutureReserved,
}

impl Variant {
    /// Returns the bitmask that identifies this variant in octet 8.
    pub const fn mask(self) -> u8 {
        match self {
            Self::NcsReserved => VARIANT_NCS_RESERVED,
            Self::RfcCompliant => VARIANT_RFC_COMPLIANT,
            Self::MicrosoftReserved => VARIANT_MICROSOFT_RESERVED,
            Self::FutureReserved => VARIANT_FUTURE_RESERVED,
        }
    }
}

/// Returns the variant of the UUID `bytes`.
///
/// The masks are tried from the most specific one, and the bits below the variant field are
/// ignored.
///
/// # Examples
///
/// ```rust
/// use uuid7_codec::{variant_of, Variant};
///
/// let mut bytes = [0u8; 16];
/// bytes[8] = 0xbf;
/// assert_eq!(variant_of(&bytes), Variant::RfcCompliant);
/// ```
pub fn variant_of(bytes: &[u8; 16]) -> Variant {
    let octet = bytes[VARIANT_OCTET];
    [
        Variant::FutureReserved,
        Variant::MicrosoftReserved,
        Variant::RfcCompliant,
    ]
    .into_iter()
    .find(|v| octet & v.mask() == v.mask())
    .unwrap_or(Variant::NcsReserved)
}

/// Returns the version number (0 through 15) found in the upper nibble of octet 6 of `bytes`.
///
/// The number is meaningful as a version only for the [`Variant::RfcCompliant`] variant.
pub fn version_of(bytes: &[u8; 16]) -> u8 {
    bytes[VERSION_OCTET] >> 4
}

/// Tag of each possible value of the version field.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Version {
    /// 0: unused.
    Unused,

    /// 1: Gregorian time-based.
    GregorianTime,

    /// 2: DCE Security.
    DceSecurity,

    /// 3: name-based with MD5.
    Md5,

    /// 4: random.
    Random,

    /// 5: name-based with SHA-1.
    Sha1,

    /// 6: reordered Gregorian time-based.
    ReorderedGregorianTime,

    /// 7: Unix Epoch time-based.
    UnixEpochTime,

    /// 8: custom.
    Custom,

    /// 9 through 15: reserved for future definition.
    Reserved(u8),
}

impl Version {
    /// Returns the tag of a 4-bit version number, ignoring the upper nibble of `value`.
    pub const fn from_nibble(value: u8) -> Self {
        match value & 0x0f {
            0 => Self::Unused,
            1 => Self::GregorianTime,
            2 => Self::DceSecurity,
            3 => Self::Md5,
            4 => Self::Random,
            5 => Self::Sha1,
            6 => Self::ReorderedGregorianTime,
            7 => Self::UnixEpochTime,
            8 => Self::Custom,
            n => Self::Reserved(n),
        }
    }

    /// Returns the version number.
    pub const fn number(self) -> u8 {
        match self {
            Self::Unused => 0,
            Self::GregorianTime => 1,
            Self::DceSecurity => 2,
            Self::Md5 => 3,
            Self::Random => 4,
            Self::Sha1 => 5,
            Self::ReorderedGregorianTime => 6,
            Self::UnixEpochTime => 7,
            Self::Custom => 8,
            Self::Reserved(n) => n,
        }
    }

    /// Returns the tag of the version field of `bytes`.
    pub fn of(bytes: &[u8; 16]) -> Self {
        Self::from_nibble(version_of(bytes))
    }
}

impl From<Version> for u8 {
    fn from(src: Version) -> Self {
        src.number()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
