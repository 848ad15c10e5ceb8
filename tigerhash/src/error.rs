use core::fmt;

/// Error returned when parsing a [`Digest`](crate::Digest), a
/// [`Convention`](crate::Convention) or a [`Width`](crate::Width) from text.
///
/// Hashing itself never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Hex digest of the wrong length, in characters.
    InvalidLength { expected: usize, actual: usize },
    /// Non-hex character at the given character index.
    InvalidHexCharacter { c: char, index: usize },
    /// Convention name other than `legacy`, `tiger` or `tiger2`.
    UnknownConvention,
    /// Output width other than 128, 160 or 192 bits.
    UnsupportedWidth,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InvalidLength { expected, actual } => write!(
                f,
                "invalid digest length: expected {} hex characters, got {}",
                expected, actual
            ),
            Error::InvalidHexCharacter { c, index } => {
                write!(f, "invalid hex character {:?} at index {}", c, index)
            }
            Error::UnknownConvention => {
                f.write_str("unknown convention, expected one of: legacy, tiger, tiger2")
            }
            Error::UnsupportedWidth => {
                f.write_str("unsupported output width, expected 128, 160 or 192 bits")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
