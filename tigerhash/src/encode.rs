//! Digest value and its hex rendering.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use byte_tools::{read_u64v_be, read_u64v_le, write_u64v_be, write_u64v_le};
use digest::generic_array::typenum::U24;
use digest::generic_array::GenericArray;

use crate::convention::{Convention, Width};
use crate::error::Error;

/// Digest length in bytes.
pub const DIGEST_LEN: usize = 24;

/// Digest length in hex characters.
pub const HEX_LEN: usize = 2 * DIGEST_LEN;

/// Fixed-size output array, as used by the `digest` crate.
pub type Output = GenericArray<u8, U24>;

/// Renders the three state words as 16 lowercase hex digits each, in
/// `a, b, c` order.
pub fn encode_words(words: &[u64; 3]) -> String {
    let mut bytes = [0u8; DIGEST_LEN];
    write_u64v_be(&mut bytes, words);
    hex::encode(bytes)
}

/// A 192-bit Tiger digest together with the convention that produced it.
///
/// Two digests compare equal only if both their bytes and their convention
/// match.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
    bytes: [u8; DIGEST_LEN],
    convention: Convention,
}

impl Digest {
    /// Serializes the final state words in the byte order of `convention`.
    pub fn from_words(words: [u64; 3], convention: Convention) -> Self {
        let mut bytes = [0u8; DIGEST_LEN];
        if convention.is_legacy() {
            write_u64v_be(&mut bytes, &words);
        } else {
            write_u64v_le(&mut bytes, &words);
        }
        Digest { bytes, convention }
    }

    pub fn from_bytes(bytes: [u8; DIGEST_LEN], convention: Convention) -> Self {
        Digest { bytes, convention }
    }

    /// Parses 48 hex characters (either case) as a digest of `convention`.
    pub fn from_hex(s: &str, convention: Convention) -> Result<Self, Error> {
        if s.len() != HEX_LEN {
            return Err(Error::InvalidLength {
                expected: HEX_LEN,
                actual: s.len(),
            });
        }
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(s, &mut bytes).map_err(|err| match err {
            hex::FromHexError::InvalidHexCharacter { c, index } => {
                Error::InvalidHexCharacter { c, index }
            }
            _ => Error::InvalidLength {
                expected: HEX_LEN,
                actual: s.len(),
            },
        })?;
        Ok(Digest { bytes, convention })
    }

    pub fn convention(&self) -> Convention {
        self.convention
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.bytes
    }

    /// Final state words in `a, b, c` order.
    pub fn words(&self) -> [u64; 3] {
        let mut words = [0u64; 3];
        if self.convention.is_legacy() {
            read_u64v_be(&mut words, &self.bytes);
        } else {
            read_u64v_le(&mut words, &self.bytes);
        }
        words
    }

    /// Leading bytes kept for `width`.
    pub fn truncated(&self, width: Width) -> &[u8] {
        &self.bytes[..width.bytes()]
    }

    pub fn as_output(&self) -> Output {
        GenericArray::clone_from_slice(&self.bytes)
    }

    /// Lowercase hex of the leading `width` bytes.
    pub fn to_hex(&self, width: Width) -> String {
        hex::encode(self.truncated(width))
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Digest> for Output {
    fn from(digest: Digest) -> Output {
        digest.as_output()
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.bytes))
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(self.bytes))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({:x})", self)
    }
}

/// Parses a [`Convention::Legacy`] digest; use [`Digest::from_hex`] for the
/// other conventions.
impl FromStr for Digest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Digest::from_hex(s, Convention::Legacy)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Digest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex(Width::Bits192))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Digest {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        // Only the hex string is serialized, so the convention is the default.
        impl<'de> serde::de::Visitor<'de> for HexVisitor {
            type Value = Digest;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 48 character hex string")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Digest, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}
