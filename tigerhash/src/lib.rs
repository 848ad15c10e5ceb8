//! The [Tiger][1] hash function.
//!
//! The free functions [`hash`] and [`digest`] use [`Convention::Legacy`]:
//! messages are left-padded with zero bytes to a multiple of 64 bytes and
//! the 192-bit result is rendered as three 16-digit hex words. That keeps
//! digests produced by the legacy tigerhash tool reproducible. The published
//! algorithm is available through [`Tiger`]:
//!
//! ```
//! use tigerhash::{Convention, Tiger};
//!
//! assert_eq!(
//!     tigerhash::hash(b""),
//!     "0123456789abcdeffedcba9876543210f096a5b4c3b2e187",
//! );
//! assert_eq!(
//!     Tiger::new(Convention::Tiger).hash(b"abc"),
//!     "2aab1484e8c158f2bfb8c5ff41b57a525129131c957b5f93",
//! );
//! ```
//!
//! Every call starts from the fixed initial state; the only data shared
//! between calls are the read-only S-boxes.
//!
//! [1]: https://en.wikipedia.org/wiki/Tiger_(hash_function)

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[macro_use]
extern crate opaque_debug;

use alloc::string::String;

use tracing::{debug, trace};

mod compress;
mod consts;
mod convention;
mod encode;
mod error;
mod load;
mod pad;

pub use crate::compress::{Snapshot, State};
pub use crate::convention::{Convention, Width};
pub use crate::encode::{encode_words, Digest, Output, DIGEST_LEN, HEX_LEN};
pub use crate::error::Error;
pub use crate::load::{load_block, slot_for_group, Words};
pub use crate::pad::{block_count, for_each_block, prefix_len, Block, BLOCK_LEN};

/// Hash configuration: algorithm convention and output width.
///
/// Holds no running state, so one value can serve any number of calls from
/// any number of threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tiger {
    convention: Convention,
    width: Width,
}

impl Tiger {
    pub const fn new(convention: Convention) -> Self {
        Tiger {
            convention,
            width: Width::Bits192,
        }
    }

    pub const fn with_width(self, width: Width) -> Self {
        Tiger {
            convention: self.convention,
            width,
        }
    }

    pub fn convention(&self) -> Convention {
        self.convention
    }

    pub fn width(&self) -> Width {
        self.width
    }

    /// Hashes the whole of `input`. The full 24 bytes are returned
    /// regardless of the configured width.
    pub fn digest(&self, input: &[u8]) -> Digest {
        let convention = self.convention;
        debug!(
            convention = convention.name(),
            len = input.len(),
            blocks = block_count(input.len(), convention),
            "hashing message"
        );

        let mut state = State::new();
        let mut index = 0usize;
        for_each_block(input, convention, |block| {
            state.compress(load_block(block, convention), convention);
            trace!(block = index, "compressed block");
            index += 1;
        });

        Digest::from_words(state.words(), convention)
    }

    /// Lowercase hex of the digest, truncated to the configured width.
    pub fn hash(&self, input: &[u8]) -> String {
        self.digest(input).to_hex(self.width)
    }
}

/// Tiger digest of `input` under [`Convention::Legacy`].
pub fn digest(input: &[u8]) -> Digest {
    Tiger::default().digest(input)
}

/// 48-character lowercase hex Tiger digest of `input` under
/// [`Convention::Legacy`].
pub fn hash(input: &[u8]) -> String {
    encode_words(&digest(input).words())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_empty_message_is_initial_state() {
        assert_eq!(hash(b""), encode_words(&State::new().words()));
    }

    #[test]
    fn legacy_known_values() {
        let test_cases: &[(&[u8], &str)] = &[
            (b"Tiger", "52ba180845bd2d606f5c528a5ed84a3d3ce960e3ee1e4def"),
            (b"abc", "5ffbe11c7c64dc91b934fe69fce1940ffe6c8f6ff2b1639b"),
        ];
        for (i, &(input, expected)) in test_cases.iter().enumerate() {
            assert_eq!((i, hash(input).as_str()), (i, expected));
        }
    }

    #[test]
    fn calls_do_not_share_state() {
        let first = hash(b"Tiger");
        let _ = hash(&[0x55; 200]);
        assert_eq!(hash(b"Tiger"), first);
    }

    #[test]
    fn width_truncates_hex() {
        let tiger = Tiger::new(Convention::Tiger);
        let full = tiger.hash(b"abc");
        assert_eq!(tiger.with_width(Width::Bits128).hash(b"abc"), &full[..32]);
        assert_eq!(tiger.with_width(Width::Bits160).hash(b"abc"), &full[..40]);
    }

    #[test]
    fn default_configuration() {
        let tiger = Tiger::default();
        assert_eq!(tiger.convention(), Convention::Legacy);
        assert_eq!(tiger.width(), Width::Bits192);
        assert_eq!(tiger.hash(b"Tiger"), hash(b"Tiger"));
    }
}
