//! Message padding and 64-byte chunking.
//!
//! Padding bytes never get materialized next to the message: they are fed
//! through the same [`BlockBuffer`] as the message itself, before it for
//! [`Convention::Legacy`] and after it for the standard conventions.

use block_buffer::BlockBuffer;
use byte_tools::write_u64_le;
use digest::generic_array::typenum::U64;
use digest::generic_array::GenericArray;

use crate::convention::Convention;

/// Block length in bytes.
pub const BLOCK_LEN: usize = 64;

/// One 512-bit block of the padded message.
pub type Block = GenericArray<u8, U64>;

const ZEROS: [u8; BLOCK_LEN] = [0; BLOCK_LEN];

/// Bytes of the trailing bit-length field of the standard conventions.
const LEN_FIELD: usize = 8;

/// Number of zero bytes the legacy convention prefixes to a message of
/// `len` bytes.
pub fn prefix_len(len: usize) -> usize {
    (BLOCK_LEN - len % BLOCK_LEN) % BLOCK_LEN
}

/// Number of blocks a message of `len` bytes pads to.
///
/// An empty message pads to no blocks under [`Convention::Legacy`].
pub fn block_count(len: usize, convention: Convention) -> usize {
    match convention.marker() {
        None => (len + prefix_len(len)) / BLOCK_LEN,
        Some(_) => (len + 1 + LEN_FIELD + BLOCK_LEN - 1) / BLOCK_LEN,
    }
}

/// Pads `input` according to `convention` and hands every resulting block
/// to `f`, in message order.
pub fn for_each_block<F>(input: &[u8], convention: Convention, mut f: F)
where
    F: FnMut(&Block),
{
    let mut buffer = BlockBuffer::<U64>::default();

    match convention.marker() {
        None => {
            buffer.input(&ZEROS[..prefix_len(input.len())], &mut f);
            buffer.input(input, &mut f);
        }
        Some(marker) => {
            buffer.input(input, &mut f);
            buffer.input(&[marker], &mut f);
            let zeros = (2 * BLOCK_LEN - LEN_FIELD - buffer.position()) % BLOCK_LEN;
            buffer.input(&ZEROS[..zeros], &mut f);

            let mut bit_len = [0u8; LEN_FIELD];
            write_u64_le(&mut bit_len, (input.len() as u64) << 3);
            buffer.input(&bit_len, &mut f);
        }
    }

    debug_assert_eq!(buffer.position(), 0, "padding left a partial block");
}
