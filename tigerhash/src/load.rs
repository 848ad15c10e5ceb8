//! Block loader: turns one 64-byte block into the eight-word working buffer.

use byte_tools::{read_u64_be, read_u64_le};

use crate::convention::Convention;
use crate::pad::Block;

/// Eight 64-bit words built from one block, mutated by the key schedule.
pub type Words = [u64; 8];

const WORD_LEN: usize = 8;

/// Working-buffer slot receiving the `group`-th 8-byte group of a block.
///
/// The legacy convention fills the buffer from slot 7 down to slot 0; the
/// standard conventions fill it in reading order.
pub fn slot_for_group(group: usize, convention: Convention) -> usize {
    debug_assert!(group < 8, "byte group {} outside of a block", group);
    if convention.is_legacy() {
        7 - group
    } else {
        group
    }
}

pub fn load_block(block: &Block, convention: Convention) -> Words {
    let mut words = [0u64; 8];
    for (group, chunk) in block.chunks_exact(WORD_LEN).enumerate() {
        let word = if convention.is_legacy() {
            read_u64_be(chunk)
        } else {
            read_u64_le(chunk)
        };
        words[slot_for_group(group, convention)] = word;
    }
    words
}
