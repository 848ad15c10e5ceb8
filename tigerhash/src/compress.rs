//! The compression function: three passes over the running state with the
//! key schedule in between, followed by the feedforward.

use crate::consts::{IV, KEY_SCHEDULE_HEAD, KEY_SCHEDULE_TAIL, PASS_MULTIPLIERS, T1, T2, T3, T4};
use crate::convention::Convention;
use crate::load::Words;

/// The three running words `(a, b, c)` carried from block to block.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct State([u64; 3]);

/// Copy of the running state taken before the passes of a block.
#[derive(Clone, Copy)]
pub struct Snapshot([u64; 3]);

impl_opaque_debug!(State);
impl_opaque_debug!(Snapshot);

impl State {
    pub fn new() -> Self {
        State(IV)
    }

    pub fn from_words(words: [u64; 3]) -> Self {
        State(words)
    }

    pub fn words(&self) -> [u64; 3] {
        self.0
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot(self.0)
    }

    /// Folds the pre-pass `snapshot` into the post-pass state.
    pub fn feedforward(&mut self, snapshot: Snapshot) {
        let [a, b, c] = &mut self.0;
        let [aa, bb, cc] = snapshot.0;
        *a ^= aa;
        *b = b.wrapping_sub(bb);
        *c = c.wrapping_add(cc);
    }

    /// Runs the full compression of one working buffer into the state.
    pub fn compress(&mut self, mut x: Words, convention: Convention) {
        let snapshot = self.snapshot();
        let [mut a, mut b, mut c] = self.0;

        pass(&mut a, &mut b, &mut c, &x, PASS_MULTIPLIERS[0], convention);
        key_schedule(&mut x);
        pass(&mut c, &mut a, &mut b, &x, PASS_MULTIPLIERS[1], convention);
        key_schedule(&mut x);
        pass(&mut b, &mut c, &mut a, &x, PASS_MULTIPLIERS[2], convention);

        self.0 = [a, b, c];
        self.feedforward(snapshot);
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits `c` into the byte positions the round lookups index with.
#[inline(always)]
fn split(c: u64, convention: Convention) -> [u8; 8] {
    if convention.is_legacy() {
        c.to_be_bytes()
    } else {
        c.to_le_bytes()
    }
}

#[inline(always)]
fn round(a: &mut u64, b: &mut u64, c: &mut u64, x: u64, mul: u64, convention: Convention) {
    *c ^= x;
    let p = split(*c, convention);

    let even = T1[usize::from(p[0])]
        ^ T2[usize::from(p[2])]
        ^ T3[usize::from(p[4])]
        ^ T4[usize::from(p[6])];
    let odd = T4[usize::from(p[1])]
        ^ T3[usize::from(p[3])]
        ^ T2[usize::from(p[5])]
        ^ T1[usize::from(p[7])];

    *a = a.wrapping_sub(even);
    *b = if convention.is_legacy() {
        b.wrapping_sub(odd)
    } else {
        b.wrapping_add(odd)
    };
    *b = b.wrapping_mul(mul);
}

/// Eight rounds, rotating the `a`, `b`, `c` roles and consuming slot `i`
/// in round `i`.
pub(crate) fn pass(
    a: &mut u64,
    b: &mut u64,
    c: &mut u64,
    x: &Words,
    mul: u64,
    convention: Convention,
) {
    round(a, b, c, x[0], mul, convention);
    round(b, c, a, x[1], mul, convention);
    round(c, a, b, x[2], mul, convention);
    round(a, b, c, x[3], mul, convention);
    round(b, c, a, x[4], mul, convention);
    round(c, a, b, x[5], mul, convention);
    round(a, b, c, x[6], mul, convention);
    round(b, c, a, x[7], mul, convention);
}

pub(crate) fn key_schedule(x: &mut Words) {
    x[0] = x[0].wrapping_sub(x[7] ^ KEY_SCHEDULE_HEAD);
    x[1] ^= x[0];
    x[2] = x[2].wrapping_add(x[1]);
    x[3] = x[3].wrapping_sub(x[2] ^ ((!x[1]) << 19));
    x[4] ^= x[3];
    x[5] = x[5].wrapping_add(x[4]);
    x[6] = x[6].wrapping_sub(x[5] ^ ((!x[4]) >> 23));
    x[7] ^= x[6];
    x[0] = x[0].wrapping_add(x[7]);
    x[1] = x[1].wrapping_sub(x[0] ^ ((!x[7]) << 19));
    x[2] ^= x[1];
    x[3] = x[3].wrapping_add(x[2]);
    x[4] = x[4].wrapping_sub(x[3] ^ ((!x[2]) >> 23));
    x[5] ^= x[4];
    x[6] = x[6].wrapping_add(x[5]);
    x[7] = x[7].wrapping_sub(x[6] ^ KEY_SCHEDULE_TAIL);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Undoes `key_schedule` step by step, in reverse order.
    fn inverse_key_schedule(x: &mut Words) {
        x[7] = x[7].wrapping_add(x[6] ^ KEY_SCHEDULE_TAIL);
        x[6] = x[6].wrapping_sub(x[5]);
        x[5] ^= x[4];
        x[4] = x[4].wrapping_add(x[3] ^ ((!x[2]) >> 23));
        x[3] = x[3].wrapping_sub(x[2]);
        x[2] ^= x[1];
        x[1] = x[1].wrapping_add(x[0] ^ ((!x[7]) << 19));
        x[0] = x[0].wrapping_sub(x[7]);
        x[7] ^= x[6];
        x[6] = x[6].wrapping_add(x[5] ^ ((!x[4]) >> 23));
        x[5] = x[5].wrapping_sub(x[4]);
        x[4] ^= x[3];
        x[3] = x[3].wrapping_add(x[2] ^ ((!x[1]) << 19));
        x[2] = x[2].wrapping_sub(x[1]);
        x[1] ^= x[0];
        x[0] = x[0].wrapping_add(x[7] ^ KEY_SCHEDULE_HEAD);
    }

    #[test]
    fn key_schedule_is_invertible() {
        let original: Words = [
            0x0000000000000000,
            0xFFFFFFFFFFFFFFFF,
            0x0123456789ABCDEF,
            0xDEADBEEFCAFEBABE,
            0x8000000000000001,
            0x5555555555555555,
            0x00000000000000FF,
            0xA5A5A5A5A5A5A5A5,
        ];
        let mut x = original;
        key_schedule(&mut x);
        assert_ne!(x, original);
        inverse_key_schedule(&mut x);
        assert_eq!(x, original);
    }

    #[test]
    fn key_schedule_of_zeros() {
        let mut x = [0u64; 8];
        key_schedule(&mut x);
        assert_eq!(x[0], 0xD1D1D1F3F3EF0F10);
    }

    #[test]
    fn feedforward_combines_with_snapshot() {
        let mut state = State::from_words([0xF0, 1, u64::MAX]);
        let snapshot = State::from_words([0x0F, 2, 2]).snapshot();
        state.feedforward(snapshot);
        assert_eq!(state.words(), [0xFF, u64::MAX, 1]);
    }

    #[test]
    fn round_arithmetic_wraps() {
        let (mut a, mut b, mut c) = (0u64, u64::MAX, 0u64);
        round(&mut a, &mut b, &mut c, 0, 9, Convention::Tiger);
        let expected_a = 0u64.wrapping_sub(T1[0] ^ T2[0] ^ T3[0] ^ T4[0]);
        let expected_b = u64::MAX
            .wrapping_add(T4[0] ^ T3[0] ^ T2[0] ^ T1[0])
            .wrapping_mul(9);
        assert_eq!((a, b, c), (expected_a, expected_b, 0));
    }

    #[test]
    fn legacy_round_uses_msb_first_positions() {
        let x = 0x0100_0000_0000_0000;
        let (mut a, mut b, mut c) = (0u64, 0u64, 0u64);
        round(&mut a, &mut b, &mut c, x, 5, Convention::Legacy);
        assert_eq!(c, x);
        assert_eq!(a, 0u64.wrapping_sub(T1[1] ^ T2[0] ^ T3[0] ^ T4[0]));
        let odd = T4[0] ^ T3[0] ^ T2[0] ^ T1[0];
        assert_eq!(b, 0u64.wrapping_sub(odd).wrapping_mul(5));
    }

    #[test]
    fn compress_takes_snapshot_before_passes() {
        let x = [0u64; 8];
        let mut state = State::new();
        state.compress(x, Convention::Tiger);

        let [mut a, mut b, mut c] = IV;
        let mut w = x;
        pass(&mut a, &mut b, &mut c, &w, 5, Convention::Tiger);
        key_schedule(&mut w);
        pass(&mut c, &mut a, &mut b, &w, 7, Convention::Tiger);
        key_schedule(&mut w);
        pass(&mut b, &mut c, &mut a, &w, 9, Convention::Tiger);
        assert_eq!(
            state.words(),
            [a ^ IV[0], b.wrapping_sub(IV[1]), c.wrapping_add(IV[2])]
        );
    }
}
