use proptest::prelude::*;
use tigerhash::{block_count, encode_words, for_each_block, Convention, Tiger};

fn convention() -> impl Strategy<Value = Convention> {
    prop_oneof![
        Just(Convention::Legacy),
        Just(Convention::Tiger),
        Just(Convention::Tiger2),
    ]
}

fn message(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..max_len)
}

fn hamming(a: &[u8], b: &[u8]) -> u32 {
    a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

proptest! {
    #[test]
    fn hash_is_deterministic(data in message(512), c in convention()) {
        let tiger = Tiger::new(c);
        prop_assert_eq!(tiger.hash(&data), tiger.hash(&data));
    }

    #[test]
    fn hash_is_48_lowercase_hex(data in message(512)) {
        let hex = tigerhash::hash(&data);
        prop_assert_eq!(hex.len(), 48);
        prop_assert!(hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
    }

    #[test]
    fn hash_matches_digest_display(data in message(256)) {
        let digest = tigerhash::digest(&data);
        prop_assert_eq!(tigerhash::hash(&data), digest.to_string());
        prop_assert_eq!(digest.to_string().parse::<tigerhash::Digest>(), Ok(digest));
    }

    #[test]
    fn encoder_is_pure(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
        let words = [a, b, c];
        let first = encode_words(&words);
        prop_assert_eq!(first.len(), 48);
        prop_assert_eq!(&first, &encode_words(&words));
        prop_assert_eq!(u64::from_str_radix(&first[16..32], 16).unwrap(), b);
    }

    #[test]
    fn single_bit_flip_avalanches(
        data in proptest::collection::vec(any::<u8>(), 1..300),
        bit in any::<prop::sample::Index>(),
        c in convention(),
    ) {
        let tiger = Tiger::new(c);
        let mut flipped = data.clone();
        let bit = bit.index(data.len() * 8);
        flipped[bit / 8] ^= 1 << (bit % 8);

        let before = tiger.digest(&data);
        let after = tiger.digest(&flipped);
        // 96 of 192 bits is the expectation; 48 is more than six standard
        // deviations below it.
        prop_assert!(hamming(before.as_bytes(), after.as_bytes()) >= 48);
    }

    #[test]
    fn chunker_emits_predicted_block_count(len in 0usize..400, c in convention()) {
        let data = vec![0x5Au8; len];
        let mut blocks = 0;
        for_each_block(&data, c, |_| blocks += 1);
        prop_assert_eq!(blocks, block_count(len, c));
        prop_assert!(blocks * 64 >= len);
    }
}
