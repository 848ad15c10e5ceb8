use std::thread;

use hex_literal::hex;
use tigerhash::{Convention, Digest, Tiger};

fn tiger_hash(convention: Convention, input: &[u8]) -> Digest {
    Tiger::new(convention).digest(input)
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn tiger_published_vectors() {
    let test_cases: &[(&[u8], [u8; 24])] = &[
        (
            b"",
            hex!("3293AC630C13F0245F92BBB1766E16167A4E58492DDE73F3"),
        ),
        (
            b"a",
            hex!("77BEFBEF2E7EF8AB2EC8F93BF587A7FC613E247F5F247809"),
        ),
        (
            b"abc",
            hex!("2AAB1484E8C158F2BFB8C5FF41B57A525129131C957B5F93"),
        ),
        (
            b"Tiger",
            hex!("DD00230799F5009FEC6DEBC838BB6A27DF2B9D6F110C7937"),
        ),
        (
            b"message digest",
            hex!("D981F8CB78201A950DCF3048751E441C517FCA1AA55A29F6"),
        ),
        (
            b"abcdefghijklmnopqrstuvwxyz",
            hex!("1714A472EEE57D30040412BFCC55032A0B11602FF37BEEE9"),
        ),
        (
            b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
            hex!("8DCEA680A17583EE502BA38A3C368651890FFBCCDC49A8CC"),
        ),
        (
            b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
            hex!("1C14795529FD9F207A958F84C52F11E887FA0CABDFD91BFD"),
        ),
        (
            b"Tiger - A Fast New Hash Function, by Ross Anderson and Eli Biham",
            hex!("8A866829040A410C729AD23F5ADA711603B3CDD357E4C15E"),
        ),
    ];

    for (i, &(input, expected)) in test_cases.iter().enumerate() {
        let reached = tiger_hash(Convention::Tiger, input);
        assert_eq!((i, &expected), (i, reached.as_bytes()));
    }
}

#[test]
fn tiger2_vectors() {
    let test_cases: &[(&[u8], [u8; 24])] = &[
        (
            b"",
            hex!("4441BE75F6018773C206C22745374B924AA8313FEF919F41"),
        ),
        (
            b"a",
            hex!("67E6AE8E9E968999F70A23E72AEAA9251CBC7C78A7916636"),
        ),
        (
            b"abc",
            hex!("F68D7BC5AF4B43A06E048D7829560D4A9415658BB0B1F3BF"),
        ),
        (
            b"message digest",
            hex!("E29419A1B5FA259DE8005E7DE75078EA81A542EF2552462D"),
        ),
        (
            b"abcdefghijklmnopqrstuvwxyz",
            hex!("F5B6B6A78C405C8547E91CD8624CB8BE83FC804A474488FD"),
        ),
        (
            b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
            hex!("A6737F3997E8FBB63D20D2DF88F86376B5FE2D5CE36646A9"),
        ),
        (
            b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
            hex!("EA9AB6228CEE7B51B77544FCA6066C8CBB5BBAE6319505CD"),
        ),
        (
            b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
            hex!("D85278115329EBAA0EEC85ECDC5396FDA8AA3A5820942FFF"),
        ),
    ];

    for (i, &(input, expected)) in test_cases.iter().enumerate() {
        let reached = tiger_hash(Convention::Tiger2, input);
        assert_eq!((i, &expected), (i, reached.as_bytes()));
    }
}

#[test]
fn legacy_vectors() {
    let a63 = vec![b'a'; 63];
    let a64 = vec![b'a'; 64];
    let a65 = vec![b'a'; 65];
    let test_cases: &[(&[u8], &str)] = &[
        (b"", "0123456789abcdeffedcba9876543210f096a5b4c3b2e187"),
        (b"Tiger", "52ba180845bd2d606f5c528a5ed84a3d3ce960e3ee1e4def"),
        (&a63[..], "a79bc82e6904de0db9eb8b0ce923942d60760ff5385d60ce"),
        (&a64[..], "2f983cc32681ad7bb678c4581fe4f67c834653fc5b3803f0"),
        (&a65[..], "db3f8cafb96338b49bd27e7d4a7cd78795291904d42a04d4"),
        (
            b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
            "1002eeaf987a755371fd09c604760d9675b090908f1f39ce",
        ),
        (
            b"Tiger - A Fast New Hash Function, by Ross Anderson and Eli Biham",
            "a0e7c44cbf59bdae3699013dbccb6c5364f105da7eb18a25",
        ),
    ];

    for (i, &(input, expected)) in test_cases.iter().enumerate() {
        assert_eq!((i, tigerhash::hash(input).as_str()), (i, expected));
    }
}

#[test]
fn legacy_zero_prefix_collides() {
    // A leading zero byte is indistinguishable from the padding itself.
    assert_eq!(tigerhash::hash(&[0u8]), tigerhash::hash(&[0u8; 64]));
    assert_eq!(
        tigerhash::hash(&[0u8]),
        "76140624b5d4a8bef4be3cd6b726d296c8d0562ee3f34227"
    );
}

#[test]
fn block_order_matters() {
    let mut forward = vec![0u8; 64];
    forward.extend_from_slice(b"Tiger");
    let mut swapped = b"Tiger".to_vec();
    swapped.extend_from_slice(&[0u8; 64]);

    assert_eq!(
        tigerhash::hash(&forward),
        "2b7f93ee762b0d7c85fa248b7cdbadaba7ce2a99eee8712d"
    );
    assert_eq!(
        tigerhash::hash(&swapped),
        "cda0623305b029834aeddcfd8d0abb6c45220647c8e22590"
    );
}

#[test]
fn one_million_a() {
    let input = vec![b'a'; 1_000_000];
    assert_eq!(
        tiger_hash(Convention::Tiger, &input).as_bytes(),
        &hex!("6DB0E2729CBEAD93D715C6A7D36302E9B3CEE0D2BC314B41")
    );
    assert_eq!(
        tigerhash::hash(&input),
        "aafe239cd5bb4e8ccdeda8389c5ca93260058dc3b7811257"
    );
}

#[test]
fn hasher_is_shareable_across_threads() {
    assert_send_sync::<Tiger>();
    assert_send_sync::<Digest>();

    let tiger = Tiger::new(Convention::Tiger);
    let expected = tiger.hash(b"abc");
    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                // Interleave an unrelated message to catch leaked state.
                let _ = tiger.hash(&vec![i as u8; 100 + i]);
                (tiger.hash(b"abc"), tigerhash::hash(b"Tiger"))
            })
        })
        .collect();

    for handle in handles {
        let (standard, legacy) = handle.join().unwrap();
        assert_eq!(standard, expected);
        assert_eq!(legacy, "52ba180845bd2d606f5c528a5ed84a3d3ce960e3ee1e4def");
    }
}
