//! Property-based tests for the Salsa20 family keystream drivers

use proptest::prelude::*;
use snuffle_algorithms::stream::salsa::block::{permute, salsa_block};
use snuffle_algorithms::{Error, Salsa12, Salsa20, Salsa8, XSalsa20, R20};

/// Either a 16- or a 32-byte key
fn salsa_key() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 16),
        prop::collection::vec(any::<u8>(), 32),
    ]
}

proptest! {
    #[test]
    fn salsa20_apply_twice_restores_plaintext(
        key in salsa_key(),
        nonce in any::<[u8; 8]>(),
        counter in any::<u32>(),
        data in prop::collection::vec(any::<u8>(), 0..512)
    ) {
        let mut cipher = Salsa20::with_counter(&key, &nonce, counter as u64).unwrap();
        let mut buf = data.clone();
        cipher.apply_keystream(&mut buf).unwrap();

        cipher.seek(counter as u64).unwrap();
        cipher.apply_keystream(&mut buf).unwrap();
        prop_assert_eq!(buf, data);
    }

    #[test]
    fn xsalsa20_apply_twice_restores_plaintext(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 24]>(),
        data in prop::collection::vec(any::<u8>(), 0..512)
    ) {
        let mut cipher = XSalsa20::new(&key, &nonce).unwrap();
        let mut buf = data.clone();
        cipher.encrypt(&mut buf).unwrap();

        cipher.reset();
        cipher.decrypt(&mut buf).unwrap();
        prop_assert_eq!(buf, data);
    }

    #[test]
    fn keystream_is_deterministic(
        key in salsa_key(),
        nonce in any::<[u8; 8]>(),
        counter in any::<u64>(),
        len in 0usize..300
    ) {
        // stay clear of the end of the counter space
        let counter = counter >> 1;

        let mut a = vec![0u8; len];
        let mut b = vec![0u8; len];
        Salsa12::with_counter(&key, &nonce, counter).unwrap().write_keystream(&mut a).unwrap();
        Salsa12::with_counter(&key, &nonce, counter).unwrap().write_keystream(&mut b).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn seek_matches_discarding_prefix(
        key in salsa_key(),
        nonce in any::<[u8; 8]>(),
        block in 0u64..8,
        extra in 0usize..200
    ) {
        let skip = 64 * block as usize;
        let mut full = vec![0u8; skip + extra];
        Salsa20::new(&key, &nonce).unwrap().write_keystream(&mut full).unwrap();

        let mut cipher = Salsa20::new(&key, &nonce).unwrap();
        cipher.seek(block).unwrap();
        let mut tail = vec![0u8; extra];
        cipher.write_keystream(&mut tail).unwrap();
        prop_assert_eq!(&tail[..], &full[skip..]);
    }

    #[test]
    fn seek_bytes_matches_discarding_prefix(
        key in salsa_key(),
        nonce in any::<[u8; 8]>(),
        offset in 0u64..700,
        extra in 0usize..200
    ) {
        let skip = offset as usize;
        let mut full = vec![0u8; skip + extra];
        Salsa8::new(&key, &nonce).unwrap().write_keystream(&mut full).unwrap();

        let mut cipher = Salsa8::new(&key, &nonce).unwrap();
        cipher.seek_bytes(offset).unwrap();
        prop_assert_eq!(cipher.current_pos(), offset as u128);

        let mut tail = vec![0u8; extra];
        cipher.write_keystream(&mut tail).unwrap();
        prop_assert_eq!(&tail[..], &full[skip..]);
    }

    #[test]
    fn chunked_matches_one_shot(
        key in salsa_key(),
        nonce in any::<[u8; 8]>(),
        data in prop::collection::vec(any::<u8>(), 0..700),
        cuts in prop::collection::vec(any::<prop::sample::Index>(), 0..8)
    ) {
        let mut one_shot = data.clone();
        Salsa20::new(&key, &nonce).unwrap().apply_keystream(&mut one_shot).unwrap();

        let mut points: Vec<usize> = cuts.iter().map(|c| c.index(data.len() + 1)).collect();
        points.push(0);
        points.push(data.len());
        points.sort_unstable();

        let mut chunked = data.clone();
        let mut cipher = Salsa20::new(&key, &nonce).unwrap();
        for w in points.windows(2) {
            cipher.apply_keystream(&mut chunked[w[0]..w[1]]).unwrap();
        }

        prop_assert_eq!(chunked, one_shot);
        prop_assert_eq!(cipher.current_pos(), data.len() as u128);
    }

    #[test]
    fn position_tracks_bytes_processed(
        key in salsa_key(),
        nonce in any::<[u8; 8]>(),
        lens in prop::collection::vec(0usize..150, 0..6)
    ) {
        let mut cipher = Salsa20::new(&key, &nonce).unwrap();
        let mut total = 0u128;
        for len in lens {
            let mut buf = vec![0u8; len];
            cipher.write_keystream(&mut buf).unwrap();
            total += len as u128;
            prop_assert_eq!(cipher.current_pos(), total);
            prop_assert_eq!(cipher.block_pos() as u128, (total + 63) / 64);
        }
    }

    #[test]
    fn round_counts_produce_different_keystreams(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 8]>()
    ) {
        let mut k8 = [0u8; 64];
        let mut k12 = [0u8; 64];
        let mut k20 = [0u8; 64];
        Salsa8::new(&key, &nonce).unwrap().write_keystream(&mut k8).unwrap();
        Salsa12::new(&key, &nonce).unwrap().write_keystream(&mut k12).unwrap();
        Salsa20::new(&key, &nonce).unwrap().write_keystream(&mut k20).unwrap();

        prop_assert_ne!(k8, k12);
        prop_assert_ne!(k12, k20);
        prop_assert_ne!(k8, k20);
    }

    #[test]
    fn overflow_never_wraps(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 8]>(),
        used in 0usize..=64,
        extra in 1usize..200
    ) {
        let mut cipher = Salsa20::with_counter(&key, &nonce, u64::MAX).unwrap();
        let mut head = vec![0u8; used];
        cipher.write_keystream(&mut head).unwrap();

        let remaining = 64 - used;
        let mut data = vec![0xa5u8; remaining + extra];
        let err = cipher.apply_keystream(&mut data).unwrap_err();

        prop_assert_eq!(err, Error::CounterOverflow { algorithm: "Salsa20" });
        prop_assert!(data.iter().all(|&b| b == 0xa5));
        prop_assert!(cipher.is_exhausted());

        let mut one = [0u8; 1];
        prop_assert!(cipher.write_keystream(&mut one).is_err());
    }

    #[test]
    fn feed_forward_is_permutation_plus_input(state in any::<[u32; 16]>()) {
        let mut permuted = state;
        permute::<R20>(&mut permuted);

        let block = salsa_block::<R20>(&state);
        for i in 0..16 {
            prop_assert_eq!(block[i], permuted[i].wrapping_add(state[i]));
        }
    }
}
