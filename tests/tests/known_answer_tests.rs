//! Known-answer tests for Salsa20, XSalsa20 and HSalsa20

use snuffle_algorithms::stream::salsa::hsalsa_from_slices;
use snuffle_algorithms::{Salsa20, XSalsa20, R20};
use snuffle_tests::vectors::{HSALSA20, SALSA20, XSALSA20};
use snuffle_tests::{init_logging, unhex};

#[test]
fn salsa20_keystream_vectors() {
    init_logging();

    for v in SALSA20 {
        let key = unhex(v.key);
        let nonce = unhex(v.nonce);
        let expected = unhex(v.keystream);

        let mut cipher = Salsa20::with_counter(&key, &nonce, v.counter).unwrap();
        let mut keystream = vec![0u8; expected.len()];
        cipher.write_keystream(&mut keystream).unwrap();
        assert_eq!(keystream, expected, "{}", v.name);

        // XOR over zeros yields the same bytes
        let mut cipher = Salsa20::with_counter(&key, &nonce, v.counter).unwrap();
        let mut zeros = vec![0u8; expected.len()];
        cipher.apply_keystream(&mut zeros).unwrap();
        assert_eq!(zeros, expected, "{}", v.name);
    }
}

#[test]
fn salsa20_vectors_byte_at_a_time() {
    for v in SALSA20 {
        let key = unhex(v.key);
        let nonce = unhex(v.nonce);
        let expected = unhex(v.keystream);

        let mut cipher = Salsa20::with_counter(&key, &nonce, v.counter).unwrap();
        let mut keystream = vec![0u8; expected.len()];
        for byte in keystream.iter_mut() {
            cipher.write_keystream(core::slice::from_mut(byte)).unwrap();
        }
        assert_eq!(keystream, expected, "{}", v.name);
    }
}

#[test]
fn xsalsa20_keystream_vectors() {
    init_logging();

    for v in XSALSA20 {
        let key = unhex(v.key);
        let nonce = unhex(v.nonce);
        let expected = unhex(v.keystream);

        let mut cipher = XSalsa20::new(&key, &nonce).unwrap();
        let mut keystream = vec![0u8; expected.len()];
        cipher.write_keystream(&mut keystream).unwrap();
        assert_eq!(keystream, expected, "{}", v.name);
    }
}

#[test]
fn xsalsa20_hello_world() {
    let mut data = *b"Hello world!";
    XSalsa20::new(b"this is 32-byte key for xsalsa20", b"24-byte nonce for xsalsa")
        .unwrap()
        .apply_keystream(&mut data)
        .unwrap();
    assert_eq!(data, [0x00u8, 0x2d, 0x45, 0x13, 0x84, 0x3f, 0xc2, 0x40, 0xc4, 0x01, 0xe5, 0x41]);
}

#[test]
fn hsalsa20_vectors() {
    for v in HSALSA20 {
        let key = unhex(v.key);
        let input = unhex(v.input);
        let expected = unhex(v.output);

        let subkey = hsalsa_from_slices::<R20>(&key, &input).unwrap();
        assert_eq!(subkey.as_slice(), &expected[..], "{}", v.name);
    }
}

#[test]
fn nacl_key_chain() {
    // shared secret -> first-level key -> XSalsa20 subkey, as in crypto_box
    let first = hsalsa_from_slices::<R20>(&unhex(HSALSA20[0].key), &[0u8; 16]).unwrap();
    assert_eq!(first.as_slice(), &unhex(XSALSA20[0].key)[..]);

    let nonce = unhex(XSALSA20[0].nonce);
    let second = hsalsa_from_slices::<R20>(first.as_slice(), &nonce[..16]).unwrap();
    assert_eq!(second.as_slice(), &unhex(HSALSA20[1].output)[..]);
}
