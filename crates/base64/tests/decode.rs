//! Tests for base64 decoding (from_base64).

use ct_base64::{create_from_base64, from_base64, to_base64, Base64Error, EncodingFault};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

fn fault(result: Result<Vec<u8>, Base64Error>) -> EncodingFault {
    match result {
        Err(Base64Error::InvalidEncoding(fault)) => fault,
        other => panic!("expected InvalidEncoding, got {other:?}"),
    }
}

#[test]
fn works() {
    let from_base64_2 = create_from_base64(None, None).unwrap();

    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = to_base64(&blob);
        let decoded1 = from_base64_2(&encoded).unwrap();
        let decoded2 = from_base64(&encoded).unwrap();
        assert_eq!(decoded1, blob);
        assert_eq!(decoded2, blob);
    }
}

#[test]
fn handles_invalid_values() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = to_base64(&blob);
        let invalid = format!("{}!!!!", encoded);
        let result = from_base64(&invalid);
        assert!(matches!(result, Err(Base64Error::InvalidEncoding(_))));
    }
}

#[test]
fn empty_input() {
    assert_eq!(from_base64("").unwrap(), b"");
}

#[test]
fn man() {
    assert_eq!(from_base64("TWFu").unwrap(), [0x4D, 0x61, 0x6E]);
}

#[test]
fn single_byte() {
    assert_eq!(from_base64("Zg==").unwrap(), b"f");
}

#[test]
fn two_bytes() {
    assert_eq!(from_base64("Zm8=").unwrap(), b"fo");
}

#[test]
fn three_bytes() {
    assert_eq!(from_base64("Zm9v").unwrap(), b"foo");
}

#[test]
fn hello_world() {
    assert_eq!(from_base64("aGVsbG8gd29ybGQ=").unwrap(), b"hello world");
}

#[test]
fn rejects_length_not_multiple_of_four() {
    assert_eq!(fault(from_base64("Zm9vY")), EncodingFault::Length(5));
    assert_eq!(fault(from_base64("Zm8")), EncodingFault::Length(3));
    assert_eq!(fault(from_base64("Z")), EncodingFault::Length(1));
}

#[test]
fn rejects_padding_in_non_trailing_position() {
    assert_eq!(fault(from_base64("A=AA")), EncodingFault::Padding { position: 1 });
    assert_eq!(fault(from_base64("AA=A")), EncodingFault::Padding { position: 2 });
    assert_eq!(fault(from_base64("Zg==Zm9v")), EncodingFault::Padding { position: 2 });
}

#[test]
fn rejects_more_than_two_padding_chars() {
    assert_eq!(fault(from_base64("Z===")), EncodingFault::Padding { position: 1 });
    assert_eq!(fault(from_base64("====")), EncodingFault::Padding { position: 0 });
}

#[test]
fn rejects_characters_outside_alphabet() {
    assert_eq!(fault(from_base64("Zm9v!m9v")), EncodingFault::Character { position: 4 });
    assert_eq!(fault(from_base64("Zm-v")), EncodingFault::Character { position: 2 });
    assert_eq!(fault(from_base64("@&8=")), EncodingFault::Character { position: 0 });
    assert_eq!(fault(from_base64("Zm9v\n")), EncodingFault::Length(5));
}

#[test]
fn rejects_non_zero_trailing_bits() {
    assert_eq!(fault(from_base64("Zh==")), EncodingFault::TrailingBits { position: 1 });
    assert_eq!(fault(from_base64("Zm9=")), EncodingFault::TrailingBits { position: 2 });
}

#[test]
fn rejects_non_ascii_input() {
    assert_eq!(fault(from_base64("Zm9é")), EncodingFault::Length(5));
    assert_eq!(fault(from_base64("Zé=")), EncodingFault::Character { position: 1 });
}
