//! Tests for custom alphabet and padding validation in the factories.

use ct_base64::{
    create_from_base64, create_from_base64_bin, create_to_base64, create_to_base64_bin,
    AlphabetFault, Base64Error, ALPHABET, ALPHABET_URL,
};

fn alphabet_fault<T>(result: Result<T, Base64Error>) -> AlphabetFault {
    match result {
        Err(Base64Error::InvalidAlphabet(fault)) => fault,
        Err(other) => panic!("expected InvalidAlphabet, got {other:?}"),
        Ok(_) => panic!("expected InvalidAlphabet, got Ok"),
    }
}

#[test]
fn rejects_wrong_length() {
    assert_eq!(
        alphabet_fault(create_to_base64(Some("ABC"), None)),
        AlphabetFault::Length(3)
    );
    assert_eq!(
        alphabet_fault(create_from_base64(Some(&ALPHABET[..63]), None)),
        AlphabetFault::Length(63)
    );
    let long = format!("{ALPHABET}!");
    assert_eq!(
        alphabet_fault(create_to_base64_bin(Some(&long), None)),
        AlphabetFault::Length(65)
    );
}

#[test]
fn rejects_duplicates() {
    let chars = format!("{}A", &ALPHABET[..63]);
    assert_eq!(
        alphabet_fault(create_from_base64_bin(Some(&chars), None)),
        AlphabetFault::Duplicate { position: 63 }
    );
}

#[test]
fn rejects_non_printable() {
    let chars = format!(" {}", &ALPHABET[1..]);
    assert_eq!(
        alphabet_fault(create_to_base64(Some(&chars), None)),
        AlphabetFault::NotPrintable { position: 0 }
    );
}

#[test]
fn rejects_non_ascii() {
    // 62 ASCII characters plus one two-byte character: 64 bytes.
    let chars = format!("{}é", &ALPHABET[..62]);
    assert_eq!(chars.len(), 64);
    assert_eq!(
        alphabet_fault(create_to_base64(Some(&chars), None)),
        AlphabetFault::NotPrintable { position: 62 }
    );
}

#[test]
fn rejects_bad_padding() {
    assert_eq!(
        alphabet_fault(create_to_base64(None, Some("=="))),
        AlphabetFault::Padding
    );
    assert_eq!(
        alphabet_fault(create_to_base64(None, Some("A"))),
        AlphabetFault::Padding
    );
    assert_eq!(
        alphabet_fault(create_from_base64(None, Some(" "))),
        AlphabetFault::Padding
    );
}

#[test]
fn custom_padding_character() {
    let encode = create_to_base64(None, Some(".")).unwrap();
    let decode = create_from_base64(None, Some(".")).unwrap();
    assert_eq!(encode(b"f"), "Zg..");
    assert_eq!(decode("Zg..").unwrap(), b"f");
    assert!(decode("Zg==").is_err());
}

#[test]
fn url_alphabet_with_padding() {
    let encode = create_to_base64(Some(ALPHABET_URL), None).unwrap();
    let decode = create_from_base64(Some(ALPHABET_URL), None).unwrap();
    assert_eq!(encode(&[0xFB, 0xFF]), "-_8=");
    assert_eq!(decode("-_8=").unwrap(), [0xFB, 0xFF]);
}

#[test]
fn reversed_alphabet() {
    let reversed: String = ALPHABET.chars().rev().collect();
    let encode = create_to_base64(Some(&reversed), None).unwrap();
    let decode = create_from_base64(Some(&reversed), None).unwrap();
    // Index 0 maps to '/', index 63 to 'A'.
    assert_eq!(encode(&[0, 0, 0]), "////");
    assert_eq!(encode(&[0xFF, 0xFF, 0xFF]), "AAAA");
    assert_eq!(decode("////").unwrap(), [0, 0, 0]);
}

#[test]
fn encoders_are_shareable_across_threads() {
    let encode = std::sync::Arc::new(create_to_base64(None, None).unwrap());
    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            let encode = std::sync::Arc::clone(&encode);
            std::thread::spawn(move || encode(&[i; 3]))
        })
        .collect();
    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, ["AAAA", "AQEB", "AgIC", "AwMD"]);
}
