//! End-to-end hash vectors for the process operations

use matchprep::domain::MatchprepError;
use matchprep::formatter::{
    base64_encode, hash, hex_encode, process_email_address, process_family_name,
    process_given_name, process_phone_number, Encoding,
};

// Digests of the normalized values, computed independently
const ALEXZ_HEX: &str = "509e933019bb285a134a9334b8bb679dff79d0ce023d529af4bd744d47b4fd8a";
const ALEXZ_B64: &str = "UJ6TMBm7KFoTSpM0uLtnnf950M4CPVKa9L10TUe0/Yo=";
const PHONE_HEX: &str = "0fac52d27ec377f8ad2f9de75d1f9bace693237e31868ae6f4616b8bbd0e94fb";
const GMAIL_HEX: &str = "515d2f967f73864e76937ab2b897210a86fd286016903b1b08c3da07c75f513e";
const SMITH_HEX: &str = "6627835f988e2c5e50533d491163072d3f4f41f5c8b04630150debb3722ca2dd";
const ALEX_HEX: &str = "4135aa9dc1b842a653dea846903ddb95bfb8c5a10c504a7fa16e10bc31d1fdf0";

#[test]
fn test_email_hex_vector() {
    assert_eq!(
        process_email_address(Some("  ALEXZ@example.com   "), Encoding::Hex).unwrap(),
        ALEXZ_HEX
    );
}

#[test]
fn test_email_base64_vector() {
    assert_eq!(
        process_email_address(Some("  ALEXZ@example.com   "), Encoding::Base64).unwrap(),
        ALEXZ_B64
    );
}

#[test]
fn test_email_variants_hash_identically() {
    for raw in [
        "alexz@example.com",
        "ALEXZ@EXAMPLE.COM",
        "\tAlexZ@Example.Com  ",
    ] {
        assert_eq!(
            process_email_address(Some(raw), Encoding::Hex).unwrap(),
            ALEXZ_HEX,
            "variant {raw:?} hashed differently"
        );
    }
}

#[test]
fn test_gmail_dot_variants_hash_identically() {
    for raw in [
        "jeffersonloveshiking@gmail.com",
        "j.e.f..ferson.Loves.hiking@gmail.com",
        "JEFFERSON.LOVES.HIKING@GMAIL.COM",
    ] {
        assert_eq!(
            process_email_address(Some(raw), Encoding::Hex).unwrap(),
            GMAIL_HEX
        );
    }
}

#[test]
fn test_phone_vector() {
    assert_eq!(
        process_phone_number(Some("+44-113-496-0987"), Encoding::Hex).unwrap(),
        PHONE_HEX
    );
    assert_eq!(
        process_phone_number(Some("441134960987"), Encoding::Hex).unwrap(),
        PHONE_HEX
    );
}

#[test]
fn test_name_vectors() {
    assert_eq!(
        process_given_name(Some("Mr. Alex"), Encoding::Hex).unwrap(),
        ALEX_HEX
    );
    assert_eq!(
        process_family_name(Some("Smith, Jr. DDS"), Encoding::Hex).unwrap(),
        SMITH_HEX
    );
}

#[test]
fn test_process_determinism() {
    let first = process_email_address(Some("alexz@example.com"), Encoding::Base64).unwrap();
    let second = process_email_address(Some("alexz@example.com"), Encoding::Base64).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_hash_called_twice_yields_identical_bytes() {
    assert_eq!(hash("alexz@example.com").unwrap(), hash("alexz@example.com").unwrap());
}

#[test]
fn test_encoders_agree_with_manual_composition() {
    let digest = hash("alexz@example.com").unwrap();
    assert_eq!(hex_encode(&digest).unwrap(), ALEXZ_HEX);
    assert_eq!(base64_encode(&digest).unwrap(), ALEXZ_B64);
}

#[test]
fn test_process_propagates_first_failure() {
    let err = process_email_address(Some("   "), Encoding::Hex).unwrap_err();
    assert!(matches!(err, MatchprepError::InvalidInput(_)));
    let err = process_phone_number(Some("no digits here"), Encoding::Base64).unwrap_err();
    assert!(matches!(err, MatchprepError::InvalidInput(_)));
}
