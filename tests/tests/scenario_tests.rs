//! End-to-end signing scenarios

use natrium_sign::eddsa::{self, Ed25519PrivateKey, PRIVATE_KEY_LEN};
use natrium_sign::Error;
use natrium_tests::seeded_rng;

#[test]
fn test_hello_signed_by_a_only_verifies_under_a() {
    let key_a = eddsa::generate_key().unwrap();
    let key_b = eddsa::generate_key().unwrap();
    let public_a = key_a.public_key().unwrap();
    let public_b = key_b.public_key().unwrap();

    let signature = key_a.sign(b"hello").unwrap();

    assert!(eddsa::verify(&public_a, b"hello", signature.as_ref()).is_ok());
    assert!(eddsa::verify(&public_b, b"hello", signature.as_ref())
        .unwrap_err()
        .is_verification_failure());
    assert!(eddsa::verify(&public_a, b"hellp", signature.as_ref())
        .unwrap_err()
        .is_verification_failure());
}

#[test]
fn test_empty_message_round_trip() {
    let private_key = eddsa::generate_key().unwrap();
    let public_key = private_key.public_key().unwrap();

    let signature = eddsa::sign(&private_key, b"").unwrap();
    assert!(eddsa::verify(&public_key, b"", signature.as_ref()).is_ok());
}

#[test]
fn test_zero_length_signature_buffer() {
    let public_key = eddsa::generate_key().unwrap().public_key().unwrap();

    let err = eddsa::verify(&public_key, b"hello", &[]).unwrap_err();
    assert!(matches!(err, Error::InvalidSignatureSize { actual: 0, .. }));
    assert!(err.is_verification_failure());
}

#[test]
fn test_large_message() {
    let private_key = eddsa::generate_key().unwrap();
    let public_key = private_key.public_key().unwrap();
    let message = vec![0xa5u8; 1 << 20];

    let signature = private_key.sign(&message).unwrap();
    assert!(public_key.verify(&message, signature.as_ref()).is_ok());
}

#[test]
fn test_private_key_survives_byte_round_trip() {
    let private_key = Ed25519PrivateKey::generate(&mut seeded_rng(7)).unwrap();

    let bytes = private_key.to_bytes_zeroizing();
    assert_eq!(bytes.len(), PRIVATE_KEY_LEN);

    let restored = Ed25519PrivateKey::from_bytes(&bytes).unwrap();
    assert_eq!(restored, private_key);
    assert_eq!(
        restored.sign(b"same key").unwrap(),
        private_key.sign(b"same key").unwrap()
    );
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let k1 = eddsa::generate_key_with(&mut seeded_rng(1)).unwrap();
    let k2 = eddsa::generate_key_with(&mut seeded_rng(1)).unwrap();
    let k3 = eddsa::generate_key_with(&mut seeded_rng(2)).unwrap();

    assert_eq!(k1, k2);
    assert_ne!(k1, k3);
}
