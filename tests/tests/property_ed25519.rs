//! Property-based tests for Ed25519 signing and verification

use natrium_sign::eddsa::{derive_public_key, sign, verify, SIGNATURE_LEN};
use natrium_tests::{flip_bit, keypair_from_seed};
use proptest::prelude::*;

fn message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=512)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sign_then_verify_succeeds(seed in any::<[u8; 32]>(), msg in message()) {
        let (private_key, public_key) = keypair_from_seed(seed);

        let signature = sign(&private_key, &msg).unwrap();
        prop_assert!(verify(&public_key, &msg, signature.as_ref()).is_ok());
    }

    #[test]
    fn derivation_is_deterministic(seed in any::<[u8; 32]>()) {
        let (private_key, public_key) = keypair_from_seed(seed);

        prop_assert_eq!(derive_public_key(&private_key).unwrap(), public_key.clone());
        prop_assert_eq!(private_key.public_key().unwrap(), public_key);
    }

    #[test]
    fn signing_is_deterministic(seed in any::<[u8; 32]>(), msg in message()) {
        let (private_key, _) = keypair_from_seed(seed);

        prop_assert_eq!(sign(&private_key, &msg).unwrap(), sign(&private_key, &msg).unwrap());
    }

    #[test]
    fn distinct_seeds_give_distinct_public_keys(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        prop_assume!(a != b);

        let (_, pk_a) = keypair_from_seed(a);
        let (_, pk_b) = keypair_from_seed(b);
        prop_assert_ne!(pk_a, pk_b);
    }

    #[test]
    fn message_bit_flip_is_rejected(
        seed in any::<[u8; 32]>(),
        msg in prop::collection::vec(any::<u8>(), 1..=512),
        bit in any::<usize>(),
    ) {
        let (private_key, public_key) = keypair_from_seed(seed);
        let signature = sign(&private_key, &msg).unwrap();

        let tampered = flip_bit(&msg, bit);
        let err = verify(&public_key, &tampered, signature.as_ref()).unwrap_err();
        prop_assert!(err.is_verification_failure());
    }

    #[test]
    fn signature_bit_flip_is_rejected(
        seed in any::<[u8; 32]>(),
        msg in message(),
        bit in 0..SIGNATURE_LEN * 8,
    ) {
        let (private_key, public_key) = keypair_from_seed(seed);
        let signature = sign(&private_key, &msg).unwrap();

        let tampered = flip_bit(signature.as_ref(), bit);
        let err = verify(&public_key, &msg, &tampered).unwrap_err();
        prop_assert!(err.is_verification_failure());
    }

    #[test]
    fn wrong_length_signature_is_rejected(
        seed in any::<[u8; 32]>(),
        msg in message(),
        sig in prop::collection::vec(any::<u8>(), 0..=256),
    ) {
        prop_assume!(sig.len() != SIGNATURE_LEN);
        let (_, public_key) = keypair_from_seed(seed);

        let err = verify(&public_key, &msg, &sig).unwrap_err();
        prop_assert!(err.is_verification_failure());
        prop_assert!(!err.is_fatal());
    }

    #[test]
    fn unrelated_public_key_is_rejected(
        a in any::<[u8; 32]>(),
        b in any::<[u8; 32]>(),
        msg in message(),
    ) {
        prop_assume!(a != b);
        let (private_key, _) = keypair_from_seed(a);
        let (_, other_public_key) = keypair_from_seed(b);

        let signature = sign(&private_key, &msg).unwrap();
        let err = verify(&other_public_key, &msg, signature.as_ref()).unwrap_err();
        prop_assert!(err.is_verification_failure());
    }
}
