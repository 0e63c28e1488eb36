//! Shared helpers for the natrium test suites

use natrium_sign::eddsa::{Ed25519PrivateKey, Ed25519PublicKey};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Deterministic CSPRNG so failing cases can be replayed
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Private key and its public key, both from `seed`
pub fn keypair_from_seed(seed: [u8; 32]) -> (Ed25519PrivateKey, Ed25519PublicKey) {
    let private_key = Ed25519PrivateKey::from_seed(&seed);
    let public_key = private_key
        .public_key()
        .expect("a key expanded from a seed is never corrupted");
    (private_key, public_key)
}

/// Copy of `bytes` with bit `bit` inverted. `bit` wraps around the length.
pub fn flip_bit(bytes: &[u8], bit: usize) -> Vec<u8> {
    let mut out = bytes.to_vec();
    if !out.is_empty() {
        let bit = bit % (out.len() * 8);
        out[bit / 8] ^= 1 << (bit % 8);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_bit_wraps() {
        assert_eq!(flip_bit(&[0u8, 0], 9), vec![0, 2]);
        assert_eq!(flip_bit(&[0u8], 8), vec![1]);
        assert!(flip_bit(&[], 3).is_empty());
    }
}
