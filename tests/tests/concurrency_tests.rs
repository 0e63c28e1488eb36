//! Concurrent first use and concurrent signing/verification

use std::sync::{Arc, Barrier};
use std::thread;

use natrium_sign::eddsa;
use natrium_tests::keypair_from_seed;

const THREADS: usize = 8;

#[test]
fn test_concurrent_operations_share_one_initialization() {
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();

                let params = eddsa::init().unwrap();
                let (private_key, public_key) = keypair_from_seed([i as u8; 32]);
                let message = format!("message from thread {}", i);

                for _ in 0..16 {
                    let signature = eddsa::sign(&private_key, message.as_bytes()).unwrap();
                    eddsa::verify(&public_key, message.as_bytes(), signature.as_ref()).unwrap();
                }

                params as *const eddsa::Ed25519Params as usize
            })
        })
        .collect();

    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_shared_public_key_verifies_across_threads() {
    let (private_key, public_key) = keypair_from_seed([9u8; 32]);
    let signature = Arc::new(private_key.sign(b"shared").unwrap());
    let public_key = Arc::new(public_key);

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let signature = Arc::clone(&signature);
            let public_key = Arc::clone(&public_key);
            thread::spawn(move || {
                public_key.verify(b"shared", signature.as_bytes()).is_ok()
                    && public_key
                        .verify(b"shareD", signature.as_bytes())
                        .is_err()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
