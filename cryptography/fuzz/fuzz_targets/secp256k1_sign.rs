#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sigkey_cryptography::secp256k1::{constants::HALF_ORDER, PrivateKey};

#[derive(Debug, Arbitrary)]
pub struct FuzzInput {
    pub seed: u64,
    pub message: Vec<u8>,
    pub other: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let signer = PrivateKey::from_seed(input.seed);
    let public_key = signer.public_key();
    let signature = signer.sign(&input.message).unwrap();
    assert!(signature.s() <= HALF_ORDER);
    assert!(public_key.verify(&input.message, &signature));
    if input.other != input.message {
        assert!(!public_key.verify(&input.other, &signature));
    }

    // Restored keys sign identically.
    let restored = PrivateKey::from_pem(&signer.serialize().unwrap()).unwrap();
    assert_eq!(restored.sign(&input.message).unwrap(), signature);
});
