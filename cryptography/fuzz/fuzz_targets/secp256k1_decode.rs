#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sigkey_cryptography::{
    secp256k1::{PrivateKey, PublicKey, Signature},
    ErrorKind,
};

#[derive(Debug, Arbitrary)]
pub struct FuzzInput {
    pub text: String,
    pub bytes: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    // Malformed input is always reported as a value error.
    match PrivateKey::from_pem(&input.text) {
        Ok(key) => {
            let pem = key.serialize().unwrap();
            assert_eq!(PrivateKey::from_pem(&pem).unwrap(), key);
        }
        Err(err) => assert_eq!(err.kind(), ErrorKind::Value),
    }
    if let Err(err) = PublicKey::from_pem(&input.text) {
        assert_eq!(err.kind(), ErrorKind::Value);
    }
    if let Err(err) = PublicKey::try_from(input.bytes.as_slice()) {
        assert_eq!(err.kind(), ErrorKind::Value);
    }
    match Signature::from_der(&input.bytes) {
        Ok(signature) => assert_eq!(signature.as_ref(), input.bytes.as_slice()),
        Err(err) => assert_eq!(err.kind(), ErrorKind::Value),
    }
});
