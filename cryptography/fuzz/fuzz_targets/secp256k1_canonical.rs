#![no_main]

use k256::{
    ecdsa,
    elliptic_curve::bigint::{ArrayEncoding, U256},
};
use libfuzzer_sys::fuzz_target;
use sigkey_cryptography::secp256k1::{
    canonical::{canonicalize, normalize_s},
    constants::{HALF_ORDER, ORDER},
};

fuzz_target!(|input: ([u8; 32], [u8; 32])| {
    let (r, s) = input;
    let Ok(raw) = ecdsa::Signature::from_scalars(r, s) else {
        return;
    };
    let canonical = canonicalize(&raw).unwrap();
    let (canonical_r, canonical_s) = canonical.split_bytes();
    let s = U256::from_be_byte_array(s.into());
    let canonical_s = U256::from_be_byte_array(canonical_s);

    // `r` is untouched and `s` follows the `>=` boundary rule.
    assert_eq!(canonical_r.as_slice(), r.as_slice());
    if s >= HALF_ORDER {
        assert_eq!(canonical_s, ORDER.wrapping_sub(&s));
    } else {
        assert_eq!(canonical_s, s);
    }
    assert_eq!(canonical_s, normalize_s(&s));

    // Away from the boundary pair, a second pass changes nothing.
    if s != HALF_ORDER && s != HALF_ORDER.wrapping_add(&U256::ONE) {
        assert_eq!(canonicalize(&canonical).unwrap(), canonical);
        assert!(canonical_s <= HALF_ORDER);
    }
});
