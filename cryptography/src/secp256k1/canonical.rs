//! Canonicalization of ECDSA signatures to the low-s form.
//!
//! For any valid signature `(r, s)` over group order `n`, `(r, n - s)` is also valid. Systems
//! that index or deduplicate by signature bytes must therefore pick exactly one of the two.
//! This module always moves `s` below `n >> 1`, using `>=` at the boundary: a raw
//! `s == n >> 1` is replaced with `n - s`.
//!
//! `r` is never modified.

use super::constants::{HALF_ORDER, ORDER};
use crate::Error;
use k256::{
    ecdsa,
    elliptic_curve::bigint::{ArrayEncoding, U256},
};
use tracing::error;

/// Returns `n - s` if `s >= n >> 1`, otherwise `s`.
pub fn normalize_s(s: &U256) -> U256 {
    if *s >= HALF_ORDER {
        ORDER.wrapping_sub(s)
    } else {
        *s
    }
}

/// Returns `true` if `s` is left unchanged by [normalize_s].
pub fn is_canonical(s: &U256) -> bool {
    *s < HALF_ORDER
}

/// Canonicalizes a raw signature produced by the signing primitive.
pub fn canonicalize(signature: &ecdsa::Signature) -> Result<ecdsa::Signature, Error> {
    let (r, s) = signature.split_bytes();
    let s = normalize_s(&U256::from_be_byte_array(s));
    ecdsa::Signature::from_scalars(r, s.to_be_byte_array()).map_err(|err| {
        error!(?err, "failed to rebuild canonical signature");
        Error::Canonicalization
    })
}
