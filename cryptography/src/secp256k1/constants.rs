//! Fixed parameters of the configured curve.

use k256::{
    elliptic_curve::{bigint::U256, Curve},
    Secp256k1,
};

/// Name of the configured curve.
pub const CURVE_NAME: &str = "secp256k1";

/// Object identifier of the configured curve (SEC 2, Section 2.4.1).
pub const CURVE_OID: &str = "1.3.132.0.10";

/// Order `n` of the curve's prime-order subgroup.
pub const ORDER: U256 = <Secp256k1 as Curve>::ORDER;

/// `n >> 1`, the boundary used to canonicalize `s`.
pub const HALF_ORDER: U256 = ORDER.shr_vartime(1);

/// Length of a serialized private scalar.
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Length of a SEC 1 compressed public key (Y-Parity || X).
pub const PUBLIC_KEY_LENGTH: usize = 33;

/// Length of the digest that is signed.
pub const DIGEST_LENGTH: usize = crate::sha256::DIGEST_LENGTH;
