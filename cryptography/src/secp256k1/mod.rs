//! Secp256k1 private keys that produce canonical DER signatures.
//!
//! Messages are hashed with SHA-256 before signing. Nonces are derived deterministically as
//! specified in [RFC 6979](https://datatracker.ietf.org/doc/html/rfc6979), so signing the same
//! message with the same key always yields the same bytes. Every signature is canonicalized
//! (see [canonical]) before it is DER-encoded, removing the `(r, s)` / `(r, n - s)` malleability.
//!
//! Private keys are exchanged as unencrypted SEC 1 `EC PRIVATE KEY` PEM blocks and public keys as
//! SubjectPublicKeyInfo `PUBLIC KEY` PEM blocks.
//!
//! # Example
//! ```rust
//! use sigkey_cryptography::secp256k1::PrivateKey;
//!
//! // Generate a new private key
//! let signer = PrivateKey::generate().expect("entropy should be available");
//!
//! // Persist and restore it
//! let pem = signer.serialize().expect("key should serialize");
//! let restored = PrivateKey::from_pem(&pem).expect("key should deserialize");
//!
//! // Sign a message
//! let msg = b"hello, world!";
//! let signature = restored.sign(msg).expect("signing should succeed");
//!
//! // Verify the signature
//! assert!(signer.public_key().verify(msg, &signature));
//! ```

pub mod canonical;
pub mod constants;
mod private_key;
pub use private_key::PrivateKey;
mod public_key;
pub use public_key::PublicKey;
mod signature;
pub use signature::Signature;
