//! Generate secp256k1 keys, persist them as PEM, and produce canonical (low-s) DER signatures.
//!
//! # Status
//!
//! `sigkey-cryptography` is **ALPHA** software and is not yet recommended for production use. Developers should
//! expect breaking changes and occasional instability.

use thiserror::Error;

pub mod secp256k1;
pub use secp256k1::{PrivateKey, PublicKey, Signature};
pub mod sha256;
pub use sha256::hash;
#[cfg(test)]
mod traces;
pub mod utils;

/// Broad classification of an [Error].
///
/// Callers typically reject [ErrorKind::Value] failures as bad input and treat
/// [ErrorKind::Runtime] failures as a fault in the cryptographic environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The underlying library could not complete an operation that should always
    /// succeed in a healthy environment.
    Runtime,
    /// The caller supplied malformed input.
    Value,
}

/// Errors that can occur when working with keys and signatures.
#[derive(Error, Debug)]
pub enum Error {
    #[error("could not generate key: {0}")]
    KeyGeneration(rand::Error),
    #[error("could not serialize key")]
    Serialization,
    #[error("could not compute signature")]
    Signing,
    #[error("could not canonicalize signature")]
    Canonicalization,
    #[error("invalid private key")]
    InvalidPrivateKey,
    #[error("invalid public key")]
    InvalidPublicKey,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("invalid digest length")]
    InvalidDigestLength,
}

impl Error {
    /// Returns the [ErrorKind] of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::KeyGeneration(_)
            | Error::Serialization
            | Error::Signing
            | Error::Canonicalization => ErrorKind::Runtime,
            Error::InvalidPrivateKey
            | Error::InvalidPublicKey
            | Error::InvalidSignature
            | Error::InvalidDigestLength => ErrorKind::Value,
        }
    }
}

/// Produces [Signer::Signature]s over messages that can be verified with a corresponding
/// [Signer::PublicKey].
pub trait Signer: Send + Sync + Clone + 'static {
    /// The type of signature produced by this [Signer].
    type Signature;

    /// The corresponding public key type.
    type PublicKey: Verifier<Signature = Self::Signature>;

    /// Returns the public key corresponding to this [Signer].
    fn public_key(&self) -> Self::PublicKey;

    /// Sign a message.
    ///
    /// The message should not be hashed prior to calling this function. If a particular scheme
    /// requires a payload to be hashed before it is signed, it will be done internally.
    fn sign(&self, msg: &[u8]) -> Result<Self::Signature, Error>;
}

/// Verifies signatures over messages.
pub trait Verifier {
    /// The type of signature that this verifier can verify.
    type Signature;

    /// Verify that a signature is valid over a given message.
    ///
    /// The message should not be hashed prior to calling this function.
    fn verify(&self, msg: &[u8], sig: &Self::Signature) -> bool;
}
