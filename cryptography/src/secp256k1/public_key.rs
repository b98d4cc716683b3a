use super::{
    constants::{CURVE_NAME, PUBLIC_KEY_LENGTH},
    Signature,
};
use crate::{sha256, utils::hex, Error, Verifier};
use k256::{
    ecdsa::{signature::hazmat::PrehashVerifier, VerifyingKey},
    elliptic_curve::scalar::IsHigh,
    pkcs8::{DecodePublicKey, EncodePublicKey, LineEnding},
};
use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    ops::Deref,
    str::FromStr,
};
use tracing::{error, trace, warn};

/// Secp256k1 public key.
///
/// Byte representation (and ordering) is the SEC 1 compressed point (Y-Parity || X).
#[derive(Clone)]
pub struct PublicKey {
    raw: [u8; PUBLIC_KEY_LENGTH],
    key: VerifyingKey,
}

impl PublicKey {
    /// Parse a `PUBLIC KEY` (SubjectPublicKeyInfo) PEM block.
    pub fn from_pem(encoded: &str) -> Result<Self, Error> {
        let key = VerifyingKey::from_public_key_pem(encoded).map_err(|_| {
            warn!(curve = CURVE_NAME, "failed to deserialize public key");
            Error::InvalidPublicKey
        })?;
        Ok(Self::from(key))
    }

    /// Serialize as a `PUBLIC KEY` (SubjectPublicKeyInfo) PEM block.
    pub fn serialize(&self) -> Result<String, Error> {
        self.key.to_public_key_pem(LineEnding::LF).map_err(|err| {
            error!(?err, curve = CURVE_NAME, "failed to serialize public key");
            Error::Serialization
        })
    }

    /// Verify a DER signature over the SHA-256 digest of `message`.
    ///
    /// Signatures with `s > n >> 1` are rejected. `s == n >> 1` is accepted here even though
    /// [Signature::is_canonical] reports it as non-canonical.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        let signature = signature.inner();
        if signature.s().is_high().into() {
            // Reject any signatures with a `s` value in the upper half of the curve order.
            trace!("rejected high-s signature");
            return false;
        }
        let digest = sha256::hash(message);
        self.key
            .verify_prehash(digest.as_ref(), signature)
            .is_ok()
    }
}

impl Verifier for PublicKey {
    type Signature = Signature;

    fn verify(&self, msg: &[u8], sig: &Signature) -> bool {
        PublicKey::verify(self, msg, sig)
    }
}

impl From<VerifyingKey> for PublicKey {
    fn from(key: VerifyingKey) -> Self {
        let mut raw = [0u8; PUBLIC_KEY_LENGTH];
        raw.copy_from_slice(key.to_encoded_point(true).as_bytes());
        Self { raw, key }
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;
    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let key = VerifyingKey::from_sec1_bytes(value).map_err(|_| {
            warn!(len = value.len(), curve = CURVE_NAME, "failed to decode public key");
            Error::InvalidPublicKey
        })?;
        Ok(Self::from(key))
    }
}

impl TryFrom<&Vec<u8>> for PublicKey {
    type Error = Error;
    fn try_from(value: &Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_slice())
    }
}

impl FromStr for PublicKey {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_pem(s)
    }
}

impl Eq for PublicKey {}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Ord for PublicKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl PartialOrd for PublicKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for PublicKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.raw
    }
}

impl Deref for PublicKey {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.raw
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&self.raw))
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&self.raw))
    }
}
