use super::{
    canonical,
    constants::{CURVE_NAME, ORDER, PRIVATE_KEY_LENGTH},
    PublicKey, Signature,
};
use crate::{sha256, Error, Signer};
use k256::{
    ecdsa::{self, SigningKey},
    elliptic_curve::{bigint::ArrayEncoding, ops::Reduce, point::AffineCoordinates, PrimeField},
    pkcs8::LineEnding,
    FieldBytes, ProjectivePoint, Scalar, SecretKey, U256,
};
use rand::{rngs::OsRng, CryptoRng, Rng, RngCore, SeedableRng};
use std::{fmt::Debug, str::FromStr};
use tracing::{error, trace, warn};
use zeroize::Zeroizing;

/// Secp256k1 private key.
///
/// Holds the private scalar together with the public point. The scalar is zeroized when the
/// key is dropped. Cloning produces an independent copy.
#[derive(Clone)]
pub struct PrivateKey {
    key: SigningKey,
}

impl PrivateKey {
    /// Generate a fresh key from the operating system's entropy source.
    pub fn generate() -> Result<Self, Error> {
        let mut bytes = Zeroizing::new([0u8; PRIVATE_KEY_LENGTH]);
        loop {
            OsRng.try_fill_bytes(&mut bytes[..]).map_err(|err| {
                error!(?err, curve = CURVE_NAME, "failed to read entropy");
                Error::KeyGeneration(err)
            })?;

            // Zero and values at or above the group order are rejected and redrawn.
            if let Ok(key) = SigningKey::from_slice(&bytes[..]) {
                return Ok(Self { key });
            }
        }
    }

    /// Create a fresh key using the supplied RNG.
    pub fn from_rng<R: Rng + CryptoRng>(rng: &mut R) -> Self {
        Self {
            key: SigningKey::random(rng),
        }
    }

    /// Create a key from a seed.
    ///
    /// # Warning
    ///
    /// This function is insecure and should only be used for examples
    /// and testing.
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        Self::from_rng(&mut rng)
    }

    /// Parse a PEM-encoded `EC PRIVATE KEY` block.
    pub fn from_pem(encoded: &str) -> Result<Self, Error> {
        let secret = SecretKey::from_sec1_pem(encoded).map_err(|_| {
            warn!(curve = CURVE_NAME, "failed to deserialize private key");
            Error::InvalidPrivateKey
        })?;
        Ok(Self {
            key: SigningKey::from(secret),
        })
    }

    /// Replace this key with one parsed from a PEM-encoded `EC PRIVATE KEY` block.
    ///
    /// The current key is left untouched if `encoded` cannot be parsed.
    pub fn deserialize(&mut self, encoded: &str) -> Result<(), Error> {
        *self = Self::from_pem(encoded)?;
        Ok(())
    }

    /// Serialize the key (including its public point) as an unencrypted `EC PRIVATE KEY` PEM block.
    pub fn serialize(&self) -> Result<Zeroizing<String>, Error> {
        let secret = SecretKey::from(*self.key.as_nonzero_scalar());
        secret.to_sec1_pem(LineEnding::LF).map_err(|err| {
            error!(?err, curve = CURVE_NAME, "failed to serialize private key");
            Error::Serialization
        })
    }

    /// Derive the [PublicKey] for this key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from(self.key.verifying_key().to_owned())
    }

    /// Sign the SHA-256 digest of `message`.
    ///
    /// The returned signature is DER-encoded and canonical: `s` is replaced with `n - s`
    /// whenever `s >= n >> 1`.
    pub fn sign(&self, message: &[u8]) -> Result<Signature, Error> {
        let digest = sha256::hash(message);
        let raw = self.sign_digest(&digest).ok_or_else(|| {
            error!(curve = CURVE_NAME, "failed to compute signature");
            Error::Signing
        })?;
        let signature = canonical::canonicalize(&raw)?;
        trace!(len = message.len(), "signed message");
        Ok(Signature::from(signature))
    }

    /// Sign a digest without touching `s`.
    ///
    /// The nonce `k` is derived from the scalar and the digest (RFC 6979, HMAC-SHA256).
    /// Returns `None` if `r` or `s` is zero.
    fn sign_digest(&self, digest: &sha256::Digest) -> Option<ecdsa::Signature> {
        let d: Scalar = **self.key.as_nonzero_scalar();
        let z = <Scalar as Reduce<U256>>::reduce_bytes(FieldBytes::from_slice(digest.as_ref()));
        let k = rfc6979::generate_k::<sha2::Sha256, _>(
            &d.to_bytes(),
            &ORDER.to_be_byte_array(),
            &z.to_bytes(),
            &[],
        );
        let k = Option::<Scalar>::from(Scalar::from_repr(k))?;
        let k_inv = Option::<Scalar>::from(k.invert())?;

        // r = x(kG) mod n, s = k^-1 (z + r d) mod n
        let point = (ProjectivePoint::GENERATOR * k).to_affine();
        let r = <Scalar as Reduce<U256>>::reduce_bytes(&point.x());
        let s = k_inv * (z + r * d);
        ecdsa::Signature::from_scalars(r.to_bytes(), s.to_bytes()).ok()
    }
}

impl Signer for PrivateKey {
    type Signature = Signature;
    type PublicKey = PublicKey;

    fn public_key(&self) -> PublicKey {
        PrivateKey::public_key(self)
    }

    fn sign(&self, msg: &[u8]) -> Result<Signature, Error> {
        PrivateKey::sign(self, msg)
    }
}

impl FromStr for PrivateKey {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_pem(s)
    }
}

impl TryFrom<&[u8]> for PrivateKey {
    type Error = Error;
    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        if value.len() != PRIVATE_KEY_LENGTH {
            warn!(len = value.len(), "unexpected private key length");
            return Err(Error::InvalidPrivateKey);
        }
        let key = SigningKey::from_slice(value).map_err(|_| {
            warn!(curve = CURVE_NAME, "private scalar out of range");
            Error::InvalidPrivateKey
        })?;
        Ok(Self { key })
    }
}

impl Eq for PrivateKey {}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public_key", &self.public_key())
            .finish_non_exhaustive()
    }
}
