//! SHA-256 digests of signed messages.
//!
//! [crate::secp256k1::PrivateKey::sign] and [crate::secp256k1::PublicKey::verify] never see the
//! message itself, only the 32-byte [Digest] produced by [hash].

use crate::{utils::hex, Error};
use sha2::{Digest as _, Sha256};
use std::{fmt, ops::Deref};
use tracing::warn;

/// Length of a SHA-256 digest in bytes.
pub const DIGEST_LENGTH: usize = 32;

/// Hash `message` with SHA-256.
pub fn hash(message: &[u8]) -> Digest {
    Digest(Sha256::digest(message).into())
}

/// 32-byte SHA-256 output.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Digest([u8; DIGEST_LENGTH]);

impl TryFrom<&[u8]> for Digest {
    type Error = Error;
    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        <[u8; DIGEST_LENGTH]>::try_from(value).map(Self).map_err(|_| {
            warn!(len = value.len(), "unexpected digest length");
            Error::InvalidDigestLength
        })
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for Digest {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex(&self.0))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{traces, utils::from_hex_formatted, ErrorKind};
    use tracing::Level;

    #[test]
    fn test_known_digests() {
        let cases: [(&[u8], &str); 3] = [
            (b"", "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
            (b"hello", "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"),
            (b"hello world", "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"),
        ];
        for (message, expected) in cases {
            let digest = hash(message);
            assert_eq!(digest.to_string(), expected);
            assert_eq!(digest.len(), DIGEST_LENGTH);
        }
    }

    #[test]
    fn test_from_bytes() {
        let bytes = from_hex_formatted(
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9",
        )
        .unwrap();
        assert_eq!(Digest::try_from(bytes.as_slice()).unwrap(), hash(b"hello world"));
    }

    #[test]
    fn test_invalid_length() {
        let events = traces::capture(|| {
            for len in [0, DIGEST_LENGTH - 1, DIGEST_LENGTH + 1] {
                let err = Digest::try_from(vec![0u8; len].as_slice()).unwrap_err();
                assert!(matches!(err, Error::InvalidDigestLength));
                assert_eq!(err.kind(), ErrorKind::Value);
            }
        });
        assert_eq!(traces::count(&events, Level::WARN), 3);
    }
}
