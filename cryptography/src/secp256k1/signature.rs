use super::canonical;
use crate::{utils::hex, Error};
use k256::{
    ecdsa,
    elliptic_curve::bigint::{ArrayEncoding, U256},
};
use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    ops::Deref,
};
use tracing::warn;

/// DER-encoded secp256k1 ECDSA signature (`SEQUENCE { INTEGER r, INTEGER s }`).
#[derive(Clone)]
pub struct Signature {
    raw: Vec<u8>,
    signature: ecdsa::Signature,
}

impl Signature {
    /// Parse a DER-encoded signature.
    ///
    /// Both canonical and non-canonical `s` values are accepted here; [super::PublicKey::verify]
    /// rejects the latter.
    pub fn from_der(bytes: &[u8]) -> Result<Self, Error> {
        let signature = ecdsa::Signature::from_der(bytes).map_err(|_| {
            warn!(len = bytes.len(), "failed to decode DER signature");
            Error::InvalidSignature
        })?;
        Ok(Self {
            raw: bytes.to_vec(),
            signature,
        })
    }

    /// Returns the `r` component.
    pub fn r(&self) -> U256 {
        U256::from_be_byte_array(self.signature.split_bytes().0)
    }

    /// Returns the `s` component.
    pub fn s(&self) -> U256 {
        U256::from_be_byte_array(self.signature.split_bytes().1)
    }

    /// Returns `true` if `s` would be left unchanged by canonicalization (`s < n >> 1`).
    ///
    /// This is stricter than [super::PublicKey::verify], which only rejects `s > n >> 1`.
    pub fn is_canonical(&self) -> bool {
        canonical::is_canonical(&self.s())
    }

    /// Returns a copy of the DER encoding.
    pub fn to_vec(&self) -> Vec<u8> {
        self.raw.clone()
    }

    pub(super) fn inner(&self) -> &ecdsa::Signature {
        &self.signature
    }
}

impl From<ecdsa::Signature> for Signature {
    fn from(signature: ecdsa::Signature) -> Self {
        let raw = signature.to_der().as_bytes().to_vec();
        Self { raw, signature }
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;
    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::from_der(value)
    }
}

impl TryFrom<Vec<u8>> for Signature {
    type Error = Error;
    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_der(&value)
    }
}

impl Eq for Signature {}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Hash for Signature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.raw
    }
}

impl Deref for Signature {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.raw
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&self.raw))
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&self.raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{utils::from_hex_formatted, ErrorKind};

    #[test]
    fn test_der_layout() {
        let signature = ecdsa::Signature::from_scalars(
            U256::from_u64(1).to_be_byte_array(),
            U256::from_u64(0x80).to_be_byte_array(),
        )
        .unwrap();
        let signature = Signature::from(signature);

        // SEQUENCE { INTEGER 1, INTEGER 0x0080 }: a leading zero keeps 0x80 positive.
        assert_eq!(
            signature.to_vec(),
            from_hex_formatted("3007 020101 02020080").unwrap()
        );
        assert_eq!(signature.r(), U256::ONE);
        assert_eq!(signature.s(), U256::from_u64(0x80));
        assert!(signature.is_canonical());
    }

    #[test]
    fn test_half_order_is_not_canonical_but_not_high() {
        use crate::secp256k1::constants::HALF_ORDER;
        use k256::elliptic_curve::scalar::IsHigh;

        let signature = ecdsa::Signature::from_scalars(
            U256::ONE.to_be_byte_array(),
            HALF_ORDER.to_be_byte_array(),
        )
        .unwrap();
        let signature = Signature::from(signature);
        assert!(!signature.is_canonical());
        assert!(!bool::from(signature.inner().s().is_high()));
    }

    #[test]
    fn test_from_der() {
        let bytes = from_hex_formatted("3007 020101 02020080").unwrap();
        let signature = Signature::from_der(&bytes).unwrap();
        assert_eq!(signature.as_ref(), bytes.as_slice());
        assert_eq!(Signature::try_from(bytes.clone()).unwrap(), signature);
    }

    #[test]
    fn test_from_der_invalid() {
        for bytes in [
            Vec::new(),
            b"garbage".to_vec(),
            // r = 0
            from_hex_formatted("3006 020100 020101").unwrap(),
            // truncated
            from_hex_formatted("3007 020101 020200").unwrap(),
        ] {
            let err = Signature::from_der(&bytes).unwrap_err();
            assert!(matches!(err, Error::InvalidSignature));
            assert_eq!(err.kind(), ErrorKind::Value);
        }
    }
}
