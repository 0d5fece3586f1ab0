//! P-384 (secp384r1) curve adapter

use crate::{EcCurve, curve, error::Result};

/// NIST P-384
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct P384;

impl EcCurve for P384 {
    type SecretKey = p384::SecretKey;
    type PublicKey = p384::PublicKey;

    const NAME: &'static str = "P-384";
    const FIELD_SIZE: usize = 48;

    fn secret_from_bytes(bytes: &[u8]) -> Result<Self::SecretKey> {
        curve::secret_from_bytes(Self::NAME, bytes)
    }

    fn random_secret() -> Self::SecretKey {
        curve::random_secret()
    }

    fn public_from_secret(secret: &Self::SecretKey) -> Self::PublicKey {
        secret.public_key()
    }

    fn point_from_sec1(bytes: &[u8]) -> Result<Self::PublicKey> {
        curve::point_from_sec1(Self::NAME, bytes)
    }

    fn encode_uncompressed(point: &Self::PublicKey) -> Vec<u8> {
        curve::encode_uncompressed(point)
    }

    fn encode_pkix(point: &Self::PublicKey) -> Result<Vec<u8>> {
        curve::encode_pkix(Self::NAME, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_one_is_generator() {
        let mut d = [0u8; 48];
        d[47] = 1;

        let point = P384::public_from_secret(&P384::secret_from_bytes(&d).unwrap());
        let encoded = P384::encode_uncompressed(&point);

        assert_eq!(encoded.len(), 97);
        assert_eq!(
            hex::encode(&encoded[1..49]),
            "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7"
        );
    }

    #[test]
    fn compressed_and_uncompressed_agree() {
        let point = P384::public_from_secret(&P384::random_secret());
        let uncompressed = P384::encode_uncompressed(&point);

        let mut compressed = vec![0x02 | (uncompressed[96] & 1)];
        compressed.extend_from_slice(&uncompressed[1..49]);

        assert_eq!(P384::point_from_sec1(&compressed).unwrap(), point);
    }
}
