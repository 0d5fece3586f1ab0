//! P-256 (secp256r1/prime256v1) curve adapter

use crate::{EcCurve, curve, error::Result};

/// NIST P-256
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct P256;

impl EcCurve for P256 {
    type SecretKey = p256::SecretKey;
    type PublicKey = p256::PublicKey;

    const NAME: &'static str = "P-256";
    const FIELD_SIZE: usize = 32;

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
