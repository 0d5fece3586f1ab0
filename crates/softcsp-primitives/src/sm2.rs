//! SM2 (GB/T 32918) curve adapter

use crate::{EcCurve, curve, error::Result};

/// The SM2 recommended 256-bit prime curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sm2;

impl EcCurve for Sm2 {
    type SecretKey = sm2::SecretKey;
    type PublicKey = sm2::PublicKey;

    const NAME: &'static str = "SM2";
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
