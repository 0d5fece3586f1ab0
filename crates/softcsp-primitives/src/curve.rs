//! Curve adapter trait and the shared RustCrypto plumbing behind it

use std::fmt;

use elliptic_curve::{
    AffinePoint, CurveArithmetic, FieldBytesSize, PublicKey, SecretKey,
    pkcs8::{AssociatedOid, EncodePublicKey},
    sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint},
};
use rand::rngs::OsRng;

use crate::{PrimitiveError, Result};

/// SEC1 tag for an uncompressed point
const UNCOMPRESSED_TAG: u8 = 0x04;

/// An elliptic curve as seen by the key layer.
///
/// Implementations only delegate to the underlying curve crate. Points handed
/// out by an implementation are always valid, non-identity points on the curve.
pub trait EcCurve: fmt::Debug + Send + Sync + 'static {
    type SecretKey: Clone + Send + Sync;
    type PublicKey: Clone + fmt::Debug + PartialEq + Send + Sync;

    /// Human readable curve name, used in errors and logs
    const NAME: &'static str;

    /// Width of a field element in bytes
    const FIELD_SIZE: usize;

    /// Parses a big-endian private scalar
    fn secret_from_bytes(bytes: &[u8]) -> Result<Self::SecretKey>;

    /// Draws a private scalar from the OS RNG
    fn random_secret() -> Self::SecretKey;

    /// Generator multiplied by the secret scalar
    fn public_from_secret(secret: &Self::SecretKey) -> Self::PublicKey;

    /// Parses a SEC1 encoded point (compressed or uncompressed)
    fn point_from_sec1(bytes: &[u8]) -> Result<Self::PublicKey>;

    /// Builds a point from big-endian affine coordinates.
    ///
    /// Coordinates shorter than the field width are left-padded with zeros,
    /// longer ones are rejected.
    fn point_from_coordinates(x: &[u8], y: &[u8]) -> Result<Self::PublicKey> {
        let mut encoded = Vec::with_capacity(1 + 2 * Self::FIELD_SIZE);
        encoded.push(UNCOMPRESSED_TAG);
        for coordinate in [x, y] {
            if coordinate.len() > Self::FIELD_SIZE {
                return Err(PrimitiveError::CoordinateLength {
                    curve: Self::NAME,
                    expected: Self::FIELD_SIZE,
                    actual: coordinate.len(),
                });
            }
            encoded.resize(encoded.len() + Self::FIELD_SIZE - coordinate.len(), 0);
            encoded.extend_from_slice(coordinate);
        }

        Self::point_from_sec1(&encoded)
    }

    /// SEC1 uncompressed encoding: `0x04 || X || Y`, fixed width
    fn encode_uncompressed(point: &Self::PublicKey) -> Vec<u8>;

    /// Fixed width big-endian `(X, Y)`
    fn coordinates(point: &Self::PublicKey) -> (Vec<u8>, Vec<u8>) {
        let encoded = Self::encode_uncompressed(point);
        let (x, y) = encoded[1..].split_at(Self::FIELD_SIZE);
        (x.to_vec(), y.to_vec())
    }

    /// DER SubjectPublicKeyInfo carrying the curve OID and the uncompressed point
    fn encode_pkix(point: &Self::PublicKey) -> Result<Vec<u8>>;
}

pub(crate) fn secret_from_bytes<C>(curve: &'static str, bytes: &[u8]) -> Result<SecretKey<C>>
where
    C: CurveArithmetic,
{
    SecretKey::<C>::from_slice(bytes).map_err(|source| PrimitiveError::InvalidScalar { curve, source })
}

pub(crate) fn random_secret<C>() -> SecretKey<C>
where
    C: CurveArithmetic,
{
    SecretKey::<C>::random(&mut OsRng)
}

pub(crate) fn point_from_sec1<C>(curve: &'static str, bytes: &[u8]) -> Result<PublicKey<C>>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    PublicKey::<C>::from_sec1_bytes(bytes)
        .map_err(|source| PrimitiveError::InvalidPoint { curve, source })
}

pub(crate) fn encode_uncompressed<C>(point: &PublicKey<C>) -> Vec<u8>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    point.to_encoded_point(false).as_bytes().to_vec()
}

pub(crate) fn encode_pkix<C>(curve: &'static str, point: &PublicKey<C>) -> Result<Vec<u8>>
where
    C: AssociatedOid + CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    point
        .to_public_key_der()
        .map(|document| document.as_bytes().to_vec())
        .map_err(|source| PrimitiveError::Pkix { curve, source })
}
