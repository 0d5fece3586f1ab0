//! Curve point and hash adapters for the SoftCSP key layer
//!
//! This crate provides:
//! - The [`EcCurve`] adapter over the RustCrypto curves (SM2, P-256, P-384, secp256k1)
//! - SEC1 uncompressed point encoding and PKIX (SubjectPublicKeyInfo) export
//! - [`HashFunction`], the SM3/SHA-256 hash provider used for key identifiers
//!
//! Everything here is stateless and reentrant.

mod curve;
mod error;
mod hash;

#[cfg(feature = "sm2")]
pub mod sm2;

#[cfg(feature = "p256")]
pub mod p256;

#[cfg(feature = "k256")]
pub mod secp256k1;

#[cfg(feature = "p384")]
pub mod p384;

pub use curve::EcCurve;
pub use error::{PrimitiveError, Result};
pub use hash::{HashFunction, Hasher};

#[cfg(feature = "p256")]
pub use crate::p256::P256;
#[cfg(feature = "p384")]
pub use crate::p384::P384;
#[cfg(feature = "k256")]
pub use crate::secp256k1::Secp256k1;
#[cfg(feature = "sm2")]
pub use crate::sm2::Sm2;
