//! The capability contract shared by every key family

use std::fmt;

use crate::{KeyType, error::Result};

/// A key as seen by the provider, independent of its algorithm.
///
/// The registry and every caller above it only ever hold `dyn Key`. Implementations
/// are immutable once built, so a key can be shared across threads freely.
pub trait Key: fmt::Debug + Send + Sync {
    /// Raw key material.
    ///
    /// Families that forbid raw private export fail with
    /// [`KeyError::UnsupportedOperation`](crate::KeyError::UnsupportedOperation)
    /// and never return empty or partial bytes. Public keys return their PKIX
    /// (SubjectPublicKeyInfo) encoding.
    fn bytes(&self) -> Result<Vec<u8>>;

    /// Subject Key Identifier.
    ///
    /// Depends only on public material, so a private key and its public key share
    /// the same SKI. Empty when the key has no public material yet; this is not an
    /// error.
    fn ski(&self) -> Vec<u8>;

    /// True for symmetric cipher keys
    fn symmetric(&self) -> bool;

    /// True if this instance holds private material
    fn private(&self) -> bool;

    /// The public counterpart; a public key returns an equivalent instance of itself
    fn public_key(&self) -> Result<Box<dyn Key>>;

    fn key_type(&self) -> KeyType;
}
