//! Hash provider for key identifiers

use std::fmt;

use sha2::{Sha256, digest::DynDigest};
use sm3::Sm3;

/// Hash functions a key family can designate for its identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashFunction {
    Sha256,
    /// GB/T 32905, paired with SM2 keys
    Sm3,
}

impl HashFunction {
    /// Starts a streaming hash
    pub fn hasher(self) -> Hasher {
        let inner: Box<dyn DynDigest + Send + Sync> = match self {
            HashFunction::Sha256 => Box::new(Sha256::default()),
            HashFunction::Sm3 => Box::new(Sm3::default()),
        };
        Hasher { inner }
    }

    /// One-shot digest of `data`
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        let mut hasher = self.hasher();
        hasher.update(data);
        hasher.finalize()
    }

    /// Digest length in bytes
    pub fn output_size(self) -> usize {
        match self {
            HashFunction::Sha256 | HashFunction::Sm3 => 32,
        }
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HashFunction::Sha256 => write!(f, "SHA-256"),
            HashFunction::Sm3 => write!(f, "SM3"),
        }
    }
}

/// Streaming hasher returned by [`HashFunction::hasher`]
pub struct Hasher {
    inner: Box<dyn DynDigest + Send + Sync>,
}

impl Hasher {
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Consumes the hasher and returns the digest
    pub fn finalize(self) -> Vec<u8> {
        self.inner.finalize().into_vec()
    }
}

impl fmt::Debug for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Hasher")
            .field("output_size", &self.inner.output_size())
            .finish()
    }
}
