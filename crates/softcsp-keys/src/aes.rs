//! AES symmetric keys

use std::fmt;

use rand::{RngCore, rngs::OsRng};
use tracing::debug;
use zeroize::Zeroizing;

use crate::{Key, KeyError, KeyType, error::Result, ski};

/// AES key material. Raw export is only allowed when the key was created exportable.
#[derive(Clone)]
pub struct AesKey {
    key: Zeroizing<Vec<u8>>,
    exportable: bool,
}

impl AesKey {
    /// Wraps existing key material (16, 24 or 32 bytes)
    pub fn new(key: &[u8], exportable: bool) -> Result<Self> {
        Self::check_length(key.len())?;

        Ok(AesKey {
            key: Zeroizing::new(key.to_vec()),
            exportable,
        })
    }

    /// Generates a random key of `len` bytes
    pub fn generate(len: usize, exportable: bool) -> Result<Self> {
        Self::check_length(len)?;

        let mut key = Zeroizing::new(vec![0u8; len]);
        OsRng.fill_bytes(&mut key);

        Ok(AesKey { key, exportable })
    }

    fn check_length(len: usize) -> Result<()> {
        match len {
            16 | 24 | 32 => Ok(()),
            _ => Err(KeyError::InvalidKey(format!(
                "AES key must be 16, 24 or 32 bytes, got {len}"
            ))),
        }
    }

    pub fn exportable(&self) -> bool {
        self.exportable
    }
}

impl Key for AesKey {
    fn bytes(&self) -> Result<Vec<u8>> {
        if self.exportable {
            Ok(self.key.to_vec())
        } else {
            debug!("Refused export of non-exportable AES key");
            Err(KeyError::UnsupportedOperation(
                "AES key is not exportable".into(),
            ))
        }
    }

    fn ski(&self) -> Vec<u8> {
        ski::from_symmetric(&self.key)
    }

    fn symmetric(&self) -> bool {
        true
    }

    fn private(&self) -> bool {
        true
    }

    fn public_key(&self) -> Result<Box<dyn Key>> {
        Err(KeyError::UnsupportedOperation(
            "symmetric keys have no public key".into(),
        ))
    }

    fn key_type(&self) -> KeyType {
        KeyType::Aes
    }
}

impl fmt::Debug for AesKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AesKey")
            .field("len", &self.key.len())
            .field("exportable", &self.exportable)
            .field("ski", &ski::to_hex(&self.ski()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<u8> {
        (0u8..32).collect()
    }

    #[test]
    fn exportable_key_returns_material() {
        let key = AesKey::new(&sample(), true).unwrap();

        assert_eq!(key.bytes().unwrap(), sample());
        assert!(key.symmetric());
        assert!(key.private());
        assert_eq!(key.key_type(), KeyType::Aes);
    }

    #[test]
    fn non_exportable_key_refuses() {
        let key = AesKey::new(&sample(), false).unwrap();

        assert!(matches!(
            key.bytes(),
            Err(KeyError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn ski_matches_fixture() {
        let key = AesKey::new(&sample(), false).unwrap();

        assert_eq!(
            ski::to_hex(&key.ski()),
            "491176b0f443c65a7c7d72df47d6cbc0d04e111fb5a619f60d3e77677ab6f919"
        );
    }

    #[test]
    fn no_public_key() {
        let key = AesKey::generate(16, true).unwrap();

        assert!(matches!(
            key.public_key(),
            Err(KeyError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn bad_lengths_rejected() {
        assert!(matches!(AesKey::new(&[0u8; 15], true), Err(KeyError::InvalidKey(_))));
        assert!(matches!(AesKey::generate(0, true), Err(KeyError::InvalidKey(_))));
    }

    #[test]
    fn generated_keys_differ() {
        let a = AesKey::generate(32, true).unwrap();
        let b = AesKey::generate(32, true).unwrap();

        assert_eq!(a.bytes().unwrap().len(), 32);
        assert_ne!(a.ski(), b.ski());
    }

    #[test]
    fn debug_hides_material() {
        let key = AesKey::new(&[0xab; 16], true).unwrap();

        assert!(!format!("{key:?}").contains("abab"));
    }
}
