/*!
 * Key Registry
 *
 * An SKI-indexed table of keys built by the host provider at start-up and
 * handed to whoever needs it. There is no global instance.
 *
 * A private key and its public key share one slot: inserting the private key
 * replaces the public one, and a public key never shadows a stored private key.
 */

use std::sync::Arc;

use ahash::AHashMap;
use tracing::{debug, warn};

use crate::{Key, KeyError, error::Result, ski};

#[derive(Debug, Default)]
pub struct KeyRegistry {
    keys: AHashMap<Vec<u8>, Arc<dyn Key>>,
}

impl KeyRegistry {
    /// Instantiate an empty KeyRegistry
    ///
    /// ```
    /// use softcsp_keys::KeyRegistry;
    ///
    /// let registry = KeyRegistry::new();
    /// assert!(registry.is_empty());
    /// ```
    pub fn new() -> Self {
        KeyRegistry::default()
    }

    /// Stores a key under its SKI and returns the SKI
    ///
    /// Keys without an SKI (e.g. a public key whose point isn't known) can't be
    /// indexed and are rejected.
    pub fn insert(&mut self, key: Arc<dyn Key>) -> Result<Vec<u8>> {
        let ski = key.ski();
        if ski.is_empty() {
            warn!("Refusing to register {} key without an SKI", key.key_type());
            return Err(KeyError::InvalidKey(format!(
                "{} key has no SKI",
                key.key_type()
            )));
        }

        if self
            .keys
            .get(&ski)
            .is_some_and(|existing| existing.private() && !key.private())
        {
            debug!(
                "Keeping private {} key ({}) over its public key",
                key.key_type(),
                ski::to_hex(&ski)
            );
            return Ok(ski);
        }

        debug!("Adding {} key ({})", key.key_type(), ski::to_hex(&ski));
        self.keys.insert(ski.clone(), key);

        Ok(ski)
    }

    /// Get a key by its SKI
    pub fn get(&self, ski: &[u8]) -> Option<Arc<dyn Key>> {
        self.keys.get(ski).cloned()
    }

    /// Removes the key with the given SKI
    pub fn remove(&mut self, ski: &[u8]) -> Option<Arc<dyn Key>> {
        let removed = self.keys.remove(ski);
        if removed.is_some() {
            debug!("Removed key ({})", ski::to_hex(ski));
        }
        removed
    }

    pub fn contains(&self, ski: &[u8]) -> bool {
        self.keys.contains_key(ski)
    }

    /// Returns the number of registered keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if there are no registered keys
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AesKey;

    #[test]
    fn insert_and_get() {
        let mut registry = KeyRegistry::new();
        let key = Arc::new(AesKey::generate(32, false).unwrap());

        let ski = registry.insert(key.clone()).unwrap();
        assert_eq!(ski, key.ski());
        assert!(registry.contains(&ski));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&ski).unwrap().ski(), ski);
    }

    #[test]
    fn remove_empties_registry() {
        let mut registry = KeyRegistry::new();
        let ski = registry
            .insert(Arc::new(AesKey::generate(16, true).unwrap()))
            .unwrap();

        assert!(registry.remove(&ski).is_some());
        assert!(registry.remove(&ski).is_none());
        assert!(registry.is_empty());
        assert!(registry.get(&ski).is_none());
    }

    #[cfg(feature = "sm2")]
    #[test]
    fn private_key_wins_slot() {
        use crate::Sm2Key;

        let mut registry = KeyRegistry::new();
        let private = Sm2Key::generate();
        let public: Arc<dyn Key> = Arc::from(private.public_key().unwrap());

        let ski = registry.insert(public.clone()).unwrap();
        assert!(!registry.get(&ski).unwrap().private());

        assert_eq!(registry.insert(Arc::new(private)).unwrap(), ski);
        assert!(registry.get(&ski).unwrap().private());

        registry.insert(public).unwrap();
        assert!(registry.get(&ski).unwrap().private());
        assert_eq!(registry.len(), 1);
    }

    #[cfg(feature = "sm2")]
    #[test]
    fn unresolved_key_rejected() {
        let mut registry = KeyRegistry::new();
        let result = registry.insert(Arc::new(crate::Sm2Key::unresolved_public()));

        assert!(matches!(result, Err(KeyError::InvalidKey(_))));
        assert!(registry.is_empty());
    }
}
