//! Key type enumeration

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::KeyError;

/// Key algorithm families known to the provider
#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub enum KeyType {
    Sm2,
    P256,
    P384,
    Secp256k1,
    Aes,
    #[default]
    Unknown,
}

impl KeyType {
    /// True for symmetric cipher families
    pub fn is_symmetric(&self) -> bool {
        matches!(self, KeyType::Aes)
    }
}

impl TryFrom<&str> for KeyType {
    type Error = KeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "SM2" => Ok(KeyType::Sm2),
            "P-256" => Ok(KeyType::P256),
            "P-384" => Ok(KeyType::P384),
            "secp256k1" => Ok(KeyType::Secp256k1),
            "AES" => Ok(KeyType::Aes),
            _ => Err(KeyError::UnsupportedKeyType(value.to_string())),
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KeyType::Sm2 => write!(f, "SM2"),
            KeyType::P256 => write!(f, "P-256"),
            KeyType::P384 => write!(f, "P-384"),
            KeyType::Secp256k1 => write!(f, "secp256k1"),
            KeyType::Aes => write!(f, "AES"),
            KeyType::Unknown => write!(f, "Unknown"),
        }
    }
}
