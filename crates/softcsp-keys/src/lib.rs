//! Key capability interface and key types for the SoftCSP provider
//!
//! This crate provides:
//! - [`Key`], the capability trait every algorithm family implements
//! - Subject Key Identifier derivation ([`ski`])
//! - Elliptic-curve keys ([`EcKey`]) for SM2 and the ECDSA curves, and symmetric [`AesKey`]s
//! - [`KeyRegistry`], an explicit SKI-indexed key table owned by the host provider
//!
//! ```
//! use softcsp_keys::{Key, Sm2Key};
//!
//! let private = Sm2Key::generate();
//! let public = private.public_key().unwrap();
//!
//! assert!(!public.private());
//! assert_eq!(private.ski(), public.ski());
//! ```

mod aes;
mod ec;
mod error;
mod key;
mod key_type;
mod registry;

pub mod ski;

#[cfg(feature = "sm2")]
pub mod sm2;

#[cfg(any(feature = "p256", feature = "p384", feature = "k256"))]
pub mod ecdsa;

pub use aes::AesKey;
pub use ec::{EcFamily, EcKey};
pub use error::{KeyError, Result};
pub use key::Key;
pub use key_type::KeyType;
pub use registry::KeyRegistry;

#[cfg(feature = "k256")]
pub use crate::ecdsa::{EcdsaSecp256k1, Secp256k1Key};
#[cfg(feature = "p256")]
pub use crate::ecdsa::{EcdsaP256, P256Key};
#[cfg(feature = "p384")]
pub use crate::ecdsa::{EcdsaP384, P384Key};
#[cfg(feature = "sm2")]
pub use crate::sm2::{Sm2Family, Sm2Key};
