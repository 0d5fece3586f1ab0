//! ECDSA curve families (P-256, P-384, secp256k1)
//!
//! All three derive their SKI with SHA-256 regardless of curve size.

use softcsp_primitives::HashFunction;

use crate::{EcFamily, EcKey, KeyType};

#[cfg(feature = "p256")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcdsaP256;

#[cfg(feature = "p256")]
impl EcFamily for EcdsaP256 {
    type Curve = softcsp_primitives::P256;

    const KEY_TYPE: KeyType = KeyType::P256;
    const SKI_HASH: HashFunction = HashFunction::Sha256;
}

#[cfg(feature = "p256")]
pub type P256Key = EcKey<EcdsaP256>;

#[cfg(feature = "p384")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcdsaP384;

#[cfg(feature = "p384")]
impl EcFamily for EcdsaP384 {
    type Curve = softcsp_primitives::P384;

    const KEY_TYPE: KeyType = KeyType::P384;
    const SKI_HASH: HashFunction = HashFunction::Sha256;
}

#[cfg(feature = "p384")]
pub type P384Key = EcKey<EcdsaP384>;

#[cfg(feature = "k256")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcdsaSecp256k1;

#[cfg(feature = "k256")]
impl EcFamily for EcdsaSecp256k1 {
    type Curve = softcsp_primitives::Secp256k1;

    const KEY_TYPE: KeyType = KeyType::Secp256k1;
    const SKI_HASH: HashFunction = HashFunction::Sha256;
}

#[cfg(feature = "k256")]
pub type Secp256k1Key = EcKey<EcdsaSecp256k1>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Key, ski};

    #[cfg(feature = "p256")]
    #[test]
    fn p256_scalar_one_has_generator_ski() {
        let mut d = [0u8; 32];
        d[31] = 1;
        let key = P256Key::from_secret_bytes(&d).unwrap();

        assert_eq!(
            ski::to_hex(&key.ski()),
            "698bea63dc44a344663ff1429aea10842df27b6b991ef25866b2c6c02cdcc5be"
        );
    }

    #[cfg(feature = "p256")]
    #[test]
    fn p256_public_from_sec1() {
        let private = P256Key::generate();
        let der = private.public_key().unwrap().bytes().unwrap();

        // the SubjectPublicKeyInfo ends with the uncompressed point
        let public = P256Key::from_public_sec1(&der[der.len() - 65..]).unwrap();
        assert_eq!(public.ski(), private.ski());
        assert!(!public.private());
    }

    #[cfg(feature = "p384")]
    #[test]
    fn p384_ski_is_sha256_sized() {
        let key = P384Key::generate();

        assert_eq!(key.ski().len(), 32);
        assert_eq!(key.coordinates().unwrap().0.len(), 48);
    }

    #[cfg(all(feature = "p256", feature = "k256"))]
    #[test]
    fn same_scalar_on_different_curves_differs() {
        let mut d = [0u8; 32];
        d[31] = 1;

        let p256 = P256Key::from_secret_bytes(&d).unwrap();
        let k256 = Secp256k1Key::from_secret_bytes(&d).unwrap();

        assert_ne!(p256.ski(), k256.ski());
        assert_eq!(k256.key_type(), KeyType::Secp256k1);
    }
}
