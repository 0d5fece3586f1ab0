//! SM2 keys, identified by SM3 digests

use softcsp_primitives::{HashFunction, Sm2};

use crate::{EcFamily, EcKey, KeyType};

/// SM2 keys with SM3 key identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sm2Family;

impl EcFamily for Sm2Family {
    type Curve = Sm2;

    const KEY_TYPE: KeyType = KeyType::Sm2;
    const SKI_HASH: HashFunction = HashFunction::Sm3;
}

pub type Sm2Key = EcKey<Sm2Family>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Key, ski};

    /// SM3(0x04 || Gx || Gy) for the SM2 generator
    const GENERATOR_SKI: &str = "1a8ebc45db0c198888a115984193ff485315b84e2967092ddc5814274448410c";

    fn scalar_one() -> Sm2Key {
        let mut d = [0u8; 32];
        d[31] = 1;
        Sm2Key::from_secret_bytes(&d).unwrap()
    }

    #[test]
    fn scalar_one_has_generator_ski() {
        let key = scalar_one();
        let (x, _) = key.coordinates().unwrap();

        assert_eq!(
            ski::to_hex(&x),
            "32c4ae2c1f1981195f9904466a39c9948fe30bbff2660be1715a4589334c74c7"
        );
        assert_eq!(ski::to_hex(&key.ski()), GENERATOR_SKI);
        assert_eq!(ski::to_hex(&key.public_key().unwrap().ski()), GENERATOR_SKI);
    }

    #[test]
    fn ski_is_not_sha256() {
        let key = scalar_one();
        let encoded = <Sm2 as softcsp_primitives::EcCurve>::encode_uncompressed(
            key.point().unwrap(),
        );

        assert_ne!(key.ski(), HashFunction::Sha256.digest(&encoded));
    }

    #[test]
    fn public_bytes_are_pkix() {
        let public = scalar_one().public_key().unwrap();
        let der = public.bytes().unwrap();

        assert_eq!(
            ski::to_hex(&der[..26]),
            "3059301306072a8648ce3d020106082a811ccf5501822d034200"
        );
        assert_eq!(der.len(), 91);
    }

    #[test]
    fn private_bytes_never_exported() {
        let key = Sm2Key::generate();

        match key.bytes() {
            Err(crate::KeyError::UnsupportedOperation(reason)) => assert!(reason.contains("SM2")),
            other => panic!("expected UnsupportedOperation, got {other:?}"),
        }
    }
}
