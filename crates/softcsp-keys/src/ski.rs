//! Subject Key Identifier derivation
//!
//! Elliptic-curve keys are identified by the hash of the SEC1 uncompressed
//! encoding of their public point, using the hash designated by the key's
//! family. Symmetric keys are identified by `SHA-256(0x01 || key)`.

use softcsp_primitives::{EcCurve, HashFunction};

/// Domain separation byte prepended to symmetric key material
const SYMMETRIC_PREFIX: u8 = 0x01;

/// SKI of a curve point, or an empty `Vec` when the point isn't known
pub fn from_point<C: EcCurve>(hash: HashFunction, point: Option<&C::PublicKey>) -> Vec<u8> {
    match point {
        Some(point) => hash.digest(&C::encode_uncompressed(point)),
        None => Vec::new(),
    }
}

/// SKI of symmetric key material
pub fn from_symmetric(key: &[u8]) -> Vec<u8> {
    let mut hasher = HashFunction::Sha256.hasher();
    hasher.update(&[SYMMETRIC_PREFIX]);
    hasher.update(key);
    hasher.finalize()
}

/// Lowercase hex form used for aliases and log lines
pub fn to_hex(ski: &[u8]) -> String {
    hex::encode(ski)
}
