//! Elliptic-curve key pairs, generic over the algorithm family

use std::fmt;

use softcsp_primitives::{EcCurve, HashFunction};
use tracing::debug;

use crate::{Key, KeyError, KeyType, error::Result, ski};

/// An asymmetric algorithm family: a curve plus the hash its SKIs are derived with
pub trait EcFamily: fmt::Debug + Send + Sync + 'static {
    type Curve: EcCurve;

    const KEY_TYPE: KeyType;
    const SKI_HASH: HashFunction;
}

enum Material<F: EcFamily> {
    /// `point` is always the generator multiplied by `secret`
    Private {
        secret: <F::Curve as EcCurve>::SecretKey,
        point: <F::Curve as EcCurve>::PublicKey,
    },
    /// `None` until the point is known
    Public {
        point: Option<<F::Curve as EcCurve>::PublicKey>,
    },
}

impl<F: EcFamily> Clone for Material<F> {
    fn clone(&self) -> Self {
        match self {
            Material::Private { secret, point } => Material::Private {
                secret: secret.clone(),
                point: point.clone(),
            },
            Material::Public { point } => Material::Public {
                point: point.clone(),
            },
        }
    }
}

/// A private or public key of family `F`
pub struct EcKey<F: EcFamily> {
    material: Material<F>,
}

impl<F: EcFamily> EcKey<F> {
    /// Generates a random private key
    pub fn generate() -> Self {
        Self::from_secret(F::Curve::random_secret())
    }

    /// Builds a private key from a big-endian scalar, deriving its public point
    pub fn from_secret_bytes(secret: &[u8]) -> Result<Self> {
        Ok(Self::from_secret(F::Curve::secret_from_bytes(secret)?))
    }

    fn from_secret(secret: <F::Curve as EcCurve>::SecretKey) -> Self {
        let point = F::Curve::public_from_secret(&secret);
        EcKey {
            material: Material::Private { secret, point },
        }
    }

    /// Builds a public key from big-endian affine coordinates
    pub fn from_public_coordinates(x: &[u8], y: &[u8]) -> Result<Self> {
        Ok(Self::from_point(F::Curve::point_from_coordinates(x, y)?))
    }

    /// Builds a public key from a SEC1 encoded point
    pub fn from_public_sec1(bytes: &[u8]) -> Result<Self> {
        Ok(Self::from_point(F::Curve::point_from_sec1(bytes)?))
    }

    pub fn from_point(point: <F::Curve as EcCurve>::PublicKey) -> Self {
        EcKey {
            material: Material::Public { point: Some(point) },
        }
    }

    /// A public key whose point isn't known yet. Its SKI is empty.
    pub fn unresolved_public() -> Self {
        EcKey {
            material: Material::Public { point: None },
        }
    }

    pub fn point(&self) -> Option<&<F::Curve as EcCurve>::PublicKey> {
        match &self.material {
            Material::Private { point, .. } => Some(point),
            Material::Public { point } => point.as_ref(),
        }
    }

    /// Fixed width big-endian `(X, Y)` of the public point
    pub fn coordinates(&self) -> Option<(Vec<u8>, Vec<u8>)> {
        self.point().map(F::Curve::coordinates)
    }

    /// The public half of this key
    pub fn to_public(&self) -> Self {
        EcKey {
            material: Material::Public {
                point: self.point().cloned(),
            },
        }
    }
}

impl<F: EcFamily> Clone for EcKey<F> {
    fn clone(&self) -> Self {
        EcKey {
            material: self.material.clone(),
        }
    }
}

impl<F: EcFamily> Key for EcKey<F> {
    fn bytes(&self) -> Result<Vec<u8>> {
        match &self.material {
            Material::Private { .. } => {
                debug!("Refused raw {} private key export", F::KEY_TYPE);
                Err(KeyError::UnsupportedOperation(format!(
                    "raw {} private key export is disabled",
                    F::KEY_TYPE
                )))
            }
            Material::Public { point: Some(point) } => {
                F::Curve::encode_pkix(point).map_err(|e| KeyError::EncodingFailure {
                    message: format!("Failed marshalling {} public key", F::KEY_TYPE),
                    source: Some(e),
                })
            }
            Material::Public { point: None } => Err(KeyError::EncodingFailure {
                message: format!("{} public key has no point", F::KEY_TYPE),
                source: None,
            }),
        }
    }

    fn ski(&self) -> Vec<u8> {
        ski::from_point::<F::Curve>(F::SKI_HASH, self.point())
    }

    fn symmetric(&self) -> bool {
        false
    }

    fn private(&self) -> bool {
        matches!(self.material, Material::Private { .. })
    }

    fn public_key(&self) -> Result<Box<dyn Key>> {
        Ok(Box::new(self.to_public()))
    }

    fn key_type(&self) -> KeyType {
        F::KEY_TYPE
    }
}

impl<F: EcFamily> fmt::Debug for EcKey<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("EcKey")
            .field("key_type", &F::KEY_TYPE)
            .field("private", &self.private())
            .field("ski", &ski::to_hex(&self.ski()))
            .finish()
    }
}
