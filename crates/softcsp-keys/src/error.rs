//! Error types for key operations

use softcsp_primitives::PrimitiveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyError {
    /// The operation is disabled for this key family by policy
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Encoding failure: {message}")]
    EncodingFailure {
        message: String,
        #[source]
        source: Option<PrimitiveError>,
    },

    #[error("Primitive failure: {0}")]
    PrimitiveFailure(#[from] PrimitiveError),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Unsupported key type: {0}")]
    UnsupportedKeyType(String),
}

pub type Result<T> = std::result::Result<T, KeyError>;
