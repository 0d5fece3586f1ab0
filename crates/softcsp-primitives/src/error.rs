//! Error types for curve and hash primitives

use elliptic_curve::pkcs8::spki;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrimitiveError {
    #[error("Invalid {curve} private scalar: {source}")]
    InvalidScalar {
        curve: &'static str,
        #[source]
        source: elliptic_curve::Error,
    },

    #[error("Invalid {curve} point: {source}")]
    InvalidPoint {
        curve: &'static str,
        #[source]
        source: elliptic_curve::Error,
    },

    #[error("{curve} coordinate is {actual} bytes, field size is {expected}")]
    CoordinateLength {
        curve: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("PKIX encoding of {curve} public key failed: {source}")]
    Pkix {
        curve: &'static str,
        #[source]
        source: spki::Error,
    },
}

pub type Result<T> = std::result::Result<T, PrimitiveError>;
