//! Error types for SAC decoding, encoding and header access.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SacError {
    #[error("header version field is not valid as {0}")]
    InvalidByteOrder(&'static str),

    #[error("unknown SAC header: {0}")]
    UnknownField(String),

    #[error("invalid value {value:?} for enumerated header {field}")]
    InvalidEnumValue { field: &'static str, value: String },

    #[error("stored code {code} is not an accepted value of header {field}")]
    InvalidEnumCode { field: &'static str, code: i32 },

    #[error("stored value {value} of logical header {field} is neither 0 nor 1")]
    InvalidBoolValue { field: &'static str, value: i32 },

    #[error("header {field} holds {expected} values, got {actual}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("reference time is incomplete: {0} is null")]
    IncompleteReferenceTime(&'static str),

    #[error("reference time is not representable: {0}")]
    InvalidReferenceTime(String),

    #[error("distance computation needs stla, stlo, evla and evlo; {0} is null")]
    IncompleteGeodeticInput(&'static str),

    #[error("latitude {0} is outside [-90, 90]")]
    InvalidCoordinate(f64),

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("malformed alphanumeric SAC data: {0}")]
    MalformedAscii(String),

    #[error("data too short: expected at least {expected} bytes, got {actual}")]
    DataTooShort { expected: usize, actual: usize },

    #[error("file size mismatch: header implies {expected} bytes, file has {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("npts {0} is not a valid sample count")]
    InvalidSampleCount(i32),

    #[error("trace has no samples but npts is {0}")]
    MissingSamples(i32),

    #[error("header-only writes are not supported for alphanumeric files")]
    HeadonlyAscii,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SacError>;
