//! Unified error handling module
//!
//! Every failure mode in the crate maps to exactly one [`FormError`]
//! variant, so callers can distinguish error kinds without parsing
//! messages. Validation itself never errors: `validate` returns a
//! boolean, and only strict data export turns an invalid field into
//! an error.

/// Comprehensive error type for form, schema and transport operations.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// A field's current value failed validation during strict data export
    #[error("Validation failed for field '{0}'")]
    Validation(String),

    /// A field with the same name already exists in the form
    #[error("Duplicate field name: '{0}'")]
    DuplicateName(String),

    /// A field definition carries a type tag with no registered constructor
    #[error("Unknown field type: '{0}'")]
    UnknownFieldType(String),

    /// The schema frame does not start with the expected magic number
    #[error("Invalid magic number in schema frame")]
    BadMagic,

    /// The schema frame is shorter than the fixed header
    #[error("Schema frame too short: {0} bytes")]
    TruncatedFrame(usize),

    /// The frame's compression flag byte is not a recognized value
    #[error("Unrecognized compression flag: {0}")]
    BadCompressionFlag(u8),

    /// A schema or field definition has the wrong shape
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// Transport-level decoding failure (base64 text, compressed payload)
    #[error("Transport decoding error: {0}")]
    Transport(String),

    /// JSON encoding/decoding errors
    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type FormResult<T> = Result<T, FormError>;
