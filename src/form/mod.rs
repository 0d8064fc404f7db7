//! Form container and its codecs.
//!
//! - `core` - the [`Form`] aggregate: ordered fields, name uniqueness,
//!   validation
//! - `data` - current values as a name-to-value mapping
//! - `serialization` - form definition to/from the structured [`Schema`]
//! - `transport` - versioned binary frame and base64 text encoding
//! - `types` - field variants, the field type registry, the schema type

pub mod core;
pub mod data;
pub mod serialization;
pub mod transport;
pub mod types;

pub use self::core::Form;
pub use transport::{CompressionFlag, FrameHeader, FRAME_HEADER_LEN, FRAME_VERSION, SCHEMA_MAGIC};
pub use types::{
    BooleanField, Field, FieldCommon, FieldVariant, FloatField, IntegerField, Schema, TextField,
};
