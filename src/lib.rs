//! Typed, validated form schemas with a stable binary transport encoding.
//!
//! A [`Form`] is an ordered, name-unique collection of typed fields
//! (text, integer, float, boolean) with per-type constraints. Forms
//! serialize to a structured [`Schema`] mapping, to a versioned binary
//! frame, and to a base64 text encoding; runtime values move separately
//! through a plain name-to-value mapping.
//!
//! ```
//! use serde_json::json;
//! use ugform::{CompressionFlag, Field, Form, IntegerField, TextField};
//!
//! let mut form = Form::new("Registration").with_locale("en");
//! form.add_field(TextField::new("username", "Username")
//!     .with_required(true)
//!     .with_min_length(3))?;
//! form.add_field(IntegerField::new("age", "Age").with_min_value(18))?;
//!
//! form.get_field_mut("username").unwrap().set_value(json!("ada"));
//! form.get_field_mut("age").unwrap().set_value(json!(30));
//! assert!(form.validate());
//!
//! let encoded = form.dump_schema_b64(CompressionFlag::Gzip)?;
//! let restored = Form::load_schema_b64(&encoded)?;
//! assert_eq!(restored.title, form.title);
//! # Ok::<(), ugform::FormError>(())
//! ```

pub mod error;
pub mod form;

pub use error::{FormError, FormResult};
pub use form::{
    BooleanField, CompressionFlag, Field, FieldCommon, FieldVariant, FloatField, Form,
    FrameHeader, IntegerField, Schema, TextField, FRAME_HEADER_LEN, FRAME_VERSION, SCHEMA_MAGIC,
};
