pub mod field;
pub mod registry;
pub mod schema;

pub use field::{BooleanField, Field, FieldCommon, FieldVariant, FloatField, IntegerField, TextField};
pub use schema::Schema;
