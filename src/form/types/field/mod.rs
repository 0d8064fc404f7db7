pub mod boolean;
pub mod common;
pub mod float;
pub mod integer;
pub mod text;
pub mod variant;

pub use boolean::BooleanField;
pub use common::{Field, FieldCommon};
pub use float::FloatField;
pub use integer::IntegerField;
pub use text::TextField;
pub use variant::FieldVariant;
