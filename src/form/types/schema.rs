use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Transient, value-free representation of a form definition.
///
/// A `Schema` exists only as an intermediate of serialization: `Form`
/// produces one on dump and consumes one on load. Field definitions are
/// kept as raw JSON mappings; turning them into concrete field variants
/// is the registry's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub uuid: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub fields: Vec<JsonValue>,
}

pub(crate) fn default_locale() -> String {
    "en".to_string()
}
