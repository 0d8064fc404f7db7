use once_cell::sync::OnceCell;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::form::types::field::common::FieldCommon;
use crate::impl_field;

/// Free-text field with optional length bounds and a regex constraint.
///
/// Constraints are immutable after construction, so the pattern is
/// compiled once on first use and cached. The cache is runtime state
/// and never serialized or compared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextField {
    #[serde(flatten)]
    pub inner: FieldCommon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    #[serde(skip)]
    compiled_regex: OnceCell<Option<Regex>>,
}

impl TextField {
    pub const TYPE_TAG: &'static str = "TextField";

    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            inner: FieldCommon::new(name, label),
            min_length: None,
            max_length: None,
            regex: None,
            compiled_regex: OnceCell::new(),
        }
    }

    /// Sets the inclusive minimum length, counted in characters.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Sets the inclusive maximum length, counted in characters.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Sets a regex pattern the value must match.
    pub fn with_regex(mut self, regex: impl Into<String>) -> Self {
        self.regex = Some(regex.into());
        self.compiled_regex = OnceCell::new();
        self
    }

    /// Checks a candidate value against the field's constraints.
    ///
    /// Never errors: any value of the wrong shape, and any value failing
    /// a declared constraint, simply yields `false`. An unparseable regex
    /// pattern validates nothing.
    pub fn validate(&self, value: Option<&JsonValue>) -> bool {
        let value = match value {
            None | Some(JsonValue::Null) => return !self.inner.required,
            Some(v) => v,
        };
        let text = match value.as_str() {
            Some(text) => text,
            None => return false,
        };

        let length = text.chars().count();
        if let Some(min_length) = self.min_length {
            if length < min_length {
                return false;
            }
        }
        if let Some(max_length) = self.max_length {
            if length > max_length {
                return false;
            }
        }
        if let Some(pattern) = &self.regex {
            match self.compiled_regex.get_or_init(|| Regex::new(pattern).ok()) {
                Some(re) => {
                    if !re.is_match(text) {
                        return false;
                    }
                }
                None => return false,
            }
        }
        true
    }
}

impl PartialEq for TextField {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
            && self.min_length == other.min_length
            && self.max_length == other.max_length
            && self.regex == other.regex
    }
}

impl_field!(TextField);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pattern_is_compiled_once_and_reused() {
        let field = TextField::new("code", "Code").with_regex("^[a-z]+$");
        assert!(field.validate(Some(&json!("abc"))));
        assert!(field.compiled_regex.get().is_some());
        assert!(!field.validate(Some(&json!("123"))));
    }

    #[test]
    fn replacing_the_pattern_resets_the_cache() {
        let field = TextField::new("code", "Code").with_regex("^[a-z]+$");
        assert!(field.validate(Some(&json!("abc"))));

        let field = field.with_regex("^[0-9]+$");
        assert!(!field.validate(Some(&json!("abc"))));
        assert!(field.validate(Some(&json!("123"))));
    }

    #[test]
    fn equality_ignores_the_compiled_cache() {
        let warmed = TextField::new("code", "Code").with_regex("^[a-z]+$");
        let cold = TextField::new("code", "Code").with_regex("^[a-z]+$");
        warmed.validate(Some(&json!("abc")));
        assert_eq!(warmed, cold);
    }
}
