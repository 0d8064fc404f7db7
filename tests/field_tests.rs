//! Per-variant field behavior: construction, value handling, validation.

use serde_json::json;
use ugform::{BooleanField, Field, FloatField, IntegerField, TextField};

#[test]
fn text_field_creation_defaults() {
    let field = TextField::new("username", "Test");
    assert_eq!(field.name(), "username");
    assert_eq!(field.label(), "Test");
    assert!(!field.required());
    assert!(field.default_value().is_none());
    assert!(field.get_value().is_none());
}

#[test]
fn text_field_set_and_get_value() {
    let mut field = TextField::new("username", "Test");
    field.set_value(json!("hello"));
    assert_eq!(field.get_value(), Some(&json!("hello")));
}

#[test]
fn text_field_null_clears_value() {
    let mut field = TextField::new("username", "Test");
    field.set_value(json!("hello"));
    field.set_value(json!(null));
    assert!(field.get_value().is_none());
}

#[test]
fn text_field_required_validation() {
    let field = TextField::new("username", "Test").with_required(true);
    assert!(!field.validate(None));
    assert!(field.validate(Some(&json!("hello"))));
}

#[test]
fn text_field_length_bounds_are_inclusive() {
    let field = TextField::new("username", "Test")
        .with_min_length(3)
        .with_max_length(5);
    assert!(!field.validate(Some(&json!(""))));
    assert!(!field.validate(Some(&json!("ab"))));
    assert!(field.validate(Some(&json!("abc"))));
    assert!(field.validate(Some(&json!("abcd"))));
    assert!(field.validate(Some(&json!("abcde"))));
    assert!(!field.validate(Some(&json!("abcdef"))));
}

#[test]
fn text_field_regex_validation() {
    let field = TextField::new("email", "Email").with_regex(r"^[a-z]+@[a-z]+\.[a-z]+$");
    assert!(field.validate(Some(&json!("test@example.com"))));
    assert!(!field.validate(Some(&json!("invalid-email"))));
    assert!(!field.validate(Some(&json!("test@"))));
}

#[test]
fn text_field_rejects_non_strings() {
    let field = TextField::new("username", "Test");
    assert!(!field.validate(Some(&json!(42))));
    assert!(!field.validate(Some(&json!(true))));
    assert!(!field.validate(Some(&json!(["a"]))));
}

#[test]
fn text_field_unparseable_regex_validates_nothing() {
    let field = TextField::new("broken", "Broken").with_regex("([unclosed");
    assert!(!field.validate(Some(&json!("anything"))));
    // absence is still governed by `required`, not by the pattern
    assert!(field.validate(None));
}

#[test]
fn integer_field_type_checks() {
    let field = IntegerField::new("age", "Age");
    assert!(field.validate(None));
    assert!(field.validate(Some(&json!(25))));
    assert!(!field.validate(Some(&json!("not a number"))));
    assert!(!field.validate(Some(&json!(25.5))));
    assert!(!field.validate(Some(&json!(true))));
}

#[test]
fn integer_field_accepts_integral_floats() {
    let field = IntegerField::new("age", "Age").with_min_value(18);
    assert!(field.validate(Some(&json!(25.0))));
    assert!(!field.validate(Some(&json!(17.0))));
}

#[test]
fn integer_field_required_validation() {
    let field = IntegerField::new("age", "Age").with_required(true);
    assert!(!field.validate(None));
    assert!(field.validate(Some(&json!(25))));
}

#[test]
fn integer_field_bounds_are_inclusive() {
    let field = IntegerField::new("age", "Age")
        .with_min_value(18)
        .with_max_value(120);
    assert!(!field.validate(Some(&json!(17))));
    assert!(field.validate(Some(&json!(18))));
    assert!(field.validate(Some(&json!(100))));
    assert!(field.validate(Some(&json!(120))));
    assert!(!field.validate(Some(&json!(121))));
}

#[test]
fn float_field_accepts_integers() {
    let field = FloatField::new("height", "Height");
    assert!(field.validate(None));
    assert!(field.validate(Some(&json!(1.75))));
    assert!(field.validate(Some(&json!(2))));
    assert!(!field.validate(Some(&json!("not a number"))));
    assert!(!field.validate(Some(&json!(false))));
}

#[test]
fn float_field_bounds_are_inclusive() {
    let field = FloatField::new("height", "Height")
        .with_min_value(0.5)
        .with_max_value(3.0);
    assert!(!field.validate(Some(&json!(0.4))));
    assert!(field.validate(Some(&json!(0.5))));
    assert!(field.validate(Some(&json!(2.0))));
    assert!(field.validate(Some(&json!(3.0))));
    assert!(!field.validate(Some(&json!(3.1))));
}

#[test]
fn boolean_field_validation() {
    let field = BooleanField::new("subscribe", "Subscribe");
    assert!(field.validate(None));
    assert!(field.validate(Some(&json!(true))));
    assert!(field.validate(Some(&json!(false))));
    assert!(!field.validate(Some(&json!(1))));
    assert!(!field.validate(Some(&json!("true"))));
}

#[test]
fn boolean_field_default_value_feeds_get_value() {
    let field = BooleanField::new("subscribe", "Subscribe").with_default_value(json!(true));
    assert_eq!(field.default_value(), Some(&json!(true)));
    assert_eq!(field.get_value(), Some(&json!(true)));
}

#[test]
fn stored_value_shadows_default() {
    let mut field = BooleanField::new("subscribe", "Subscribe").with_default_value(json!(true));
    field.set_value(json!(false));
    assert_eq!(field.get_value(), Some(&json!(false)));
    field.clear_value();
    assert_eq!(field.get_value(), Some(&json!(true)));
}

#[test]
fn contradictory_bounds_are_accepted_at_construction() {
    // Definitions are not validated, only data is: such a field simply
    // validates nothing.
    let field = TextField::new("odd", "Odd").with_min_length(5).with_max_length(3);
    assert!(!field.validate(Some(&json!("abcd"))));
    assert!(field.validate(None));
}
