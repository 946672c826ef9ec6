//! Unit tests for ValueError and ErrorData

use core_types::{ErrorData, Value, ValueError};

#[test]
fn test_regexp_construction_error_propagates() {
    let err = Value::regexp("(unclosed", "").unwrap_err();
    assert!(matches!(err, ValueError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
}

#[test]
fn test_regexp_flag_error_propagates() {
    assert_eq!(Value::regexp("a", "gg").unwrap_err(), ValueError::DuplicateFlag('g'));
}

#[test]
fn test_error_data_code() {
    let data = ErrorData::new("TypeError", "bad").with_code("ERR_BAD");
    assert_eq!(data.code.as_deref(), Some("ERR_BAD"));
    assert_eq!(data.lineage, vec!["TypeError".to_string(), "Error".to_string()]);
}

#[test]
fn test_error_value_roundtrip() {
    let value = Value::error(ErrorData::new("SyntaxError", "oops"));
    let data = value.as_error().unwrap();
    assert_eq!(data.name, "SyntaxError");
    assert_eq!(data.message, "oops");
    assert_eq!(value.constructor_name().as_deref(), Some("SyntaxError"));
}
