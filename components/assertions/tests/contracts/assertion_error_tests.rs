//! Contract tests for AssertionError

use std::error::Error;

use assertions::*;
use core_types::{ErrorCode, Value};

#[test]
fn test_constants() {
    assert_eq!(AssertionError::NAME, "AssertionError");
    assert_eq!(AssertionError::CODE, "ASSERTION_ERROR");
}

#[test]
fn test_explicit_construction() {
    let err = AssertionError::with_spec(
        "custom failure",
        AssertionErrorSpec::operator("myCheck")
            .with_name("ValidationError")
            .with_code("INVALID"),
    );
    assert_eq!(err.name(), "ValidationError");
    assert_eq!(err.message(), "custom failure");
    assert_eq!(err.code(), "INVALID");
    assert_eq!(err.operator(), Some("myCheck"));
    assert!(err.cause().is_none());
    assert_eq!(err.error_code(), Some("INVALID"));
}

#[test]
fn test_cause_code_is_inherited() {
    let cause = AssertionError::with_spec("inner", AssertionErrorSpec::default().with_code("E_INNER"));
    let err = AssertionError::with_spec("outer", AssertionErrorSpec::default().with_cause(cause));
    assert_eq!(err.code(), "E_INNER");
    assert_eq!(err.source().map(|s| s.to_string()), Some("inner".to_string()));
}

#[test]
fn test_cause_from_io_error_keeps_default_code() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
    let err = AssertionError::with_spec("outer", AssertionErrorSpec::default().with_cause(io));
    assert_eq!(err.code(), AssertionError::CODE);
    assert_eq!(err.cause().map(|c| c.to_string()), Some("disk".to_string()));
}

#[test]
fn test_assertion_failures_use_default_code() {
    let err = assert_array(&Value::Null, None).unwrap_err();
    assert_eq!(err.code(), "ASSERTION_ERROR");
    assert_eq!(err.name(), "AssertionError");
    assert_eq!(err.to_string(), "Expected null to be an Array");
}

#[test]
fn test_serialized_shape() {
    let err = assert_equal(&Value::from(1), &Value::from(2), None).unwrap_err();
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["name"], "AssertionError");
    assert_eq!(json["code"], "ASSERTION_ERROR");
    assert_eq!(json["operator"], "assertEqual");
    assert_eq!(json["message"], "Expected Number(2) to equal (===) Number(1)");
    assert!(json["location"]
        .as_str()
        .unwrap()
        .contains("assertion_error_tests.rs"));
    assert!(json.get("cause").is_none());
}

#[test]
fn test_serialized_shape_without_operator() {
    let json = serde_json::to_value(AssertionError::new("plain")).unwrap();
    assert!(json.get("operator").is_none());
}

#[test]
fn test_converts_to_error_value() {
    let err = assert_boolean(&Value::from(1), None).unwrap_err();
    let value = Value::from(err);
    assert!(is_error(&value));
    let data = value.as_error().unwrap();
    assert_eq!(data.name, "AssertionError");
    assert_eq!(data.message, "Expected Number(1) to be a Boolean");
    assert_eq!(value.get("operator"), Some(Value::from("assertBoolean")));
    assert_eq!(value.get("code"), Some(Value::from("ASSERTION_ERROR")));
}
