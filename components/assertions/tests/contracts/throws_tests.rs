//! Contract tests for the throw assertions

use assertions::*;
use core_types::{ErrorData, Value};

const SUFFIX: Option<&str> = Some("while testing.");

fn throws(error: ErrorData) -> impl FnOnce() -> Result<(), Value> {
    move || Err(Value::error(error))
}

fn returns() -> Result<i32, Value> {
    Ok(1)
}

#[cfg(test)]
mod throws_error_tests {
    use super::*;

    #[test]
    fn test_function_that_does_not_throw() {
        let err = assert_throws_error(returns, SUFFIX).unwrap_err();
        assert_eq!(err.name(), "AssertionError");
        assert_eq!(err.message(), "Expected function to throw while testing.");
        assert_eq!(err.operator(), Some("assertThrowsError"));
    }

    #[test]
    fn test_function_that_throws_a_string() {
        let err = assert_throws_error(|| Err::<(), _>("foo"), SUFFIX).unwrap_err();
        assert_eq!(
            err.message(),
            "Expected function to throw instance of Error but instead threw instance of String while testing."
        );
    }

    #[test]
    fn test_function_that_throws_an_error() {
        assert!(assert_throws_error(throws(ErrorData::new("Error", "x")), SUFFIX).is_ok());
        assert!(assert_throws_error(throws(ErrorData::new("TypeError", "x")), None).is_ok());
    }

    #[test]
    fn test_assertion_errors_count_as_errors() {
        let inner = || -> Result<(), AssertionError> {
            assert_equal(&Value::from(1), &Value::from(2), None)
        };
        assert!(assert_throws_error(inner, None).is_ok());
        assert!(assert_throws_error_class("AssertionError", inner, None).is_ok());
        assert!(assert_throws_error_code("ASSERTION_ERROR", inner, None).is_ok());
        assert!(assert_throws_error_message("to equal (===)", inner, None).is_ok());
    }

    #[test]
    fn test_thrown_null_and_undefined() {
        let err = assert_throws_error(|| Err::<(), _>(Value::Null), None).unwrap_err();
        assert_eq!(
            err.message(),
            "Expected function to throw instance of Error but instead threw instance of null"
        );
        let err = assert_throws_error(|| Err::<(), _>(Value::Undefined), None).unwrap_err();
        assert!(err.message().ends_with("instance of undefined"));
    }
}

#[cfg(test)]
mod throws_error_class_tests {
    use super::*;

    #[test]
    fn test_wrong_class() {
        let err = assert_throws_error_class(
            "SyntaxError",
            throws(ErrorData::new("TypeError", "x")),
            SUFFIX,
        )
        .unwrap_err();
        assert_eq!(
            err.message(),
            "Expected function to throw instance of SyntaxError but instead threw instance of TypeError while testing."
        );
        assert_eq!(err.operator(), Some("assertThrowsErrorClass"));
    }

    #[test]
    fn test_base_class_accepts_subclass() {
        let result = assert_throws_error_class("Error", throws(ErrorData::new("TypeError", "x")), None);
        assert!(result.is_ok());
    }

    #[test]
    fn test_non_error_reports_the_requested_class() {
        let err = assert_throws_error_class("TypeError", || Err::<(), _>(1), None).unwrap_err();
        assert_eq!(
            err.message(),
            "Expected function to throw instance of TypeError but instead threw instance of Number"
        );
    }

    #[test]
    fn test_partial_form() {
        let throws_type_error = assert_throws_error_class_partial("TypeError");
        assert!(throws_type_error
            .check(throws(ErrorData::new("TypeError", "x")), None)
            .is_ok());
        let err = throws_type_error.check(returns, None).unwrap_err();
        assert_eq!(err.message(), "Expected function to throw");
    }
}

#[cfg(test)]
mod throws_error_code_tests {
    use super::*;

    #[test]
    fn test_wrong_code() {
        let thrown = ErrorData::new("Error", "x").with_code("FOO");
        let err = assert_throws_error_code("CUSTOM_CODE", throws(thrown), SUFFIX).unwrap_err();
        assert_eq!(
            err.message(),
            "Expected function to throw error with code String(CUSTOM_CODE) but instead threw error with code String(FOO) while testing."
        );
        assert_eq!(err.operator(), Some("assertThrowsErrorCode"));
    }

    #[test]
    fn test_missing_code() {
        let assert_foobar = assert_throws_error_code_partial("foobar");
        let err = assert_foobar
            .check(throws(ErrorData::new("Error", "x")), SUFFIX)
            .unwrap_err();
        assert_eq!(
            err.message(),
            "Expected function to throw error with code String(foobar) but instead threw error with code undefined while testing."
        );
    }

    #[test]
    fn test_matching_code() {
        let thrown = ErrorData::new("Error", "x").with_code("CUSTOM_CODE");
        assert!(assert_throws_error_code("CUSTOM_CODE", throws(thrown), None).is_ok());
    }
}

#[cfg(test)]
mod throws_error_message_tests {
    use super::*;

    #[test]
    fn test_wrong_message() {
        let thrown = ErrorData::new("Error", "Not foo or bar");
        let err = assert_throws_error_message("foo bar", throws(thrown), SUFFIX).unwrap_err();
        assert_eq!(
            err.message(),
            "Expected function to throw error message including part \"foo bar\" but instead threw error message Not foo or bar while testing."
        );
        assert_eq!(err.operator(), Some("assertThrowsErrorMessage"));
    }

    #[test]
    fn test_message_part_found() {
        let thrown = ErrorData::new("Error", "this has foo bar in it");
        assert!(assert_throws_error_message("foo bar", throws(thrown), None).is_ok());
    }

    #[test]
    fn test_partial_form() {
        let includes_foobar = assert_throws_error_message_partial("foobar");
        let err = includes_foobar
            .check(throws(ErrorData::new("Error", "Not foo or bar")), SUFFIX)
            .unwrap_err();
        assert!(err.message().contains("including part \"foobar\""));
        assert!(includes_foobar
            .check(throws(ErrorData::new("Error", "a foobar b")), None)
            .is_ok());
    }
}
