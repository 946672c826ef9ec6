//! Assertions about thrown errors
//!
//! The function under test is a closure returning `Result<T, E>`. An `Err`
//! is what the function threw; it is converted into a [`Value`] before
//! inspection, so any `E: Into<Value>` works, including
//! [`AssertionError`](crate::AssertionError) and plain values.

use core_types::{ErrorData, Value};

use crate::error::AssertResult;
use crate::factory::{fail_if, MessageStyle};
use crate::friendly::to_friendly_string;

/// What the thrown error must satisfy beyond being an `Error`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThrownExpectation {
    /// Any error object
    AnyError,
    /// An instance of the named class
    Class(String),
    /// An error with the given code
    Code(String),
    /// An error whose message contains the given text
    MessagePart(String),
}

impl ThrownExpectation {
    fn operator(&self) -> &'static str {
        match self {
            ThrownExpectation::AnyError => "assertThrowsError",
            ThrownExpectation::Class(_) => "assertThrowsErrorClass",
            ThrownExpectation::Code(_) => "assertThrowsErrorCode",
            ThrownExpectation::MessagePart(_) => "assertThrowsErrorMessage",
        }
    }

    fn required_class(&self) -> &str {
        match self {
            ThrownExpectation::Class(class) => class,
            _ => "Error",
        }
    }

    /// Failure text for a thrown error, `None` when it satisfies this expectation
    fn mismatch(&self, error: &ErrorData) -> Option<String> {
        match self {
            ThrownExpectation::AnyError => None,
            ThrownExpectation::Class(class) if error.is_instance_of(class) => None,
            ThrownExpectation::Class(class) => Some(format!(
                "Expected function to throw instance of {} but instead threw instance of {}",
                class,
                error.lineage.first().map_or("Error", String::as_str)
            )),
            ThrownExpectation::Code(code) if error.code.as_deref() == Some(code.as_str()) => None,
            ThrownExpectation::Code(code) => Some(format!(
                "Expected function to throw error with code {} but instead threw error with code {}",
                to_friendly_string(&Value::from(code.as_str())),
                to_friendly_string(&Value::from(error.code.clone()))
            )),
            ThrownExpectation::MessagePart(part) if error.message.contains(part.as_str()) => None,
            ThrownExpectation::MessagePart(part) => Some(format!(
                "Expected function to throw error message including part \"{}\" but instead threw error message {}",
                part, error.message
            )),
        }
    }
}

/// A throw assertion, possibly bound to its expectation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThrowsAssertion {
    expectation: ThrownExpectation,
}

impl ThrowsAssertion {
    /// Create an assertion for the given expectation
    pub fn new(expectation: ThrownExpectation) -> Self {
        ThrowsAssertion { expectation }
    }

    /// Operator name reported on failure
    pub fn operator(&self) -> &'static str {
        self.expectation.operator()
    }

    /// Run `f` and check what it threw
    #[track_caller]
    pub fn check<T, E, F>(&self, f: F, message: Option<&str>) -> AssertResult
    where
        E: Into<Value>,
        F: FnOnce() -> Result<T, E>,
    {
        let failure = match f() {
            Ok(_) => Some("Expected function to throw".to_string()),
            Err(thrown) => self.inspect(&thrown.into()),
        };
        let failure = failure.map(|core| MessageStyle::Appended.compose(core, message));
        fail_if(self.operator(), failure)
    }

    fn inspect(&self, thrown: &Value) -> Option<String> {
        match thrown.as_error() {
            Some(error) => self.expectation.mismatch(&error),
            None => Some(format!(
                "Expected function to throw instance of {} but instead threw instance of {}",
                self.expectation.required_class(),
                thrown_constructor(thrown)
            )),
        }
    }
}

fn thrown_constructor(thrown: &Value) -> String {
    match thrown {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        other => other
            .constructor_name()
            .unwrap_or_else(|| "Object".to_string()),
    }
}

/// Assert that `f` throws an error object
#[track_caller]
pub fn assert_throws_error<T, E, F>(f: F, message: Option<&str>) -> AssertResult
where
    E: Into<Value>,
    F: FnOnce() -> Result<T, E>,
{
    ThrowsAssertion::new(ThrownExpectation::AnyError).check(f, message)
}

/// Assert that `f` throws an instance of `class`
#[track_caller]
pub fn assert_throws_error_class<T, E, F>(class: &str, f: F, message: Option<&str>) -> AssertResult
where
    E: Into<Value>,
    F: FnOnce() -> Result<T, E>,
{
    assert_throws_error_class_partial(class).check(f, message)
}

/// Partial form of [`assert_throws_error_class`]
pub fn assert_throws_error_class_partial(class: impl Into<String>) -> ThrowsAssertion {
    ThrowsAssertion::new(ThrownExpectation::Class(class.into()))
}

/// Assert that `f` throws an error with the given code
#[track_caller]
pub fn assert_throws_error_code<T, E, F>(code: &str, f: F, message: Option<&str>) -> AssertResult
where
    E: Into<Value>,
    F: FnOnce() -> Result<T, E>,
{
    assert_throws_error_code_partial(code).check(f, message)
}

/// Partial form of [`assert_throws_error_code`]
pub fn assert_throws_error_code_partial(code: impl Into<String>) -> ThrowsAssertion {
    ThrowsAssertion::new(ThrownExpectation::Code(code.into()))
}

/// Assert that `f` throws an error whose message contains `part`
#[track_caller]
pub fn assert_throws_error_message<T, E, F>(part: &str, f: F, message: Option<&str>) -> AssertResult
where
    E: Into<Value>,
    F: FnOnce() -> Result<T, E>,
{
    assert_throws_error_message_partial(part).check(f, message)
}

/// Partial form of [`assert_throws_error_message`]
pub fn assert_throws_error_message_partial(part: impl Into<String>) -> ThrowsAssertion {
    ThrowsAssertion::new(ThrownExpectation::MessagePart(part.into()))
}
