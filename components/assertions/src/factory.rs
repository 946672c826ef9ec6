//! Assertion construction and currying
//!
//! An assertion pairs an operator name with a guard. The guard inspects its
//! arguments and returns the failure message, or `None` when the assertion
//! holds. Running an assertion turns a failure message into an
//! [`AssertionError`] tagged with the operator and the caller's location.
//!
//! Two-argument assertions can run with both arguments at once through
//! [`Assertion2::check`], or be bound to their first argument with
//! [`Assertion2::bind`] and run later. Both forms behave identically.

use std::fmt;
use std::panic::Location;

use core_types::Value;
use tracing::debug;

use crate::error::{AssertResult, AssertionError, AssertionErrorSpec};

/// Guard of a single-value assertion
pub type Guard1 = fn(&Value, Option<&str>) -> Option<String>;

/// Guard of a two-value assertion; the first argument is the bound one
pub type Guard2 = fn(&Value, &Value, Option<&str>) -> Option<String>;

/// How a caller-supplied message is combined with the core failure text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    /// `"<message> (<core>)"`
    Prefix,
    /// `"<core> (<message>)"`
    ParenSuffix,
    /// `"<core> <message>"`
    Appended,
}

impl MessageStyle {
    /// Compose the final message
    ///
    /// A missing or empty message leaves the core text unchanged.
    pub fn compose(self, core: String, message: Option<&str>) -> String {
        let Some(message) = message.filter(|m| !m.is_empty()) else {
            return core;
        };
        match self {
            MessageStyle::Prefix => format!("{} ({})", message, core),
            MessageStyle::ParenSuffix => format!("{} ({})", core, message),
            MessageStyle::Appended => format!("{} {}", core, message),
        }
    }
}

/// Turn a guard outcome into an assertion result
#[track_caller]
pub(crate) fn fail_if(operator: &'static str, failure: Option<String>) -> AssertResult {
    let Some(message) = failure else {
        return Ok(());
    };
    let location = Location::caller();
    debug!(operator, %message, %location, "assertion failed");
    Err(AssertionError::with_spec(
        message,
        AssertionErrorSpec::operator(operator),
    ))
}

/// A single-value assertion
#[derive(Clone, Copy)]
pub struct Assertion1 {
    operator: &'static str,
    guard: Guard1,
}

impl Assertion1 {
    /// Create an assertion
    pub const fn new(operator: &'static str, guard: Guard1) -> Self {
        Assertion1 { operator, guard }
    }

    /// Operator name reported on failure
    pub fn operator(&self) -> &'static str {
        self.operator
    }

    /// Run the assertion
    #[track_caller]
    pub fn check(&self, actual: &Value, message: Option<&str>) -> AssertResult {
        fail_if(self.operator, (self.guard)(actual, message))
    }
}

/// A two-value assertion that can be run whole or bound to its first value
#[derive(Clone, Copy)]
pub struct Assertion2 {
    operator: &'static str,
    guard: Guard2,
}

impl Assertion2 {
    /// Create an assertion
    pub const fn new(operator: &'static str, guard: Guard2) -> Self {
        Assertion2 { operator, guard }
    }

    /// Operator name reported on failure
    pub fn operator(&self) -> &'static str {
        self.operator
    }

    /// Run with both values
    #[track_caller]
    pub fn check(&self, expected: &Value, actual: &Value, message: Option<&str>) -> AssertResult {
        fail_if(self.operator, (self.guard)(expected, actual, message))
    }

    /// Bind the first value, deferring the check
    pub fn bind(&self, expected: impl Into<Value>) -> BoundAssertion {
        BoundAssertion {
            assertion: *self,
            expected: expected.into(),
        }
    }
}

impl fmt::Debug for Assertion1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assertion1")
            .field("operator", &self.operator)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for Assertion2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assertion2")
            .field("operator", &self.operator)
            .finish_non_exhaustive()
    }
}

/// A two-value assertion with its first value bound
#[derive(Debug, Clone)]
pub struct BoundAssertion {
    assertion: Assertion2,
    expected: Value,
}

impl BoundAssertion {
    /// The bound value
    pub fn expected(&self) -> &Value {
        &self.expected
    }

    /// Operator name reported on failure
    pub fn operator(&self) -> &'static str {
        self.assertion.operator
    }

    /// Run against the remaining value
    #[track_caller]
    pub fn check(&self, actual: &Value, message: Option<&str>) -> AssertResult {
        self.assertion.check(&self.expected, actual, message)
    }
}

/// Build a curried two-value assertion from a guard
pub const fn curry_assertion2(operator: &'static str, guard: Guard2) -> Assertion2 {
    Assertion2::new(operator, guard)
}
