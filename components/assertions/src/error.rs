//! The assertion failure error
//!
//! Every failed assertion produces an [`AssertionError`]. The error carries:
//! - A human-readable message
//! - A machine-readable code (`ASSERTION_ERROR` unless overridden)
//! - The name of the assertion that failed (the operator)
//! - The call site of the assertion
//!
//! The call site replaces stack trimming: assertion entry points are
//! `#[track_caller]`, so the recorded location is the user's line and never a
//! frame inside this crate.

use std::any::Any;
use std::error::Error as StdError;
use std::panic::Location;
use std::sync::Arc;

use core_types::{ErrorCode, ErrorData, Value};
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Result of running an assertion
pub type AssertResult = Result<(), AssertionError>;

/// Shared error that caused an assertion error
pub type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// Optional construction fields for [`AssertionError::with_spec`]
#[derive(Debug, Clone, Default)]
pub struct AssertionErrorSpec {
    cause: Option<Cause>,
    cause_code: Option<String>,
    name: Option<String>,
    code: Option<String>,
    operator: Option<String>,
}

impl AssertionErrorSpec {
    /// Spec carrying only an operator name
    pub fn operator(operator: impl Into<String>) -> Self {
        AssertionErrorSpec::default().with_operator(operator)
    }

    /// Set the operator name
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    /// Override the error name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set an explicit code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attach the error that caused this one
    ///
    /// When the cause is itself an [`AssertionError`] its code is inherited
    /// unless an explicit code is set.
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let any: &dyn Any = &cause;
        self.cause_code = any
            .downcast_ref::<AssertionError>()
            .map(|inner| inner.code.clone());
        self.cause = Some(Arc::new(cause));
        self
    }

    /// Attach a cause that exposes its own code
    pub fn with_coded_cause<E>(mut self, cause: E) -> Self
    where
        E: StdError + ErrorCode + Send + Sync + 'static,
    {
        self.cause_code = cause.error_code().map(str::to_string);
        self.cause = Some(Arc::new(cause));
        self
    }
}

/// Error raised when an assertion fails
#[derive(Debug, Clone, Error, Serialize)]
#[error("{message}")]
pub struct AssertionError {
    name: String,
    message: String,
    code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    operator: Option<String>,
    #[serde(skip)]
    #[source]
    cause: Option<Cause>,
    #[serde(
        serialize_with = "serialize_location",
        skip_serializing_if = "Option::is_none"
    )]
    location: Option<&'static Location<'static>>,
}

impl AssertionError {
    /// Default error name
    pub const NAME: &'static str = "AssertionError";

    /// Default error code
    pub const CODE: &'static str = "ASSERTION_ERROR";

    /// Create an error with default name and code
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_spec(message, AssertionErrorSpec::default())
    }

    /// Create an error from a message and optional fields
    ///
    /// The code is the explicit code if given, else the cause's code, else
    /// [`AssertionError::CODE`].
    #[track_caller]
    pub fn with_spec(message: impl Into<String>, spec: AssertionErrorSpec) -> Self {
        let code = spec
            .code
            .or(spec.cause_code)
            .unwrap_or_else(|| Self::CODE.to_string());
        AssertionError {
            name: spec.name.unwrap_or_else(|| Self::NAME.to_string()),
            message: message.into(),
            code,
            operator: spec.operator,
            cause: spec.cause,
            location: Some(Location::caller()),
        }
    }

    /// Error name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Failure message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Machine-readable code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Name of the assertion that failed, if raised by one
    pub fn operator(&self) -> Option<&str> {
        self.operator.as_deref()
    }

    /// The error that caused this one
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Call site that raised the error
    pub fn location(&self) -> Option<&'static Location<'static>> {
        self.location
    }
}

impl ErrorCode for AssertionError {
    fn error_code(&self) -> Option<&str> {
        Some(self.code.as_str())
    }
}

/// Thrown-value form, an `Error` object whose lineage includes `AssertionError`
impl From<AssertionError> for Value {
    fn from(err: AssertionError) -> Self {
        let mut data = ErrorData::new(err.name.clone(), err.message.clone()).with_code(&err.code);
        if err.name != AssertionError::NAME {
            data.lineage.insert(1, AssertionError::NAME.to_string());
        }
        let value = Value::error(data);
        value.set("name", Value::from(err.name));
        value.set("code", Value::from(err.code));
        if let Some(operator) = err.operator {
            value.set("operator", Value::from(operator));
        }
        value
    }
}

fn serialize_location<S>(
    location: &Option<&'static Location<'static>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match location {
        Some(loc) => serializer.serialize_str(&loc.to_string()),
        None => serializer.serialize_none(),
    }
}
