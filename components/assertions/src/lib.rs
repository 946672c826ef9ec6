//! Assertion and type-inspection library
//!
//! This crate provides the pieces a test or validation layer is built from:
//! - Type predicates (`is_string`, `is_plain_object`, `is_valid_date`, ...)
//! - Loose equality and fuzzy matching (`is_equal`, `does_match`)
//! - Emptiness, containment and key inspection (`is_empty`, `includes`, `has`)
//! - A friendly stringifier for failure messages (`to_friendly_string`)
//! - The failure error (`AssertionError`)
//! - The assertion factory and the named assertions built from it
//!
//! Every assertion returns [`AssertResult`]: `Ok(())` when it holds, an
//! [`AssertionError`] naming the failed operator otherwise.
//!
//! # Example
//!
//! ```
//! use assertions::{assert_equal, assert_greater_than_partial, to_friendly_string};
//! use core_types::Value;
//!
//! assert!(assert_equal(&Value::from(1), &Value::from(1), None).is_ok());
//!
//! let is_positive = assert_greater_than_partial(0);
//! assert!(is_positive.check(&Value::from(3), None).is_ok());
//!
//! let err = is_positive.check(&Value::from(-1), Some("score")).unwrap_err();
//! assert_eq!(err.operator(), Some("assertGreaterThan"));
//! assert_eq!(
//!     err.message(),
//!     "Expected Number(-1) to be greater than Number(0) (score)"
//! );
//!
//! assert_eq!(to_friendly_string(&Value::array()), "Array([])");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod collections;
pub mod equality;
pub mod error;
pub mod factory;
pub mod friendly;
pub mod library;
pub mod predicates;
pub mod throws;

// Re-export main types for convenience
pub use collections::{has, has_key, has_own, has_own_key, includes, includes_item, is_empty, own_keys};
pub use equality::{does_match, is_equal, is_equal_to, matches};
pub use error::{AssertResult, AssertionError, AssertionErrorSpec, Cause};
pub use factory::{
    curry_assertion2, Assertion1, Assertion2, BoundAssertion, Guard1, Guard2, MessageStyle,
};
pub use friendly::to_friendly_string;
pub use library::*;
pub use predicates::{
    is_array, is_bigint, is_boolean, is_date, is_error, is_function, is_map, is_non_empty_string,
    is_null, is_number, is_number_not_nan, is_plain_object, is_primitive, is_regexp, is_set,
    is_string, is_symbol, is_undefined, is_valid_date,
};
pub use throws::{
    assert_throws_error, assert_throws_error_class, assert_throws_error_class_partial,
    assert_throws_error_code, assert_throws_error_code_partial, assert_throws_error_message,
    assert_throws_error_message_partial, ThrownExpectation, ThrowsAssertion,
};
