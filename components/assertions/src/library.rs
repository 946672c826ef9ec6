//! The named assertions
//!
//! Each assertion exists as a constant ([`ASSERT_EQUAL`], [`ASSERT_DEFINED`],
//! ...) and as free functions. Two-value assertions have a full form
//! (`assert_equal(expected, actual, message)`) and a partial form
//! (`assert_equal_partial(expected)`) that returns a reusable
//! [`BoundAssertion`].
//!
//! Messages combine with the core failure text according to the
//! assertion's [`MessageStyle`]. Ordering assertions treat the message as a
//! suffix; the emptiness, inclusion and not-defined assertions append it.

use std::cmp::Ordering;

use core_types::Value;

use crate::collections::{includes, is_empty};
use crate::equality::{does_match, is_equal};
use crate::error::AssertResult;
use crate::factory::{curry_assertion2, Assertion1, Assertion2, BoundAssertion, MessageStyle};
use crate::friendly::to_friendly_string;
use crate::predicates::{
    is_array, is_boolean, is_function, is_non_empty_string, is_number_not_nan, is_regexp,
    is_undefined, is_valid_date,
};

fn check_value(
    passes: bool,
    style: MessageStyle,
    value: &Value,
    expectation: &str,
    message: Option<&str>,
) -> Option<String> {
    if passes {
        return None;
    }
    let core = format!("Expected {} {}", to_friendly_string(value), expectation);
    Some(style.compose(core, message))
}

fn check_pair(
    passes: bool,
    style: MessageStyle,
    subject: &Value,
    relation: &str,
    other: &Value,
    message: Option<&str>,
) -> Option<String> {
    if passes {
        return None;
    }
    let core = format!(
        "Expected {} {} {}",
        to_friendly_string(subject),
        relation,
        to_friendly_string(other)
    );
    Some(style.compose(core, message))
}

// Single-value guards

fn truthy_guard(value: &Value, message: Option<&str>) -> Option<String> {
    check_value(value.is_truthy(), MessageStyle::Prefix, value, "to be truthy", message)
}

fn falsy_guard(value: &Value, message: Option<&str>) -> Option<String> {
    check_value(!value.is_truthy(), MessageStyle::Prefix, value, "to be falsy", message)
}

fn defined_guard(value: &Value, message: Option<&str>) -> Option<String> {
    check_value(!is_undefined(value), MessageStyle::Prefix, value, "to be defined", message)
}

fn undefined_guard(value: &Value, message: Option<&str>) -> Option<String> {
    check_value(is_undefined(value), MessageStyle::Prefix, value, "to be undefined", message)
}

fn non_empty_string_guard(value: &Value, message: Option<&str>) -> Option<String> {
    check_value(
        is_non_empty_string(value),
        MessageStyle::Prefix,
        value,
        "to be a non-empty String",
        message,
    )
}

fn number_not_nan_guard(value: &Value, message: Option<&str>) -> Option<String> {
    check_value(
        is_number_not_nan(value),
        MessageStyle::Prefix,
        value,
        "to be a Number and not NaN",
        message,
    )
}

fn array_guard(value: &Value, message: Option<&str>) -> Option<String> {
    check_value(is_array(value), MessageStyle::Prefix, value, "to be an Array", message)
}

fn boolean_guard(value: &Value, message: Option<&str>) -> Option<String> {
    check_value(is_boolean(value), MessageStyle::Prefix, value, "to be a Boolean", message)
}

fn function_guard(value: &Value, message: Option<&str>) -> Option<String> {
    check_value(is_function(value), MessageStyle::Prefix, value, "to be a Function", message)
}

fn valid_date_guard(value: &Value, message: Option<&str>) -> Option<String> {
    check_value(is_valid_date(value), MessageStyle::Prefix, value, "to be a valid Date", message)
}

fn regexp_guard(value: &Value, message: Option<&str>) -> Option<String> {
    check_value(is_regexp(value), MessageStyle::Prefix, value, "to be a RegExp", message)
}

fn empty_guard(value: &Value, message: Option<&str>) -> Option<String> {
    check_value(
        is_empty(value),
        MessageStyle::Appended,
        value,
        "to be empty, null, or NaN",
        message,
    )
}

fn not_empty_guard(value: &Value, message: Option<&str>) -> Option<String> {
    check_value(
        !is_empty(value),
        MessageStyle::Appended,
        value,
        "NOT to be empty, null, or NaN",
        message,
    )
}

fn not_defined_guard(value: &Value, message: Option<&str>) -> Option<String> {
    check_value(is_undefined(value), MessageStyle::Appended, value, "to be undefined", message)
}

// Two-value guards

fn equal_guard(expected: &Value, actual: &Value, message: Option<&str>) -> Option<String> {
    let passes = is_equal(expected, actual);
    check_pair(passes, MessageStyle::Prefix, actual, "to equal (===)", expected, message)
}

fn not_equal_guard(expected: &Value, actual: &Value, message: Option<&str>) -> Option<String> {
    let passes = !is_equal(expected, actual);
    check_pair(passes, MessageStyle::Prefix, actual, "to NOT equal (!==)", expected, message)
}

fn matches_guard(matcher: &Value, actual: &Value, message: Option<&str>) -> Option<String> {
    let passes = does_match(matcher, actual);
    check_pair(passes, MessageStyle::Prefix, actual, "to match", matcher, message)
}

fn not_matches_guard(matcher: &Value, actual: &Value, message: Option<&str>) -> Option<String> {
    let passes = !does_match(matcher, actual);
    check_pair(passes, MessageStyle::Prefix, actual, "NOT to match", matcher, message)
}

fn greater_than_guard(control: &Value, subject: &Value, message: Option<&str>) -> Option<String> {
    // Only a decided `<=` fails; incomparable pairs such as NaN pass
    let passes = !matches!(
        subject.compare(control),
        Some(Ordering::Less | Ordering::Equal)
    );
    check_pair(
        passes,
        MessageStyle::ParenSuffix,
        subject,
        "to be greater than",
        control,
        message,
    )
}

fn less_than_guard(control: &Value, subject: &Value, message: Option<&str>) -> Option<String> {
    let passes = !matches!(
        subject.compare(control),
        Some(Ordering::Greater | Ordering::Equal)
    );
    check_pair(
        passes,
        MessageStyle::ParenSuffix,
        subject,
        "to be less than",
        control,
        message,
    )
}

fn includes_guard(item: &Value, container: &Value, message: Option<&str>) -> Option<String> {
    let passes = includes(item, container);
    check_pair(passes, MessageStyle::Appended, container, "to include", item, message)
}

fn excludes_guard(item: &Value, container: &Value, message: Option<&str>) -> Option<String> {
    let passes = !includes(item, container);
    check_pair(passes, MessageStyle::Appended, container, "NOT to include", item, message)
}

/// Passes for truthy values
pub const ASSERT: Assertion1 = Assertion1::new("assert", truthy_guard);
/// Passes for falsy values
pub const ASSERT_FALSY: Assertion1 = Assertion1::new("assertFalsy", falsy_guard);
/// Passes for anything but `undefined`
pub const ASSERT_DEFINED: Assertion1 = Assertion1::new("assertDefined", defined_guard);
/// Passes only for `undefined`
pub const ASSERT_UNDEFINED: Assertion1 = Assertion1::new("assertUndefined", undefined_guard);
/// Passes for strings with at least one character
pub const ASSERT_NON_EMPTY_STRING: Assertion1 =
    Assertion1::new("assertNonEmptyString", non_empty_string_guard);
/// Passes for numbers other than NaN
pub const ASSERT_NUMBER_NOT_NAN: Assertion1 =
    Assertion1::new("assertNumberNotNaN", number_not_nan_guard);
/// Passes for arrays
pub const ASSERT_ARRAY: Assertion1 = Assertion1::new("assertArray", array_guard);
/// Passes for booleans
pub const ASSERT_BOOLEAN: Assertion1 = Assertion1::new("assertBoolean", boolean_guard);
/// Passes for callables
pub const ASSERT_FUNCTION: Assertion1 = Assertion1::new("assertFunction", function_guard);
/// Passes for dates holding a real instant
pub const ASSERT_VALID_DATE: Assertion1 = Assertion1::new("assertValidDate", valid_date_guard);
/// Passes for regular expressions
pub const ASSERT_REGEXP: Assertion1 = Assertion1::new("assertRegExp", regexp_guard);
/// Passes for empty containers and falsy values
pub const ASSERT_EMPTY: Assertion1 = Assertion1::new("assertEmpty", empty_guard);
/// Passes for non-empty containers and truthy values
pub const ASSERT_NOT_EMPTY: Assertion1 = Assertion1::new("assertNotEmpty", not_empty_guard);
/// Passes only for `undefined`, appending the message
pub const ASSERT_NOT_DEFINED: Assertion1 = Assertion1::new("assertNotDefined", not_defined_guard);

/// Passes when `is_equal(expected, actual)`
pub const ASSERT_EQUAL: Assertion2 = curry_assertion2("assertEqual", equal_guard);
/// Passes when `!is_equal(expected, actual)`
pub const ASSERT_NOT_EQUAL: Assertion2 = curry_assertion2("assertNotEqual", not_equal_guard);
/// Passes when `does_match(matcher, actual)`
pub const ASSERT_MATCHES: Assertion2 = curry_assertion2("assertMatches", matches_guard);
/// Passes when `!does_match(matcher, actual)`
pub const ASSERT_NOT_MATCHES: Assertion2 =
    curry_assertion2("assertNotMatches", not_matches_guard);
/// Passes when `subject > control`
pub const ASSERT_GREATER_THAN: Assertion2 =
    curry_assertion2("assertGreaterThan", greater_than_guard);
/// Passes when `subject < control`
pub const ASSERT_LESS_THAN: Assertion2 = curry_assertion2("assertLessThan", less_than_guard);
/// Passes when `includes(item, container)`
pub const ASSERT_INCLUDES: Assertion2 = curry_assertion2("assertIncludes", includes_guard);
/// Passes when `!includes(item, container)`
pub const ASSERT_EXCLUDES: Assertion2 = curry_assertion2("assertExcludes", excludes_guard);

macro_rules! single_value_assertions {
    ($($(#[$doc:meta])* $name:ident => $assertion:ident;)*) => {
        $(
            $(#[$doc])*
            #[track_caller]
            pub fn $name(value: &Value, message: Option<&str>) -> AssertResult {
                $assertion.check(value, message)
            }
        )*
    };
}

macro_rules! two_value_assertions {
    ($($(#[$doc:meta])* $name:ident, $partial:ident => $assertion:ident;)*) => {
        $(
            $(#[$doc])*
            #[track_caller]
            pub fn $name(first: &Value, second: &Value, message: Option<&str>) -> AssertResult {
                $assertion.check(first, second, message)
            }

            #[doc = concat!("Partial form of [`", stringify!($name), "`]")]
            pub fn $partial(first: impl Into<Value>) -> BoundAssertion {
                $assertion.bind(first)
            }
        )*
    };
}

single_value_assertions! {
    /// Assert that a value is truthy
    assert => ASSERT;
    /// Assert that a value is falsy
    assert_falsy => ASSERT_FALSY;
    /// Assert that a value is not `undefined`
    assert_defined => ASSERT_DEFINED;
    /// Assert that a value is `undefined`
    assert_undefined => ASSERT_UNDEFINED;
    /// Assert that a value is a non-empty string
    assert_non_empty_string => ASSERT_NON_EMPTY_STRING;
    /// Assert that a value is a number other than NaN
    assert_number_not_nan => ASSERT_NUMBER_NOT_NAN;
    /// Assert that a value is an array
    assert_array => ASSERT_ARRAY;
    /// Assert that a value is a boolean
    assert_boolean => ASSERT_BOOLEAN;
    /// Assert that a value is callable
    assert_function => ASSERT_FUNCTION;
    /// Assert that a value is a valid date
    assert_valid_date => ASSERT_VALID_DATE;
    /// Assert that a value is a regular expression
    assert_regexp => ASSERT_REGEXP;
    /// Assert that a value is empty
    assert_empty => ASSERT_EMPTY;
    /// Assert that a value is not empty
    assert_not_empty => ASSERT_NOT_EMPTY;
    /// Assert that a value is `undefined`, appending the message
    assert_not_defined => ASSERT_NOT_DEFINED;
}

two_value_assertions! {
    /// Assert loose equality of `actual` to `expected`
    assert_equal, assert_equal_partial => ASSERT_EQUAL;
    /// Assert that `actual` is not loosely equal to `expected`
    assert_not_equal, assert_not_equal_partial => ASSERT_NOT_EQUAL;
    /// Assert that `actual` matches `matcher`
    assert_matches, assert_matches_partial => ASSERT_MATCHES;
    /// Assert that `actual` does not match `matcher`
    assert_not_matches, assert_not_matches_partial => ASSERT_NOT_MATCHES;
    /// Assert that `subject` is greater than `control`
    assert_greater_than, assert_greater_than_partial => ASSERT_GREATER_THAN;
    /// Assert that `subject` is less than `control`
    assert_less_than, assert_less_than_partial => ASSERT_LESS_THAN;
    /// Assert that `container` includes `item`
    assert_includes, assert_includes_partial => ASSERT_INCLUDES;
    /// Assert that `container` does not include `item`
    assert_excludes, assert_excludes_partial => ASSERT_EXCLUDES;
}
