//! Loose equality and fuzzy matching
//!
//! [`is_equal`] extends strict equality with two exceptions: valid dates with
//! the same instant are equal, and NaN equals NaN. [`does_match`] builds on it
//! with substring, element and pattern matching.

use std::cmp::Ordering;

use core_types::{ObjectKind, RegExpValue, Value};

use crate::predicates::is_valid_date;

/// Loose equality
pub fn is_equal(a: &Value, b: &Value) -> bool {
    if a.strict_equals(b) {
        return true;
    }
    if is_valid_date(a) && is_valid_date(b) {
        return a.compare(b) == Some(Ordering::Equal);
    }
    is_self_unequal(a) && is_self_unequal(b)
}

/// Curried [`is_equal`]
pub fn is_equal_to(a: Value) -> impl Fn(&Value) -> bool {
    move |b| is_equal(&a, b)
}

/// Only NaN fails strict equality with itself
fn is_self_unequal(value: &Value) -> bool {
    !value.strict_equals(value)
}

/// Where a match is searched for
enum Haystack {
    Text(String),
    Elements(Vec<Value>),
}

impl Haystack {
    fn of(value: &Value) -> Option<Haystack> {
        if let Value::String(text) = value {
            return Some(Haystack::Text(text.clone()));
        }
        match &value.as_object()?.kind {
            ObjectKind::BoxedString(text) => Some(Haystack::Text(text.clone())),
            ObjectKind::Array(elements) => Some(Haystack::Elements(elements.clone())),
            _ => None,
        }
    }

    fn contains(&self, matcher: &Value) -> bool {
        match self {
            Haystack::Text(_) if matches!(matcher, Value::Symbol(_)) => false,
            Haystack::Text(text) => text.contains(&matcher.to_js_string()),
            Haystack::Elements(elements) => elements.iter().any(|e| e.same_value_zero(matcher)),
        }
    }
}

fn pattern_of(matcher: &Value) -> Option<RegExpValue> {
    match &matcher.as_object()?.kind {
        ObjectKind::RegExp(re) => Some(re.clone()),
        _ => None,
    }
}

/// Fuzzy match of `value` against `matcher`
///
/// In order: loose equality; a valid date value is replaced by its ISO
/// string; a pattern matcher tests the value's string form; a string value
/// matches when it contains the matcher's text; an array value matches when
/// it contains the matcher. Anything else does not match.
pub fn does_match(matcher: &Value, value: &Value) -> bool {
    if is_equal(matcher, value) {
        return true;
    }

    let value = match value.as_date().and_then(|date| date.to_iso_string()) {
        Some(iso) => Value::String(iso),
        None => value.clone(),
    };

    if let Some(pattern) = pattern_of(matcher) {
        return match value {
            Value::Symbol(_) => false,
            other => pattern.test(&other.to_js_string()),
        };
    }

    Haystack::of(&value).is_some_and(|haystack| haystack.contains(matcher))
}

/// Curried [`does_match`]
pub fn matches(matcher: Value) -> impl Fn(&Value) -> bool {
    move |value| does_match(&matcher, value)
}
