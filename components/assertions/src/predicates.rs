//! Type predicates
//!
//! Every predicate is total and decides by the canonical [`Tag`] of a value,
//! so boxed primitives classify as their primitive type and subclassed
//! builtins classify as their base builtin.

use core_types::{ObjectKind, Prototype, Tag, Value};

/// True for string primitives and boxed strings
pub fn is_string(value: &Value) -> bool {
    value.tag() == Tag::String
}

/// True for strings (primitive or boxed) with at least one character
pub fn is_non_empty_string(value: &Value) -> bool {
    value.as_text().is_some_and(|text| !text.is_empty())
}

/// True for numbers, boxed numbers and BigInts (NaN included)
pub fn is_number(value: &Value) -> bool {
    matches!(value.tag(), Tag::Number | Tag::BigInt)
}

/// True for BigInts
pub fn is_bigint(value: &Value) -> bool {
    value.tag() == Tag::BigInt
}

/// True for numbers other than the primitive NaN
///
/// A boxed NaN is not itself NaN and passes.
pub fn is_number_not_nan(value: &Value) -> bool {
    is_number(value) && !matches!(value, Value::Number(n) if n.is_nan())
}

/// True for booleans and boxed booleans
pub fn is_boolean(value: &Value) -> bool {
    value.tag() == Tag::Boolean
}

/// True only for `undefined`
pub fn is_undefined(value: &Value) -> bool {
    matches!(value, Value::Undefined)
}

/// True only for `null`
pub fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

/// True for symbols
pub fn is_symbol(value: &Value) -> bool {
    matches!(value, Value::Symbol(_))
}

/// True for primitive values and for boxed strings, numbers and booleans
pub fn is_primitive(value: &Value) -> bool {
    matches!(
        value.tag(),
        Tag::Undefined
            | Tag::Null
            | Tag::Boolean
            | Tag::Number
            | Tag::BigInt
            | Tag::String
            | Tag::Symbol
    )
}

/// True for any callable, including async and generator functions and classes
pub fn is_function(value: &Value) -> bool {
    value.tag().is_callable()
}

/// True for records
///
/// A record is a non-function object with either no prototype or a
/// constructor named `Object`.
pub fn is_plain_object(value: &Value) -> bool {
    let Some(data) = value.as_object() else {
        return false;
    };
    if matches!(data.kind, ObjectKind::Function(_)) {
        return false;
    }
    match data.prototype {
        Prototype::Null => true,
        _ => data.constructor_name() == Some("Object"),
    }
}

/// True for arrays
pub fn is_array(value: &Value) -> bool {
    value.tag() == Tag::Array
}

/// True for date objects, valid or not
pub fn is_date(value: &Value) -> bool {
    value.tag() == Tag::Date
}

/// True for date objects holding a real instant
pub fn is_valid_date(value: &Value) -> bool {
    value.as_date().is_some_and(|date| date.is_valid())
}

/// True for regular expressions
pub fn is_regexp(value: &Value) -> bool {
    value.tag() == Tag::RegExp
}

/// True for Map and WeakMap
pub fn is_map(value: &Value) -> bool {
    matches!(value.tag(), Tag::Map | Tag::WeakMap)
}

/// True for Set and WeakSet
pub fn is_set(value: &Value) -> bool {
    matches!(value.tag(), Tag::Set | Tag::WeakSet)
}

/// True for error objects
pub fn is_error(value: &Value) -> bool {
    value.tag() == Tag::Error
}
