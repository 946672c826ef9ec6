//! Friendly stringification for failure messages
//!
//! Renders any value into a short string that names its category, e.g.
//! `String(foo)`, `Number(NaN)`, `Array([0..2])` or `Date(Invalid)`.

use core_types::{FunctionKind, ObjectKind, Prototype, Value};

use crate::predicates::{is_boolean, is_number, is_plain_object, is_string};

/// Render a value for use in an assertion message
///
/// Total and deterministic; never fails for any value.
pub fn to_friendly_string(value: &Value) -> String {
    if is_string(value) {
        return format!("String({})", value.to_js_string());
    }
    if let Value::BigInt(n) = value {
        return format!("BigInt({})", n);
    }
    if is_number(value) {
        return format!("Number({})", value.to_js_string());
    }
    if is_boolean(value) {
        return format!("Boolean({})", value.to_js_string());
    }

    let obj = match value {
        Value::Symbol(sym) => return sym.to_string(),
        Value::Undefined => return "undefined".to_string(),
        Value::Null => return "null".to_string(),
        Value::Object(obj) => obj,
        _ => return value.to_js_string(),
    };

    let data = obj.borrow();
    match &data.kind {
        ObjectKind::Function(func) => {
            if func.kind == FunctionKind::Class {
                return format!("class {} {{}}", func.name);
            }
            let prefix = data.kind.tag().name();
            if func.name.is_empty() {
                format!("{}(function)", prefix)
            } else {
                format!("{}({})", prefix, func.name)
            }
        }
        _ if matches!(data.prototype, Prototype::Null) => "Object(null)".to_string(),
        _ if is_plain_object(value) => "Object({})".to_string(),
        ObjectKind::Array(elements) if elements.is_empty() => "Array([])".to_string(),
        ObjectKind::Array(elements) => format!("Array([0..{}])", elements.len() - 1),
        ObjectKind::Date(date) => match date.to_iso_string() {
            Some(iso) => format!("Date({})", iso),
            None => "Date(Invalid)".to_string(),
        },
        ObjectKind::RegExp(re) => format!("RegExp({})", re),
        ObjectKind::Map(_) | ObjectKind::WeakMap(_) | ObjectKind::Set(_) | ObjectKind::WeakSet(_) => {
            format!("{}()", data.constructor_name().unwrap_or_else(|| data.kind.tag().name()))
        }
        _ => format!(
            "{}({})",
            data.constructor_name().unwrap_or("Object"),
            value.to_js_string()
        ),
    }
}
