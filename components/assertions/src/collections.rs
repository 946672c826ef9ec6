//! Emptiness, containment and key inspection

use core_types::{ObjectData, ObjectKind, Value, OBJECT_PROTOTYPE_MEMBERS};

use crate::equality::is_equal;

/// True for empty containers and falsy values
///
/// Empty strings, arrays, maps, sets and records without enumerable
/// properties are empty, as are `undefined`, `null`, `0`, `false` and NaN.
/// Other objects are never empty.
pub fn is_empty(value: &Value) -> bool {
    let Some(data) = value.as_object() else {
        return !value.is_truthy();
    };
    match &data.kind {
        ObjectKind::Array(elements) => elements.is_empty(),
        ObjectKind::BoxedString(text) => text.is_empty(),
        ObjectKind::Map(entries) => entries.is_empty(),
        ObjectKind::Set(members) => members.is_empty(),
        ObjectKind::Ordinary => data.enumerable_values().next().is_none(),
        _ => false,
    }
}

/// Whether `container` holds `item`
///
/// Strings check for a substring. Arrays, sets and weak sets check members,
/// maps check values, weak maps check keys, and records check enumerable
/// property values. Members compare with [`is_equal`].
pub fn includes(item: &Value, container: &Value) -> bool {
    if let Value::String(text) = container {
        return contains_text(text, item);
    }
    let Some(data) = container.as_object() else {
        return false;
    };
    match &data.kind {
        ObjectKind::BoxedString(text) => contains_text(text, item),
        ObjectKind::Array(members) | ObjectKind::Set(members) | ObjectKind::WeakSet(members) => {
            members.iter().any(|m| is_equal(item, m))
        }
        ObjectKind::Map(entries) => entries.iter().any(|(_, v)| is_equal(item, v)),
        ObjectKind::WeakMap(entries) => entries.iter().any(|(k, _)| is_equal(item, k)),
        ObjectKind::Ordinary => data.enumerable_values().any(|v| is_equal(item, v)),
        _ => false,
    }
}

fn contains_text(text: &str, item: &Value) -> bool {
    item.as_text().is_some_and(|needle| text.contains(needle.as_str()))
}

/// Curried [`includes`], bound to the item
pub fn includes_item(item: Value) -> impl Fn(&Value) -> bool {
    move |container| includes(&item, container)
}

/// Whether `value` has `key` as an own property
///
/// Strings own their indices and `length`; arrays own their indices and
/// `length`; functions own `name` and `length`. Other primitives own nothing.
pub fn has_own(key: &str, value: &Value) -> bool {
    if let Value::String(text) = value {
        return key == "length" || is_index(key, utf16_len(text));
    }
    let Some(data) = value.as_object() else {
        return false;
    };
    data.property(key).is_some() || owns_intrinsic(&data, key)
}

/// Curried [`has_own`], bound to the key
pub fn has_own_key(key: impl Into<String>) -> impl Fn(&Value) -> bool {
    let key = key.into();
    move |value| has_own(&key, value)
}

/// Whether `key` is an own or inherited property of `value`
///
/// `undefined` and `null` have no properties.
pub fn has(key: &str, value: &Value) -> bool {
    if has_own(key, value) {
        return true;
    }
    let wrapper = match value {
        Value::Undefined | Value::Null => return false,
        Value::String(_) => ObjectKind::BoxedString(String::new()),
        Value::Number(_) => ObjectKind::BoxedNumber(0.0),
        Value::Boolean(_) => ObjectKind::BoxedBoolean(false),
        Value::BigInt(_) | Value::Symbol(_) => return OBJECT_PROTOTYPE_MEMBERS.contains(&key),
        Value::Object(obj) => return obj.borrow().inherits(key),
    };
    wrapper.builtin_members().contains(&key) || OBJECT_PROTOTYPE_MEMBERS.contains(&key)
}

/// Curried [`has`], bound to the key
pub fn has_key(key: impl Into<String>) -> impl Fn(&Value) -> bool {
    let key = key.into();
    move |value| has(&key, value)
}

/// Own enumerable string keys in order
///
/// Index keys of strings and arrays come first, then enumerable properties.
/// Non-string primitives have no keys.
pub fn own_keys(value: &Value) -> Vec<String> {
    if let Value::String(text) = value {
        return index_keys(utf16_len(text));
    }
    let Some(data) = value.as_object() else {
        return Vec::new();
    };
    let mut keys = match &data.kind {
        ObjectKind::Array(elements) => index_keys(elements.len()),
        ObjectKind::BoxedString(text) => index_keys(utf16_len(text)),
        _ => Vec::new(),
    };
    keys.extend(
        data.properties
            .iter()
            .filter(|p| p.enumerable)
            .map(|p| p.key.clone()),
    );
    keys
}

fn owns_intrinsic(data: &ObjectData, key: &str) -> bool {
    match &data.kind {
        ObjectKind::Array(elements) => key == "length" || is_index(key, elements.len()),
        ObjectKind::BoxedString(text) => key == "length" || is_index(key, utf16_len(text)),
        ObjectKind::Function(_) => key == "length" || key == "name",
        _ => false,
    }
}

fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Canonical array index below `len`
fn is_index(key: &str, len: usize) -> bool {
    key.parse::<usize>()
        .is_ok_and(|index| index < len && index.to_string() == key)
}

fn index_keys(len: usize) -> Vec<String> {
    (0..len).map(|i| i.to_string()).collect()
}
