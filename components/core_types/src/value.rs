//! Dynamic value representation.
//!
//! This module provides the core `Value` enum describing every kind of value
//! the assertion library can inspect. Primitives are stored inline, objects
//! are shared through reference-counted handles so that identity survives
//! cloning.

use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive, Zero};
use std::cell::{Ref, RefCell};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crate::date::DateValue;
use crate::error::ValueError;
use crate::number::{number_to_string, string_to_number};
use crate::object::{
    ClassRef, ErrorData, FunctionData, FunctionKind, ObjectData, ObjectKind, ObjectRef, Prototype,
};
use crate::regexp::RegExpValue;
use crate::symbol::Symbol;
use crate::tag::Tag;

/// Represents any value.
///
/// # Examples
///
/// ```
/// use core_types::{Tag, Value};
///
/// let number = Value::number(42.0);
/// let boxed = Value::boxed_string("foo");
///
/// assert!(number.is_truthy());
/// assert_eq!(number.type_of(), "number");
/// assert_eq!(boxed.tag(), Tag::String);
/// assert_eq!(boxed.type_of(), "object");
/// ```
#[derive(Clone)]
pub enum Value {
    /// The absent value
    Undefined,
    /// null
    Null,
    /// Boolean primitive
    Boolean(bool),
    /// IEEE 754 double-precision number
    Number(f64),
    /// Arbitrary precision integer
    BigInt(BigInt),
    /// String primitive
    String(String),
    /// Unique symbol
    Symbol(Symbol),
    /// Heap object
    Object(ObjectRef),
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::BigInt(n) => f.debug_tuple("BigInt").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Symbol(sym) => f.debug_tuple("Symbol").field(&sym.description()).finish(),
            // Objects may be cyclic, so only the tag is printed
            Value::Object(obj) => write!(f, "Object({})", obj.borrow().kind.tag().name()),
        }
    }
}

impl Value {
    /// Create undefined value
    pub fn undefined() -> Self {
        Value::Undefined
    }

    /// Create null value
    pub fn null() -> Self {
        Value::Null
    }

    /// Create boolean value
    pub fn boolean(v: bool) -> Self {
        Value::Boolean(v)
    }

    /// Create number value
    pub fn number(v: f64) -> Self {
        Value::Number(v)
    }

    /// Create BigInt value
    pub fn bigint(v: impl Into<BigInt>) -> Self {
        Value::BigInt(v.into())
    }

    /// Create string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create a new unique symbol
    pub fn symbol(description: Option<&str>) -> Self {
        Value::Symbol(Symbol::new(description))
    }

    /// Wrap object data into a new object with its own identity
    pub fn from_data(data: ObjectData) -> Self {
        Value::Object(Rc::new(RefCell::new(data)))
    }

    /// Create an object of the given kind inheriting from `prototype`
    pub fn with_prototype(kind: ObjectKind, prototype: Prototype) -> Self {
        let mut data = ObjectData::new(kind);
        data.prototype = prototype;
        Value::from_data(data)
    }

    /// Create empty plain object (`{}`)
    pub fn object() -> Self {
        Value::from_data(ObjectData::new(ObjectKind::Ordinary))
    }

    /// Create plain object from enumerable key/value pairs
    pub fn object_from<K: AsRef<str>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        let obj = Value::object();
        for (key, value) in entries {
            obj.set(key.as_ref(), value);
        }
        obj
    }

    /// Create object without a prototype (`Object.create(null)`)
    pub fn null_prototype_object() -> Self {
        Value::with_prototype(ObjectKind::Ordinary, Prototype::Null)
    }

    /// Create an instance of a user-defined class
    pub fn instance(class: &ClassRef) -> Self {
        Value::with_prototype(ObjectKind::Ordinary, Prototype::Class(Rc::clone(class)))
    }

    /// Create empty array
    pub fn array() -> Self {
        Value::array_from(Vec::new())
    }

    /// Create array from values
    pub fn array_from(values: Vec<Value>) -> Self {
        Value::from_data(ObjectData::new(ObjectKind::Array(values)))
    }

    /// Create a date object
    pub fn date(date: DateValue) -> Self {
        Value::from_data(ObjectData::new(ObjectKind::Date(date)))
    }

    /// Compile a regular expression object
    pub fn regexp(pattern: &str, flags: &str) -> Result<Self, ValueError> {
        let re = RegExpValue::new(pattern, flags)?;
        Ok(Value::from_data(ObjectData::new(ObjectKind::RegExp(re))))
    }

    /// Create a Map from entries
    pub fn map(entries: Vec<(Value, Value)>) -> Self {
        Value::from_data(ObjectData::new(ObjectKind::Map(entries)))
    }

    /// Create a Set from members
    pub fn set_collection(values: Vec<Value>) -> Self {
        Value::from_data(ObjectData::new(ObjectKind::Set(values)))
    }

    /// Create a WeakMap from entries
    pub fn weak_map(entries: Vec<(Value, Value)>) -> Self {
        Value::from_data(ObjectData::new(ObjectKind::WeakMap(entries)))
    }

    /// Create a WeakSet from members
    pub fn weak_set(values: Vec<Value>) -> Self {
        Value::from_data(ObjectData::new(ObjectKind::WeakSet(values)))
    }

    /// Create a boxed string (`new String(..)`)
    pub fn boxed_string(s: impl Into<String>) -> Self {
        Value::from_data(ObjectData::new(ObjectKind::BoxedString(s.into())))
    }

    /// Create a boxed number (`new Number(..)`)
    pub fn boxed_number(n: f64) -> Self {
        Value::from_data(ObjectData::new(ObjectKind::BoxedNumber(n)))
    }

    /// Create a boxed boolean (`new Boolean(..)`)
    pub fn boxed_boolean(b: bool) -> Self {
        Value::from_data(ObjectData::new(ObjectKind::BoxedBoolean(b)))
    }

    /// Create a function value; an empty name makes it anonymous
    pub fn function(name: impl Into<String>, kind: FunctionKind) -> Self {
        Value::from_data(ObjectData::new(ObjectKind::Function(FunctionData {
            name: name.into(),
            kind,
            class: None,
        })))
    }

    /// Create the constructor function for a class
    pub fn class(class: &ClassRef) -> Self {
        Value::from_data(ObjectData::new(ObjectKind::Function(FunctionData {
            name: class.name.clone(),
            kind: FunctionKind::Class,
            class: Some(Rc::clone(class)),
        })))
    }

    /// Create an error object
    pub fn error(error: ErrorData) -> Self {
        Value::from_data(ObjectData::new(ObjectKind::Error(error)))
    }

    /// Borrow the object data, if this is an object
    pub fn as_object(&self) -> Option<Ref<'_, ObjectData>> {
        match self {
            Value::Object(obj) => Some(obj.borrow()),
            _ => None,
        }
    }

    /// Set an enumerable own property (no-op on primitives)
    pub fn set(&self, key: &str, value: Value) {
        self.define(key, value, true);
    }

    /// Define an own property (no-op on primitives)
    pub fn define(&self, key: &str, value: Value, enumerable: bool) {
        if let Value::Object(obj) = self {
            obj.borrow_mut().define(key, value, enumerable);
        }
    }

    /// Get an own property
    pub fn get(&self, key: &str) -> Option<Value> {
        self.as_object()
            .and_then(|data| data.property(key).map(|p| p.value.clone()))
    }

    /// Get the date value, if this is a date object
    pub fn as_date(&self) -> Option<DateValue> {
        match self.as_object()?.kind {
            ObjectKind::Date(date) => Some(date),
            _ => None,
        }
    }

    /// Get the text of a string primitive or boxed string
    pub fn as_text(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Object(obj) => match &obj.borrow().kind {
                ObjectKind::BoxedString(s) => Some(s.clone()),
                _ => None,
            },
            _ => None,
        }
    }

    /// Get the error data, if this is an error object
    pub fn as_error(&self) -> Option<ErrorData> {
        match &self.as_object()?.kind {
            ObjectKind::Error(data) => Some(data.clone()),
            _ => None,
        }
    }

    /// The canonical tag of this value
    pub fn tag(&self) -> Tag {
        match self {
            Value::Undefined => Tag::Undefined,
            Value::Null => Tag::Null,
            Value::Boolean(_) => Tag::Boolean,
            Value::Number(_) => Tag::Number,
            Value::BigInt(_) => Tag::BigInt,
            Value::String(_) => Tag::String,
            Value::Symbol(_) => Tag::Symbol,
            Value::Object(obj) => obj.borrow().kind.tag(),
        }
    }

    /// Get the type of the value (as `typeof` would return)
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Object(obj) => match obj.borrow().kind {
                ObjectKind::Function(_) => "function",
                _ => "object",
            },
        }
    }

    /// The constructor name of this value
    ///
    /// Primitives report their wrapper constructor. `None` for null,
    /// undefined and null-prototype objects.
    pub fn constructor_name(&self) -> Option<String> {
        match self {
            Value::Undefined | Value::Null => None,
            Value::Boolean(_) => Some("Boolean".to_string()),
            Value::Number(_) => Some("Number".to_string()),
            Value::BigInt(_) => Some("BigInt".to_string()),
            Value::String(_) => Some("String".to_string()),
            Value::Symbol(_) => Some("Symbol".to_string()),
            Value::Object(obj) => obj.borrow().constructor_name().map(str::to_string),
        }
    }

    /// Check if value is truthy
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::BigInt(n) => !n.is_zero(),
            Value::String(s) => !s.is_empty(),
            Value::Symbol(_) | Value::Object(_) => true,
        }
    }

    /// Strict equality (`===`)
    ///
    /// Objects compare by identity, NaN is unequal to itself and the two
    /// zeros are equal.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// SameValueZero comparison
    ///
    /// Like [`Value::strict_equals`] but treats NaN as equal to NaN. This is
    /// the comparison arrays use to decide whether they include a value.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) if a.is_nan() && b.is_nan() => true,
            _ => self.strict_equals(other),
        }
    }

    /// Reduce an object to a primitive using the number hint
    fn to_primitive(&self) -> Value {
        let Value::Object(obj) = self else {
            return self.clone();
        };
        match &obj.borrow().kind {
            ObjectKind::Date(date) => Value::Number(date.time_value()),
            ObjectKind::BoxedString(s) => Value::String(s.clone()),
            ObjectKind::BoxedNumber(n) => Value::Number(*n),
            ObjectKind::BoxedBoolean(b) => Value::Boolean(*b),
            _ => Value::String(self.to_js_string()),
        }
    }

    /// Convert to a number (`Number(value)`); BigInts convert approximately
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined | Value::Symbol(_) => f64::NAN,
            Value::Null => 0.0,
            Value::Boolean(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Number(n) => *n,
            Value::BigInt(n) => n.to_f64().unwrap_or(f64::NAN),
            Value::String(s) => string_to_number(s),
            Value::Object(_) => self.to_primitive().to_number(),
        }
    }

    /// Abstract relational comparison
    ///
    /// Strings compare by UTF-16 code units, dates by time value, BigInts
    /// exactly against each other and against numbers. Returns `None` when the pair is not
    /// comparable (either side is NaN after conversion, or a symbol).
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        let a = self.to_primitive();
        let b = other.to_primitive();
        match (&a, &b) {
            (Value::Symbol(_), _) | (_, Value::Symbol(_)) => None,
            (Value::String(x), Value::String(y)) => Some(x.encode_utf16().cmp(y.encode_utf16())),
            (Value::BigInt(x), Value::BigInt(y)) => Some(x.cmp(y)),
            (Value::BigInt(x), Value::String(y)) => {
                y.trim().parse::<BigInt>().ok().map(|y| x.cmp(&y))
            }
            (Value::String(x), Value::BigInt(y)) => {
                x.trim().parse::<BigInt>().ok().map(|x| x.cmp(y))
            }
            (Value::BigInt(x), _) => compare_bigint_number(x, b.to_number()),
            (_, Value::BigInt(y)) => compare_bigint_number(y, a.to_number()).map(Ordering::reverse),
            _ => a.to_number().partial_cmp(&b.to_number()),
        }
    }

    /// Convert to string representation (`String(value)`)
    pub fn to_js_string(&self) -> String {
        let mut out = String::new();
        self.write_js_string(&mut out, &mut Vec::new());
        out
    }

    fn write_js_string(&self, out: &mut String, seen: &mut Vec<*const RefCell<ObjectData>>) {
        let obj = match self {
            Value::Undefined => return out.push_str("undefined"),
            Value::Null => return out.push_str("null"),
            Value::Boolean(b) => return out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => return out.push_str(&number_to_string(*n)),
            Value::BigInt(n) => return out.push_str(&n.to_string()),
            Value::String(s) => return out.push_str(s),
            Value::Symbol(sym) => return out.push_str(&sym.to_string()),
            Value::Object(obj) => obj,
        };

        let data = obj.borrow();
        match &data.kind {
            ObjectKind::Array(elements) => {
                let ptr = Rc::as_ptr(obj);
                // A cyclic array renders its self-reference as empty
                if seen.contains(&ptr) {
                    return;
                }
                seen.push(ptr);
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    if !matches!(element, Value::Undefined | Value::Null) {
                        element.write_js_string(out, seen);
                    }
                }
                seen.pop();
            }
            ObjectKind::Date(date) => match date.to_iso_string() {
                Some(iso) => out.push_str(&iso),
                None => out.push_str("Invalid Date"),
            },
            ObjectKind::RegExp(re) => out.push_str(&re.to_string()),
            ObjectKind::BoxedString(s) => out.push_str(s),
            ObjectKind::BoxedNumber(n) => out.push_str(&number_to_string(*n)),
            ObjectKind::BoxedBoolean(b) => out.push_str(if *b { "true" } else { "false" }),
            ObjectKind::Function(func) => {
                let text = match func.kind {
                    FunctionKind::Class => format!("class {} {{ }}", func.name),
                    FunctionKind::Normal => {
                        format!("function {}() {{ [native code] }}", func.name)
                    }
                    FunctionKind::Async => {
                        format!("async function {}() {{ [native code] }}", func.name)
                    }
                    FunctionKind::Generator => {
                        format!("function* {}() {{ [native code] }}", func.name)
                    }
                    FunctionKind::AsyncGenerator => {
                        format!("async function* {}() {{ [native code] }}", func.name)
                    }
                };
                out.push_str(&text);
            }
            ObjectKind::Error(err) => {
                if err.message.is_empty() {
                    out.push_str(&err.name);
                } else if err.name.is_empty() {
                    out.push_str(&err.message);
                } else {
                    out.push_str(&format!("{}: {}", err.name, err.message));
                }
            }
            ObjectKind::Ordinary
            | ObjectKind::Map(_)
            | ObjectKind::WeakMap(_)
            | ObjectKind::Set(_)
            | ObjectKind::WeakSet(_) => out.push_str(&data.kind.tag().to_string()),
        }
    }
}

fn compare_bigint_number(x: &BigInt, n: f64) -> Option<Ordering> {
    if n.is_nan() {
        return None;
    }
    if n.is_infinite() {
        return Some(if n > 0.0 { Ordering::Less } else { Ordering::Greater });
    }
    let floor = n.floor();
    match x.cmp(&BigInt::from_f64(floor)?) {
        // Equal integer parts: a fractional number is the larger one
        Ordering::Equal if n > floor => Some(Ordering::Less),
        ordering => Some(ordering),
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.strict_equals(other)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Value::BigInt(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Symbol> for Value {
    fn from(v: Symbol) -> Self {
        Value::Symbol(v)
    }
}

impl From<DateValue> for Value {
    fn from(v: DateValue) -> Self {
        Value::date(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::array_from(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Undefined, Into::into)
    }
}
