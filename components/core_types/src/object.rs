//! Object representation
//!
//! Objects are shared through [`ObjectRef`] handles. Identity is the identity
//! of the handle, so two objects with identical contents are still distinct.
//!
//! The kind of an object ([`ObjectKind`]) decides its canonical tag. The
//! prototype ([`Prototype`]) decides its constructor name, which is how a
//! `class MyMap extends Map` instance keeps the `Map` tag while reporting
//! `MyMap` as its constructor.

use std::cell::RefCell;
use std::rc::Rc;

use crate::date::DateValue;
use crate::error::ErrorCode;
use crate::regexp::RegExpValue;
use crate::tag::Tag;
use crate::value::Value;

/// Shared handle to an object
pub type ObjectRef = Rc<RefCell<ObjectData>>;

/// Shared handle to a class description
pub type ClassRef = Rc<ClassInfo>;

/// Members every object inherits from `Object.prototype`
pub const OBJECT_PROTOTYPE_MEMBERS: &[&str] = &[
    "constructor",
    "hasOwnProperty",
    "isPrototypeOf",
    "propertyIsEnumerable",
    "toLocaleString",
    "toString",
    "valueOf",
];

/// An own property
#[derive(Debug, Clone)]
pub struct Property {
    /// Property key
    pub key: String,
    /// Property value
    pub value: Value,
    /// Whether the property shows up in key enumeration
    pub enumerable: bool,
}

/// The flavor of a function object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    /// `function` or arrow function
    Normal,
    /// `async function`
    Async,
    /// `function*`
    Generator,
    /// `async function*`
    AsyncGenerator,
    /// `class`
    Class,
}

/// Internal function data
#[derive(Debug, Clone)]
pub struct FunctionData {
    /// Function name, empty for anonymous functions
    pub name: String,
    /// Function flavor
    pub kind: FunctionKind,
    /// Class description when `kind` is [`FunctionKind::Class`]
    pub class: Option<ClassRef>,
}

/// Internal error object data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorData {
    /// The `name` of the error (usually its constructor name)
    pub name: String,
    /// Error message
    pub message: String,
    /// Optional machine-readable code
    pub code: Option<String>,
    /// Constructor chain, most specific first (e.g. `TypeError`, `Error`)
    pub lineage: Vec<String>,
}

impl ErrorData {
    /// Create an error whose lineage is `name` followed by `Error`
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        let name = name.into();
        let mut lineage = vec![name.clone()];
        if name != "Error" {
            lineage.push("Error".to_string());
        }
        ErrorData {
            name,
            message: message.into(),
            code: None,
            lineage,
        }
    }

    /// Attach a code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Whether this error is an instance of the named constructor
    pub fn is_instance_of(&self, constructor: &str) -> bool {
        self.lineage.iter().any(|name| name == constructor)
    }
}

impl ErrorCode for ErrorData {
    fn error_code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

/// Description of a user-defined class
#[derive(Debug, Clone)]
pub struct ClassInfo {
    /// Class name
    pub name: String,
    /// Parent class, if the class extends another user class
    pub parent: Option<ClassRef>,
    /// Members declared on the class prototype (methods, getters)
    pub members: Vec<String>,
}

impl ClassInfo {
    /// Create a class with no members
    pub fn new(name: impl Into<String>) -> Self {
        ClassInfo {
            name: name.into(),
            parent: None,
            members: Vec::new(),
        }
    }

    /// Set the parent class
    pub fn extends(mut self, parent: &ClassRef) -> Self {
        self.parent = Some(Rc::clone(parent));
        self
    }

    /// Declare a prototype member (method or accessor)
    pub fn member(mut self, name: impl Into<String>) -> Self {
        self.members.push(name.into());
        self
    }

    /// Finish building and share the class
    pub fn into_ref(self) -> ClassRef {
        Rc::new(self)
    }

    /// Whether `key` is declared on this class or any ancestor
    pub fn has_member(&self, key: &str) -> bool {
        self.members.iter().any(|m| m == key)
            || self.parent.as_ref().is_some_and(|p| p.has_member(key))
    }
}

/// Where an object inherits from
#[derive(Debug, Clone)]
pub enum Prototype {
    /// No prototype at all (`Object.create(null)`)
    Null,
    /// The builtin prototype for the object's kind
    Builtin,
    /// A user-defined class, which itself extends the builtin for the kind
    Class(ClassRef),
}

/// What an object is
#[derive(Debug, Clone)]
pub enum ObjectKind {
    /// Record or class instance
    Ordinary,
    /// Array elements
    Array(Vec<Value>),
    /// Date
    Date(DateValue),
    /// Regular expression
    RegExp(RegExpValue),
    /// Map entries in insertion order
    Map(Vec<(Value, Value)>),
    /// WeakMap entries in insertion order
    WeakMap(Vec<(Value, Value)>),
    /// Set members in insertion order
    Set(Vec<Value>),
    /// WeakSet members in insertion order
    WeakSet(Vec<Value>),
    /// `new String(..)`
    BoxedString(String),
    /// `new Number(..)`
    BoxedNumber(f64),
    /// `new Boolean(..)`
    BoxedBoolean(bool),
    /// Function or class
    Function(FunctionData),
    /// Error object
    Error(ErrorData),
}

impl ObjectKind {
    /// The canonical tag for this kind
    pub fn tag(&self) -> Tag {
        match self {
            ObjectKind::Ordinary => Tag::Object,
            ObjectKind::Array(_) => Tag::Array,
            ObjectKind::Date(_) => Tag::Date,
            ObjectKind::RegExp(_) => Tag::RegExp,
            ObjectKind::Map(_) => Tag::Map,
            ObjectKind::WeakMap(_) => Tag::WeakMap,
            ObjectKind::Set(_) => Tag::Set,
            ObjectKind::WeakSet(_) => Tag::WeakSet,
            ObjectKind::BoxedString(_) => Tag::String,
            ObjectKind::BoxedNumber(_) => Tag::Number,
            ObjectKind::BoxedBoolean(_) => Tag::Boolean,
            ObjectKind::Function(data) => match data.kind {
                FunctionKind::Normal | FunctionKind::Class => Tag::Function,
                FunctionKind::Async => Tag::AsyncFunction,
                FunctionKind::Generator => Tag::GeneratorFunction,
                FunctionKind::AsyncGenerator => Tag::AsyncGeneratorFunction,
            },
            ObjectKind::Error(_) => Tag::Error,
        }
    }

    /// Name of the builtin constructor for this kind
    pub fn builtin_constructor(&self) -> &str {
        match self {
            ObjectKind::Error(data) => data.lineage.first().map_or("Error", String::as_str),
            other => other.tag().name(),
        }
    }

    /// Members inherited from the builtin prototype for this kind
    pub fn builtin_members(&self) -> &'static [&'static str] {
        match self {
            ObjectKind::Ordinary => &[],
            ObjectKind::Array(_) => &[
                "at", "concat", "entries", "every", "filter", "find", "findIndex", "flat",
                "forEach", "includes", "indexOf", "join", "keys", "map", "pop", "push",
                "reduce", "reverse", "shift", "slice", "some", "sort", "splice", "values",
            ],
            ObjectKind::Date(_) => &["getTime", "toISOString", "toJSON", "toUTCString"],
            ObjectKind::RegExp(_) => &["exec", "flags", "global", "source", "test"],
            ObjectKind::Map(_) => &[
                "clear", "delete", "entries", "forEach", "get", "has", "keys", "set", "size",
                "values",
            ],
            ObjectKind::WeakMap(_) => &["delete", "get", "has", "set"],
            ObjectKind::Set(_) => &[
                "add", "clear", "delete", "entries", "forEach", "has", "keys", "size", "values",
            ],
            ObjectKind::WeakSet(_) => &["add", "delete", "has"],
            ObjectKind::BoxedString(_) => &[
                "charAt", "endsWith", "includes", "indexOf", "slice", "split", "startsWith",
                "toLowerCase", "toUpperCase", "trim",
            ],
            ObjectKind::BoxedNumber(_) => &["toExponential", "toFixed", "toPrecision"],
            ObjectKind::BoxedBoolean(_) => &[],
            ObjectKind::Function(_) => &["apply", "bind", "call"],
            ObjectKind::Error(_) => &["message", "name"],
        }
    }
}

/// Internal object data
#[derive(Debug, Clone)]
pub struct ObjectData {
    /// What the object is
    pub kind: ObjectKind,
    /// Where it inherits from
    pub prototype: Prototype,
    /// Own properties in insertion order
    pub properties: Vec<Property>,
}

impl ObjectData {
    /// Create object data with the builtin prototype and no own properties
    pub fn new(kind: ObjectKind) -> Self {
        ObjectData {
            kind,
            prototype: Prototype::Builtin,
            properties: Vec::new(),
        }
    }

    /// The constructor name, `None` for null-prototype objects
    pub fn constructor_name(&self) -> Option<&str> {
        match &self.prototype {
            Prototype::Null => None,
            Prototype::Builtin => Some(self.kind.builtin_constructor()),
            Prototype::Class(class) => Some(class.name.as_str()),
        }
    }

    /// Find an own property by key
    pub fn property(&self, key: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.key == key)
    }

    /// Define or overwrite an own property
    pub fn define(&mut self, key: &str, value: Value, enumerable: bool) {
        match self.properties.iter_mut().find(|p| p.key == key) {
            Some(existing) => {
                existing.value = value;
                existing.enumerable = enumerable;
            }
            None => self.properties.push(Property {
                key: key.to_string(),
                value,
                enumerable,
            }),
        }
    }

    /// Own enumerable property values in insertion order
    pub fn enumerable_values(&self) -> impl Iterator<Item = &Value> {
        self.properties.iter().filter(|p| p.enumerable).map(|p| &p.value)
    }

    /// Whether `key` is reachable through the prototype chain
    pub fn inherits(&self, key: &str) -> bool {
        match &self.prototype {
            Prototype::Null => false,
            Prototype::Builtin => {
                self.kind.builtin_members().contains(&key) || OBJECT_PROTOTYPE_MEMBERS.contains(&key)
            }
            Prototype::Class(class) => {
                class.has_member(key)
                    || self.kind.builtin_members().contains(&key)
                    || OBJECT_PROTOTYPE_MEMBERS.contains(&key)
            }
        }
    }
}
