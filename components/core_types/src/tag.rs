//! Canonical type tags
//!
//! A [`Tag`] is the category a value belongs to independent of how it was
//! constructed: a boxed string is still `String`, a subclass of `Map` is still
//! `Map`. Every predicate classifies through the tag so that the rules stay
//! consistent across the library.

use std::fmt;

/// The canonical category of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// The absent value
    Undefined,
    /// null
    Null,
    /// Boolean primitive or boxed boolean
    Boolean,
    /// Number primitive (including NaN) or boxed number
    Number,
    /// Arbitrary precision integer
    BigInt,
    /// String primitive or boxed string
    String,
    /// Symbol
    Symbol,
    /// Plain function or class
    Function,
    /// async function
    AsyncFunction,
    /// function*
    GeneratorFunction,
    /// async function*
    AsyncGeneratorFunction,
    /// Array
    Array,
    /// Date, valid or not
    Date,
    /// Regular expression
    RegExp,
    /// Map
    Map,
    /// WeakMap
    WeakMap,
    /// Set
    Set,
    /// WeakSet
    WeakSet,
    /// Error object
    Error,
    /// Any other object
    Object,
}

impl Tag {
    /// The tag name as reported by `Object.prototype.toString`
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Undefined => "Undefined",
            Tag::Null => "Null",
            Tag::Boolean => "Boolean",
            Tag::Number => "Number",
            Tag::BigInt => "BigInt",
            Tag::String => "String",
            Tag::Symbol => "Symbol",
            Tag::Function => "Function",
            Tag::AsyncFunction => "AsyncFunction",
            Tag::GeneratorFunction => "GeneratorFunction",
            Tag::AsyncGeneratorFunction => "AsyncGeneratorFunction",
            Tag::Array => "Array",
            Tag::Date => "Date",
            Tag::RegExp => "RegExp",
            Tag::Map => "Map",
            Tag::WeakMap => "WeakMap",
            Tag::Set => "Set",
            Tag::WeakSet => "WeakSet",
            Tag::Error => "Error",
            Tag::Object => "Object",
        }
    }

    /// Whether values with this tag are callable
    pub fn is_callable(&self) -> bool {
        matches!(
            self,
            Tag::Function | Tag::AsyncFunction | Tag::GeneratorFunction | Tag::AsyncGeneratorFunction
        )
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[object {}]", self.name())
    }
}
