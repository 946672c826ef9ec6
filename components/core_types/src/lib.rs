//! Core value types for runtime type inspection.
//!
//! This crate provides the dynamic value model that the assertion library
//! classifies, compares and renders.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of primitives and shared objects
//! - [`Tag`] - Canonical category of a value, independent of subclassing
//! - [`ObjectData`] / [`ObjectKind`] - Object contents and kind
//! - [`Prototype`] / [`ClassInfo`] - Inheritance and constructor names
//! - [`DateValue`], [`RegExpValue`], [`Symbol`] - Builtin payloads
//! - [`ValueError`] - Errors raised while constructing values
//!
//! # Examples
//!
//! ```
//! use core_types::{ClassInfo, Tag, Value};
//!
//! let num = Value::number(42.0);
//! assert!(num.is_truthy());
//! assert_eq!(num.type_of(), "number");
//!
//! let dog = ClassInfo::new("Dog").member("bark").into_ref();
//! let rex = Value::instance(&dog);
//! assert_eq!(rex.tag(), Tag::Object);
//! assert_eq!(rex.constructor_name().as_deref(), Some("Dog"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod date;
mod error;
mod number;
mod object;
mod regexp;
mod symbol;
mod tag;
mod value;

pub use date::DateValue;
pub use error::{ErrorCode, ValueError};
pub use number::{number_to_string, string_to_number};
pub use object::{
    ClassInfo, ClassRef, ErrorData, FunctionData, FunctionKind, ObjectData, ObjectKind, ObjectRef,
    Property, Prototype, OBJECT_PROTOTYPE_MEMBERS,
};
pub use regexp::{RegExpFlags, RegExpValue};
pub use symbol::Symbol;
pub use tag::Tag;
pub use value::Value;
