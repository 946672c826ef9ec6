//! Unit tests for object data, prototypes and classes

use core_types::{ClassInfo, FunctionKind, ObjectKind, Value};

#[test]
fn test_constructor_names() {
    assert_eq!(Value::object().constructor_name().as_deref(), Some("Object"));
    assert_eq!(Value::array().constructor_name().as_deref(), Some("Array"));
    assert_eq!(Value::null_prototype_object().constructor_name(), None);
    assert_eq!(Value::from(1).constructor_name().as_deref(), Some("Number"));
    assert_eq!(Value::Undefined.constructor_name(), None);
    assert_eq!(
        Value::function("f", FunctionKind::Async)
            .constructor_name()
            .as_deref(),
        Some("AsyncFunction")
    );
}

#[test]
fn test_class_instance() {
    let widget = ClassInfo::new("Widget")
        .member("start")
        .member("bar")
        .into_ref();
    let instance = Value::instance(&widget);
    instance.set("prop", Value::from(1));
    instance.define("hidden", Value::from(3), false);

    let data = instance.as_object().unwrap();
    assert_eq!(data.constructor_name(), Some("Widget"));
    assert!(data.inherits("start"));
    assert!(data.inherits("constructor"));
    assert!(!data.inherits("prop"));
    assert_eq!(data.enumerable_values().count(), 1);
}

#[test]
fn test_class_statics_live_on_function() {
    let widget = ClassInfo::new("Widget").into_ref();
    let ctor = Value::class(&widget);
    ctor.define("create", Value::function("create", FunctionKind::Normal), false);

    let data = ctor.as_object().unwrap();
    assert!(data.property("create").is_some());
    assert!(matches!(&data.kind, ObjectKind::Function(f) if f.name == "Widget"));
}

#[test]
fn test_objects_are_shared_by_clone() {
    let obj = Value::object();
    let alias = obj.clone();
    alias.set("x", Value::from(1));
    assert_eq!(obj.get("x"), Some(Value::from(1)));
}
