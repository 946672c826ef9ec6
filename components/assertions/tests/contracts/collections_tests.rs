//! Contract tests for emptiness, containment and key inspection

use assertions::*;
use core_types::{ClassInfo, ClassRef, DateValue, FunctionKind, Value};

/// A class with an instance field, enumerable and hidden own properties,
/// an accessor, a method and a static factory
fn widget_class() -> (ClassRef, Value) {
    let class = ClassInfo::new("Widget").member("bar").member("start").into_ref();
    let ctor = Value::class(&class);
    ctor.define("create", Value::function("create", FunctionKind::Normal), false);
    (class, ctor)
}

fn widget(class: &ClassRef) -> Value {
    let instance = Value::instance(class);
    instance.set("prop", Value::from(1));
    instance.set("obvious", Value::from(2));
    instance.define("needToKnow", Value::from(3), false);
    instance
}

#[cfg(test)]
mod is_empty_tests {
    use super::*;

    #[test]
    fn test_containers() {
        assert!(!is_empty(&Value::array_from(vec![Value::from(1)])));
        assert!(is_empty(&Value::array()));
        assert!(!is_empty(&Value::object_from([("foo", Value::from("bar"))])));
        assert!(is_empty(&Value::object()));
        assert!(!is_empty(&Value::map(vec![(Value::from("foo"), Value::from("bar"))])));
        assert!(is_empty(&Value::map(vec![])));
        assert!(!is_empty(&Value::set_collection(vec![Value::object()])));
        assert!(is_empty(&Value::set_collection(vec![])));
        assert!(!is_empty(&Value::from("foo")));
        assert!(is_empty(&Value::from("")));
    }

    #[test]
    fn test_falsy_values_are_empty() {
        assert!(is_empty(&Value::Null));
        assert!(is_empty(&Value::Undefined));
        assert!(is_empty(&Value::from(f64::NAN)));
        assert!(is_empty(&Value::from(false)));
        assert!(is_empty(&Value::from(0)));
        assert!(is_empty(&Value::bigint(0)));
    }

    #[test]
    fn test_truthy_scalars_are_not_empty() {
        assert!(!is_empty(&Value::from(true)));
        assert!(!is_empty(&Value::from(-1)));
        assert!(!is_empty(&Value::bigint(1)));
        assert!(!is_empty(&Value::symbol(Some("foo"))));
        assert!(!is_empty(&Value::symbol(None)));
        assert!(!is_empty(&Value::date(DateValue::now())));
        assert!(!is_empty(&Value::regexp("^foo", "i").unwrap()));
    }

    #[test]
    fn test_hidden_properties_do_not_count() {
        let obj = Value::object();
        obj.define("hidden", Value::from(1), false);
        assert!(is_empty(&obj));
    }
}

#[cfg(test)]
mod includes_tests {
    use super::*;

    #[test]
    fn test_arrays_and_sets() {
        let key = Value::object();
        assert!(includes(&key, &Value::array_from(vec![Value::from(1), key.clone()])));
        assert!(!includes(&Value::object(), &Value::array_from(vec![key.clone()])));
        assert!(includes(&Value::from("x"), &Value::set_collection(vec![Value::from("x")])));
        assert!(includes(&key, &Value::weak_set(vec![key.clone()])));
    }

    #[test]
    fn test_maps_check_values_and_weak_maps_check_keys() {
        let key = Value::object();
        let map = Value::map(vec![(key.clone(), Value::from("x"))]);
        assert!(includes(&Value::from("x"), &map));
        assert!(!includes(&key, &map));

        let weak = Value::weak_map(vec![(key.clone(), Value::from("x"))]);
        assert!(includes(&key, &weak));
        assert!(!includes(&Value::from("x"), &weak));
    }

    #[test]
    fn test_text() {
        assert!(includes(&Value::from("oo"), &Value::from("foo")));
        assert!(includes(&Value::from("oo"), &Value::boxed_string("foo")));
        assert!(!includes(&Value::from(1), &Value::from("a1")));
    }

    #[test]
    fn test_records_check_enumerable_values() {
        let obj = Value::object_from([("foo", Value::from(1))]);
        assert!(includes(&Value::from(1), &obj));
        assert!(!includes(&Value::from("foo"), &obj));
    }

    #[test]
    fn test_non_containers() {
        assert!(!includes(&Value::from(1), &Value::Null));
        assert!(!includes(&Value::from(1), &Value::from(1)));
        assert!(!includes(&Value::from(1), &Value::date(DateValue::now())));
    }

    #[test]
    fn test_includes_item_curried() {
        let includes_x = includes_item(Value::from("x"));
        assert!(includes_x(&Value::array_from(vec![Value::from("x")])));
        assert!(!includes_x(&Value::Null));
    }
}

#[cfg(test)]
mod key_tests {
    use super::*;

    #[test]
    fn test_has_own_on_instances() {
        let (class, _) = widget_class();
        let instance = widget(&class);
        assert!(has_own("prop", &instance));
        assert!(has_own("needToKnow", &instance));
        assert!(!has_own("start", &instance));
        assert!(!has_own("constructor", &instance));
    }

    #[test]
    fn test_has_own_on_builtins() {
        let list = Value::array_from(vec![Value::from(1)]);
        assert!(has_own("length", &list));
        assert!(has_own("0", &list));
        assert!(!has_own("1", &list));
        assert!(has_own("length", &Value::from("ab")));
        assert!(!has_own("length", &Value::Null));
        assert!(!has_own("toString", &Value::from(1)));
    }

    #[test]
    fn test_has_follows_the_prototype_chain() {
        let (class, ctor) = widget_class();
        let instance = widget(&class);
        let has_start = has_key("start");
        assert!(has("prop", &instance));
        assert!(has("constructor", &instance));
        assert!(has("obvious", &instance));
        assert!(has("needToKnow", &instance));
        assert!(has("bar", &instance));
        assert!(has_start(&instance));
        assert!(!has("foo", &instance));
        assert!(has("create", &ctor));
    }

    #[test]
    fn test_has_on_primitives() {
        assert!(has("length", &Value::from("")));
        assert!(has("toUpperCase", &Value::from("a")));
        assert!(has("valueOf", &Value::from(true)));
        assert!(!has("valueOf", &Value::Undefined));
    }

    #[test]
    fn test_has_own_key_curried() {
        let has_name = has_own_key("name");
        assert!(has_name(&Value::function("f", FunctionKind::Normal)));
        assert!(!has_name(&Value::object()));
    }

    #[test]
    fn test_own_keys() {
        let (class, _) = widget_class();
        assert_eq!(own_keys(&widget(&class)), vec!["prop", "obvious"]);
        assert_eq!(own_keys(&Value::from("ab")), vec!["0", "1"]);

        let list = Value::array_from(vec![Value::from(1), Value::from(2)]);
        list.set("extra", Value::from(3));
        assert_eq!(own_keys(&list), vec!["0", "1", "extra"]);

        assert!(own_keys(&Value::from(1)).is_empty());
        assert!(own_keys(&Value::Null).is_empty());
        assert!(own_keys(&Value::map(vec![(Value::from("a"), Value::from(1))])).is_empty());
    }
}
