//! Contract tests for is_equal and does_match

use assertions::*;
use core_types::{DateValue, Value};

fn regexp(pattern: &str, flags: &str) -> Value {
    Value::regexp(pattern, flags).unwrap()
}

#[cfg(test)]
mod is_equal_tests {
    use super::*;

    #[test]
    fn test_primitives_compare_strictly() {
        assert!(is_equal(&Value::from(1), &Value::from(1)));
        assert!(!is_equal(&Value::from(1), &Value::from("1")));
        assert!(is_equal(&Value::from(0.0), &Value::from(-0.0)));
        assert!(is_equal(&Value::Null, &Value::Null));
        assert!(!is_equal(&Value::Null, &Value::Undefined));
        assert!(is_equal(&Value::bigint(5), &Value::bigint(5)));
    }

    #[test]
    fn test_nan_equals_itself() {
        let nan = Value::from(f64::NAN);
        assert!(is_equal(&nan, &nan));
        assert!(is_equal(&nan, &Value::from(f64::NAN)));
    }

    #[test]
    fn test_objects_compare_by_identity() {
        let obj = Value::object();
        assert!(is_equal(&obj, &obj.clone()));
        assert!(!is_equal(&Value::object(), &Value::object()));
        assert!(!is_equal(&Value::array(), &Value::array()));
    }

    #[test]
    fn test_dates_compare_by_instant() {
        let a = Value::date(DateValue::parse("2019-01-03T04:20:01.010Z"));
        let b = Value::date(DateValue::from_utc(2019, 0, 3, 4, 20, 1, 10));
        let c = Value::date(DateValue::from_utc(2019, 0, 3, 4, 20, 1, 11));
        assert!(is_equal(&a, &b));
        assert!(!is_equal(&a, &c));
    }

    #[test]
    fn test_date_is_not_equal_to_its_timestamp() {
        let date = Value::date(DateValue::from_timestamp(0.0));
        assert!(!is_equal(&date, &Value::from(0)));
    }

    #[test]
    fn test_is_equal_to_curried() {
        let is_foo = is_equal_to(Value::from("foo"));
        assert!(is_foo(&Value::from("foo")));
        assert!(!is_foo(&Value::from("bar")));
    }
}

#[cfg(test)]
mod does_match_tests {
    use super::*;

    #[test]
    fn test_pattern_matches() {
        assert!(does_match(&regexp("^FOO", "i"), &Value::from("foo")));
        assert!(!does_match(&regexp("^FOO", ""), &Value::from("foo")));
        assert!(does_match(&regexp("^1", ""), &Value::from(123)));
    }

    #[test]
    fn test_substring_matches() {
        assert!(does_match(&Value::from("oba"), &Value::from("foobar")));
        assert!(!does_match(&Value::from("xyz"), &Value::from("foobar")));
        assert!(does_match(&Value::from("oo"), &Value::boxed_string("foo")));
    }

    #[test]
    fn test_numeric_matcher_against_text() {
        assert!(does_match(&Value::from(2), &Value::from("a2c")));
    }

    #[test]
    fn test_array_containment() {
        let list = Value::array_from(vec![Value::from(1), Value::from(2)]);
        assert!(does_match(&Value::from(1), &list));
        assert!(!does_match(&Value::from(3), &list));
        assert!(!does_match(&Value::from("1"), &list));
    }

    #[test]
    fn test_nan_matches_nan_elements() {
        let list = Value::array_from(vec![Value::from(f64::NAN)]);
        assert!(does_match(&Value::from(f64::NAN), &list));
    }

    #[test]
    fn test_valid_date_matches_by_iso_string() {
        let date = Value::date(DateValue::parse("2019-01-03T04:20:01.010Z"));
        assert!(does_match(&Value::from("2019-01-03"), &date));
        assert!(does_match(&regexp("^2019-01", ""), &date));
        assert!(!does_match(&Value::from("2020"), &date));
    }

    #[test]
    fn test_invalid_date_has_nothing_to_match() {
        let date = Value::date(DateValue::invalid());
        assert!(!does_match(&Value::from("Invalid"), &date));
    }

    #[test]
    fn test_other_values_never_match() {
        assert!(!does_match(&Value::from(1), &Value::from(12)));
        assert!(!does_match(&Value::from("a"), &Value::object()));
        assert!(!does_match(&Value::from("a"), &Value::Undefined));
    }

    #[test]
    fn test_matches_curried() {
        let has_digits = matches(regexp("\\d+", ""));
        assert!(has_digits(&Value::from("abc123")));
        assert!(!has_digits(&Value::from("abc")));
    }
}
