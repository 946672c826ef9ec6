//! Unit tests for RegExpValue

use core_types::{RegExpFlags, RegExpValue, ValueError};

#[test]
fn test_ignore_case_flag() {
    let re = RegExpValue::new("^FOO", "i").unwrap();
    assert!(re.test("foo"));
    assert!(re.test("FOOBAR"));
    assert!(!re.test("barfoo"));
}

#[test]
fn test_multiline_flag() {
    let re = RegExpValue::new("^bar", "m").unwrap();
    assert!(re.test("foo\nbar"));
    let single = RegExpValue::new("^bar", "").unwrap();
    assert!(!single.test("foo\nbar"));
}

#[test]
fn test_dot_all_flag() {
    let re = RegExpValue::new("a.b", "s").unwrap();
    assert!(re.test("a\nb"));
}

#[test]
fn test_global_flag_is_stateless() {
    let re = RegExpValue::new("o", "g").unwrap();
    assert!(re.test("foo"));
    assert!(re.test("foo"));
}

#[test]
fn test_flag_errors() {
    assert_eq!(RegExpFlags::parse("x"), Err(ValueError::UnknownFlag('x')));
    assert_eq!(RegExpFlags::parse("ii"), Err(ValueError::DuplicateFlag('i')));
    assert_eq!(RegExpFlags::parse("uv"), Err(ValueError::IncompatibleFlags));
}

#[test]
fn test_flags_are_canonically_ordered() {
    let re = RegExpValue::new("a", "yig").unwrap();
    assert_eq!(re.flags(), "giy");
    assert_eq!(re.to_string(), "/a/giy");
}
