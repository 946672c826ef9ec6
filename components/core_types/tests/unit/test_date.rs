//! Unit tests for DateValue

use core_types::DateValue;

#[test]
fn test_parse_bare_year() {
    let date = DateValue::parse("1969");
    assert_eq!(date.to_iso_string().as_deref(), Some("1969-01-01T00:00:00.000Z"));
}

#[test]
fn test_parse_year_month() {
    let date = DateValue::parse("2019-02");
    assert_eq!(date.to_iso_string().as_deref(), Some("2019-02-01T00:00:00.000Z"));
    assert!(!DateValue::parse("2019-13").is_valid());
}

#[test]
fn test_parse_full_iso() {
    let date = DateValue::parse("2019-01-03T04:20:01.010Z");
    assert_eq!(date.to_iso_string().as_deref(), Some("2019-01-03T04:20:01.010Z"));
}

#[test]
fn test_parse_with_offset() {
    let date = DateValue::parse("2019-01-03T04:20:01+02:00");
    assert_eq!(date.to_iso_string().as_deref(), Some("2019-01-03T02:20:01.000Z"));
}

#[test]
fn test_parse_date_only() {
    let date = DateValue::parse("1999-12-31");
    assert_eq!(date.time_value(), 946_598_400_000.0);
}

#[test]
fn test_parse_garbage_is_invalid() {
    assert!(!DateValue::parse("invalid").is_valid());
    assert!(!DateValue::parse("").is_valid());
    assert!(DateValue::parse("invalid").time_value().is_nan());
}

#[test]
fn test_from_utc_components() {
    let date = DateValue::from_utc(2019, 0, 3, 4, 20, 1, 10);
    assert_eq!(date.to_iso_string().as_deref(), Some("2019-01-03T04:20:01.010Z"));
    assert!(!DateValue::from_utc(2019, 1, 30, 0, 0, 0, 0).is_valid());
}

#[test]
fn test_timestamp_truncates() {
    assert_eq!(DateValue::from_timestamp(1.9).time_value(), 1.0);
}

#[test]
fn test_now_is_valid() {
    assert!(DateValue::now().is_valid());
}
