//! Date values
//!
//! A date is a time value in milliseconds since the Unix epoch. NaN represents
//! an invalid date, which is still a date (its tag is `Date`) but never equal
//! to anything and rendered as `Invalid Date`.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};

/// Largest time value a date may hold (100,000,000 days either side of the epoch)
const MAX_TIME_VALUE: f64 = 8.64e15;

/// Time value of a date object
#[derive(Debug, Clone, Copy)]
pub struct DateValue {
    /// Milliseconds since epoch, NaN when invalid
    time_value: f64,
}

impl DateValue {
    /// Create a date at the current instant
    pub fn now() -> Self {
        DateValue {
            time_value: Utc::now().timestamp_millis() as f64,
        }
    }

    /// Create a date from milliseconds since epoch
    pub fn from_timestamp(ms: f64) -> Self {
        let time_value = if ms.is_finite() && ms.abs() <= MAX_TIME_VALUE {
            ms.trunc()
        } else {
            f64::NAN
        };
        DateValue { time_value }
    }

    /// Create an invalid date (NaN time value)
    pub fn invalid() -> Self {
        DateValue {
            time_value: f64::NAN,
        }
    }

    /// Create a date from UTC components
    ///
    /// Month is 0-indexed (0 = January, 11 = December). Out of range
    /// components produce an invalid date.
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hours: u32,
        minutes: u32,
        seconds: u32,
        ms: u32,
    ) -> Self {
        month
            .checked_add(1)
            .and_then(|month| NaiveDate::from_ymd_opt(year, month, day))
            .and_then(|date| date.and_hms_milli_opt(hours, minutes, seconds, ms))
            .map(|dt| Self::from_timestamp(Utc.from_utc_datetime(&dt).timestamp_millis() as f64))
            .unwrap_or_else(Self::invalid)
    }

    /// Parse a date string
    ///
    /// Accepts RFC 3339 date-times, ISO 8601 date-times without an offset,
    /// dates (`YYYY-MM-DD`), year-months (`YYYY-MM`) and bare years (`YYYY`).
    /// Forms without an offset are read as UTC. Anything else is an invalid
    /// date.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Self::from_timestamp(dt.timestamp_millis() as f64);
        }

        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
                return Self::from_naive(&dt);
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|dt| Self::from_naive(&dt))
                .unwrap_or_else(Self::invalid);
        }

        let parts: Vec<&str> = s.split('-').collect();
        let numeric = |p: &str| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit());
        match parts.as_slice() {
            [year] if year.len() == 4 && numeric(year) => year
                .parse()
                .map(|y| Self::from_utc(y, 0, 1, 0, 0, 0, 0))
                .unwrap_or_else(|_| Self::invalid()),
            [year, month] if year.len() == 4 && month.len() == 2 && numeric(year) && numeric(month) => {
                match (year.parse::<i32>(), month.parse::<u32>()) {
                    (Ok(y), Ok(m)) if (1..=12).contains(&m) => Self::from_utc(y, m - 1, 1, 0, 0, 0, 0),
                    _ => Self::invalid(),
                }
            }
            _ => Self::invalid(),
        }
    }

    fn from_naive(dt: &NaiveDateTime) -> Self {
        Self::from_timestamp(Utc.from_utc_datetime(dt).timestamp_millis() as f64)
    }

    /// Get the internal time value (milliseconds since epoch)
    pub fn time_value(&self) -> f64 {
        self.time_value
    }

    /// Check if the date is valid (not NaN)
    pub fn is_valid(&self) -> bool {
        !self.time_value.is_nan()
    }

    fn to_utc_datetime(&self) -> Option<DateTime<Utc>> {
        if !self.is_valid() {
            return None;
        }
        DateTime::from_timestamp_millis(self.time_value as i64)
    }

    /// Convert to an ISO 8601 string (`YYYY-MM-DDTHH:mm:ss.sssZ`)
    ///
    /// Returns `None` for an invalid date. Years outside 0..=9999 use the
    /// expanded six digit form with an explicit sign.
    pub fn to_iso_string(&self) -> Option<String> {
        let dt = self.to_utc_datetime()?;
        let year = dt.year();
        let year = if (0..=9999).contains(&year) {
            format!("{:04}", year)
        } else if year < 0 {
            format!("-{:06}", -year)
        } else {
            format!("+{:06}", year)
        };
        Some(format!(
            "{}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            year,
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second(),
            dt.timestamp_subsec_millis()
        ))
    }
}
