//! FHIR temporal primitives.
//!
//! Values keep the exact text they were parsed from, so encoding reproduces
//! the input precision (`2024`, `2024-03`, `2024-03-15T10:30:00.250+02:00`).
//! Parsing is strict: the lexical grammar is checked first, then the calendar
//! (no February 30th, no hour 24).

use chrono::{FixedOffset, NaiveDate, NaiveTime, SecondsFormat};
use regex::{Captures, Regex};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {type_name} '{value}': {reason}")]
pub struct PrimitiveError {
    pub type_name: &'static str,
    pub value: String,
    pub reason: &'static str,
}

impl PrimitiveError {
    fn new(type_name: &'static str, value: &str, reason: &'static str) -> Self {
        Self {
            type_name,
            value: value.to_string(),
            reason,
        }
    }
}

/// Finest component present in a temporal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precision {
    Year,
    Month,
    Day,
    Second,
    Fraction,
}

fn date_time_regex() -> &'static Regex {
    static DATE_TIME_RE: OnceLock<Regex> = OnceLock::new();
    DATE_TIME_RE.get_or_init(|| {
        Regex::new(
            r"^(?P<year>\d{4})(?:-(?P<month>\d{2})(?:-(?P<day>\d{2})(?:T(?P<hour>\d{2}):(?P<minute>\d{2}):(?P<second>\d{2})(?P<fraction>\.\d{1,9})?(?P<tz>Z|[+-]\d{2}:\d{2})?)?)?)?$",
        )
        .expect("dateTime regex must compile")
    })
}

fn time_regex() -> &'static Regex {
    static TIME_RE: OnceLock<Regex> = OnceLock::new();
    TIME_RE.get_or_init(|| {
        Regex::new(r"^(?P<hour>\d{2}):(?P<minute>\d{2}):(?P<second>\d{2})(?P<fraction>\.\d{1,9})?$")
            .expect("time regex must compile")
    })
}

fn number(caps: &Captures<'_>, name: &str) -> Option<u32> {
    caps.name(name).and_then(|m| m.as_str().parse().ok())
}

/// Checks the calendar and clock components of a matched value and reports
/// its precision.
fn check_components(
    type_name: &'static str,
    input: &str,
    caps: &Captures<'_>,
) -> Result<Precision, PrimitiveError> {
    let err = |reason| PrimitiveError::new(type_name, input, reason);

    let year = number(caps, "year").ok_or_else(|| err("missing year"))?;
    if year == 0 {
        return Err(err("year must be at least 0001"));
    }
    let mut precision = Precision::Year;

    if let Some(month) = number(caps, "month") {
        if !(1..=12).contains(&month) {
            return Err(err("month out of range"));
        }
        precision = Precision::Month;

        if let Some(day) = number(caps, "day") {
            NaiveDate::from_ymd_opt(year as i32, month, day)
                .ok_or_else(|| err("day out of range for month"))?;
            precision = Precision::Day;
        }
    }

    if caps.name("hour").is_some() {
        check_clock(caps).map_err(err)?;
        precision = if caps.name("fraction").is_some() {
            Precision::Fraction
        } else {
            Precision::Second
        };
    }

    if let Some(tz) = caps.name("tz") {
        let tz = tz.as_str();
        if tz != "Z" {
            let hours: u32 = tz[1..3].parse().map_err(|_| err("malformed timezone"))?;
            let minutes: u32 = tz[4..6].parse().map_err(|_| err("malformed timezone"))?;
            if hours > 14 || minutes > 59 || (hours == 14 && minutes != 0) {
                return Err(err("timezone offset out of range"));
            }
        }
    }

    Ok(precision)
}

fn check_clock(caps: &Captures<'_>) -> Result<(), &'static str> {
    let hour = number(caps, "hour").ok_or("missing hour")?;
    let minute = number(caps, "minute").ok_or("missing minute")?;
    let second = number(caps, "second").ok_or("missing second")?;
    if hour > 23 {
        return Err("hour out of range");
    }
    if minute > 59 {
        return Err("minute out of range");
    }
    // 60 admits a leap second.
    if second > 60 {
        return Err("second out of range");
    }
    Ok(())
}

macro_rules! temporal_common {
    ($ty:ident) => {
        impl $ty {
            pub fn as_str(&self) -> &str {
                &self.text
            }

            pub fn precision(&self) -> Precision {
                self.precision
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.text)
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = PrimitiveError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.text
            }
        }
    };
}

/// `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Date {
    text: String,
    precision: Precision,
}

temporal_common!(Date);

impl FromStr for Date {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = date_time_regex()
            .captures(s)
            .filter(|c| c.name("hour").is_none() && c.name("tz").is_none())
            .ok_or_else(|| PrimitiveError::new("date", s, "expected YYYY[-MM[-DD]]"))?;
        let precision = check_components("date", s, &caps)?;
        Ok(Self {
            text: s.to_string(),
            precision,
        })
    }
}

impl Date {
    pub fn from_naive(date: NaiveDate) -> Self {
        Self {
            text: date.format("%Y-%m-%d").to_string(),
            precision: Precision::Day,
        }
    }

    /// The calendar day, when the value is precise to the day.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        if self.precision != Precision::Day {
            return None;
        }
        NaiveDate::parse_from_str(&self.text, "%Y-%m-%d").ok()
    }
}

/// `YYYY[-MM[-DD[Thh:mm:ss[.fff][Z|+hh:mm]]]]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateTime {
    text: String,
    precision: Precision,
}

temporal_common!(DateTime);

impl FromStr for DateTime {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = date_time_regex().captures(s).ok_or_else(|| {
            PrimitiveError::new(
                "dateTime",
                s,
                "expected YYYY[-MM[-DD[Thh:mm:ss[.fff][Z|+hh:mm]]]]",
            )
        })?;
        let precision = check_components("dateTime", s, &caps)?;
        Ok(Self {
            text: s.to_string(),
            precision,
        })
    }
}

impl DateTime {
    pub fn from_chrono(value: chrono::DateTime<FixedOffset>) -> Self {
        let text = value.to_rfc3339_opts(SecondsFormat::AutoSi, true);
        let precision = if text.contains('.') {
            Precision::Fraction
        } else {
            Precision::Second
        };
        Self { text, precision }
    }
}

impl From<Date> for DateTime {
    fn from(date: Date) -> Self {
        Self {
            text: date.text,
            precision: date.precision,
        }
    }
}

/// A full timestamp with a mandatory timezone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Instant {
    text: String,
    precision: Precision,
}

temporal_common!(Instant);

impl FromStr for Instant {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = date_time_regex()
            .captures(s)
            .filter(|c| c.name("second").is_some() && c.name("tz").is_some())
            .ok_or_else(|| {
                PrimitiveError::new("instant", s, "expected YYYY-MM-DDThh:mm:ss[.fff](Z|+hh:mm)")
            })?;
        let precision = check_components("instant", s, &caps)?;
        Ok(Self {
            text: s.to_string(),
            precision,
        })
    }
}

impl Instant {
    pub fn from_chrono(value: chrono::DateTime<FixedOffset>) -> Self {
        let text = value.to_rfc3339_opts(SecondsFormat::Millis, true);
        Self {
            text,
            precision: Precision::Fraction,
        }
    }

    pub fn to_chrono(&self) -> Option<chrono::DateTime<FixedOffset>> {
        chrono::DateTime::parse_from_rfc3339(&self.text).ok()
    }
}

/// `hh:mm:ss[.fff]`, a time of day without a date or timezone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Time {
    text: String,
    precision: Precision,
}

temporal_common!(Time);

impl FromStr for Time {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = time_regex()
            .captures(s)
            .ok_or_else(|| PrimitiveError::new("time", s, "expected hh:mm:ss[.fff]"))?;
        check_clock(&caps).map_err(|reason| PrimitiveError::new("time", s, reason))?;
        let precision = if caps.name("fraction").is_some() {
            Precision::Fraction
        } else {
            Precision::Second
        };
        Ok(Self {
            text: s.to_string(),
            precision,
        })
    }
}

impl Time {
    pub fn to_naive(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.text, "%H:%M:%S%.f").ok()
    }
}
