//! Expiry evaluation for annotated resources.
//!
//! A resource opts into cleanup by carrying the [`EXPIRY_ANNOTATION`]. The
//! value is parsed with each of [`EXPIRY_FORMATS`] in order and the first one
//! that matches wins. Timestamps are naive and compared against naive UTC.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;

use crate::managed_resource::Annotations;

pub const EXPIRY_ANNOTATION: &str = "janitor/expires";

/// One accepted layout for the expiry annotation value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryFormat {
    /// `2022-01-01T13:23:54Z`
    DateTimeSeconds,
    /// `2022-01-01T13:23`
    DateTimeMinutes,
    /// `2022-01-01`, read as midnight.
    Date,
}

/// Accepted formats in priority order. Reordering changes behavior.
pub const EXPIRY_FORMATS: [ExpiryFormat; 3] = [
    ExpiryFormat::DateTimeSeconds,
    ExpiryFormat::DateTimeMinutes,
    ExpiryFormat::Date,
];

impl ExpiryFormat {
    pub fn pattern(&self) -> &'static str {
        match self {
            ExpiryFormat::DateTimeSeconds => "%Y-%m-%dT%H:%M:%SZ",
            ExpiryFormat::DateTimeMinutes => "%Y-%m-%dT%H:%M",
            ExpiryFormat::Date => "%Y-%m-%d",
        }
    }

    pub fn example(&self) -> &'static str {
        match self {
            ExpiryFormat::DateTimeSeconds => "2022-01-01T13:23:54Z",
            ExpiryFormat::DateTimeMinutes => "2022-01-01T13:23",
            ExpiryFormat::Date => "2022-01-01",
        }
    }

    /// Strict parse: chrono alone would also take padding, signs and leap seconds.
    pub fn parse(&self, value: &str) -> Option<NaiveDateTime> {
        if !is_plain_timestamp(value) {
            return None;
        }
        let parsed = match self {
            ExpiryFormat::Date => NaiveDate::parse_from_str(value, self.pattern())
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN)),
            _ => NaiveDateTime::parse_from_str(value, self.pattern()).ok(),
        }?;
        (parsed.nanosecond() < 1_000_000_000).then_some(parsed)
    }
}

fn is_plain_timestamp(value: &str) -> bool {
    value.starts_with(|c: char| c.is_ascii_digit())
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '-' | ':' | 'T' | 'Z'))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpiryDecision {
    NoExpiry,
    Pending(NaiveDateTime),
    Expired(NaiveDateTime),
    Invalid(String),
}

impl fmt::Display for ExpiryDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpiryDecision::NoExpiry => write!(f, "no expiry"),
            ExpiryDecision::Pending(at) => write!(f, "expires on {}", at),
            ExpiryDecision::Expired(at) => write!(f, "expired on {}", at),
            ExpiryDecision::Invalid(reason) => write!(f, "invalid expiry: {}", reason),
        }
    }
}

pub fn parse_expiry(value: &str) -> Result<NaiveDateTime, String> {
    EXPIRY_FORMATS
        .iter()
        .find_map(|format| format.parse(value))
        .ok_or_else(|| {
            format!(
                "expiry value \"{}\" does not match format {}, {}, or {}",
                value,
                EXPIRY_FORMATS[0].example(),
                EXPIRY_FORMATS[1].example(),
                EXPIRY_FORMATS[2].example(),
            )
        })
}

/// Decides whether a resource with these annotations is due for deletion at `now`.
///
/// An empty annotation value counts as absent.
pub fn evaluate(annotations: Option<&Annotations>, now: NaiveDateTime) -> ExpiryDecision {
    let value = match annotations.and_then(|a| a.get(EXPIRY_ANNOTATION)) {
        Some(value) if !value.is_empty() => value,
        _ => return ExpiryDecision::NoExpiry,
    };

    match parse_expiry(value) {
        Ok(at) if at <= now => ExpiryDecision::Expired(at),
        Ok(at) => ExpiryDecision::Pending(at),
        Err(reason) => ExpiryDecision::Invalid(reason),
    }
}
