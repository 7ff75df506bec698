//! Canonical calendar-day keys.
//!
//! A [`DayKey`] is the zero-padded `YYYY-MM-DD` rendering of a local calendar
//! date. Keys compare lexicographically, which coincides with chronological
//! order, so they double as the ledger's sort key. Two dates are "the same
//! day" iff their keys are equal.
//!
//! Keys are derived from the local calendar date, not a UTC-shifted instant,
//! so entries logged near midnight land in the intuitively correct day.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::ValidationError;

const KEY_FORMAT: &str = "%Y-%m-%d";

/// Canonical calendar-date string used as the ledger's grouping key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DayKey(String);

// Deserialization validates the canonical shape so a corrupted persisted
// ledger is detected at decode time and the caller can fall back to defaults.
impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DayKey::parse(&raw).map_err(de::Error::custom)
    }
}

impl DayKey {
    /// Key for a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        DayKey(date.format(KEY_FORMAT).to_string())
    }

    /// Key for the current local calendar date.
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    /// Parse a key back into a date, rejecting anything that is not a
    /// canonical `YYYY-MM-DD` rendering.
    ///
    /// # Errors
    /// Returns [`ValidationError::BadDayKey`] for malformed or non-canonical
    /// input (e.g. `2024-1-05` or `2024-02-30`).
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let date = NaiveDate::parse_from_str(s, KEY_FORMAT)
            .map_err(|_| ValidationError::BadDayKey(s.to_string()))?;
        let key = Self::from_date(date);
        // parse_from_str accepts unpadded components; round-trip to reject them
        if key.0 != s {
            return Err(ValidationError::BadDayKey(s.to_string()));
        }
        Ok(key)
    }

    /// The calendar date this key encodes.
    pub fn date(&self) -> NaiveDate {
        // Only constructible from a date or via parse, so this cannot fail.
        NaiveDate::parse_from_str(&self.0, KEY_FORMAT).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_today(&self) -> bool {
        *self == Self::today()
    }

    pub fn is_yesterday(&self) -> bool {
        shift_days(Local::now().date_naive(), -1)
            .map(Self::from_date)
            .as_ref()
            == Some(self)
    }

    /// The previous calendar day.
    pub fn prev(&self) -> Option<DayKey> {
        shift_days(self.date(), -1).map(Self::from_date)
    }

    /// The next calendar day, but only while it does not run past today.
    /// Future days cannot be logged, so navigation stops at the current date.
    pub fn next_allowed(&self) -> Option<DayKey> {
        let next = shift_days(self.date(), 1).map(Self::from_date)?;
        if next <= Self::today() {
            Some(next)
        } else {
            None
        }
    }

    /// Human-facing label: "Today", "Yesterday", or a short weekday-month-day
    /// rendering like "Mon, Jan 1".
    pub fn label(&self) -> String {
        if self.is_today() {
            return "Today".to_string();
        }
        if self.is_yesterday() {
            return "Yesterday".to_string();
        }
        let date = self.date();
        format!(
            "{}, {} {}",
            weekday_abbrev(date.weekday()),
            month_abbrev(date.month()),
            date.day()
        )
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Calendar-correct day addition across month and year boundaries.
///
/// Returns `None` only when the result falls outside chrono's representable
/// date range.
pub fn shift_days(date: NaiveDate, n: i64) -> Option<NaiveDate> {
    if n >= 0 {
        date.checked_add_days(Days::new(n as u64))
    } else {
        date.checked_sub_days(Days::new(n.unsigned_abs()))
    }
}

fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}
