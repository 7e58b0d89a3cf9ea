// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil time-point on the proleptic Gregorian calendar.
//!
//! [`CivilTime`] is the value type every operation in the crate consumes
//! and produces: six civil fields, second precision, no time zone.  It is
//! always normalized: the day is valid for its `(year, month)` and the
//! time of day is within `00:00:00..=23:59:59`, because every constructor
//! validates, and the offset engine only ever builds values it has already
//! resolved against the calendar.
//!
//! Ordering is chronological; equality is field-wise.  Interop with
//! `chrono` goes through [`NaiveDateTime`] and `DateTime<Utc>`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::calendar::{days_from_civil, days_in_month};
use crate::domain::Domain;
use crate::error::{Result, TravelError};

/// A normalized `(year, month, day, hour, minute, second)` time-point.
///
/// Field order is chronological significance, so the derived ordering is
/// chronological ordering.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCivilTime"))]
pub struct CivilTime {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

impl CivilTime {
    // ── constructors ──────────────────────────────────────────────────

    /// Create a validated time-point.
    ///
    /// # Errors
    ///
    /// [`TravelError::InvalidMonth`] if `month` is not in 1..=12,
    /// [`TravelError::InvalidDay`] if `day` is not valid for the month,
    /// [`TravelError::InvalidTime`] if the time of day is out of range.
    ///
    /// ```
    /// use caltravel::{CivilTime, TravelError};
    ///
    /// assert!(CivilTime::new(2012, 2, 29, 0, 0, 0).is_ok());
    /// assert!(matches!(
    ///     CivilTime::new(2011, 2, 29, 0, 0, 0),
    ///     Err(TravelError::InvalidDay { max_day: 28, .. })
    /// ));
    /// ```
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(TravelError::InvalidMonth { month });
        }
        let max_day = days_in_month(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(TravelError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        if hour > 23 || minute > 59 || second > 59 {
            return Err(TravelError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self::from_fields(year, month, day, hour, minute, second))
    }

    /// Midnight of the given date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Build from fields the caller has already resolved against the
    /// calendar, checking only that the year fits.
    pub(crate) fn resolved(
        year: i64,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        let year = i32::try_from(year).map_err(|_| TravelError::YearOutOfRange { year })?;
        debug_assert!((1..=12).contains(&month));
        debug_assert!((1..=days_in_month(year, month)).contains(&day));
        Ok(Self::from_fields(year, month, day, hour, minute, second))
    }

    const fn from_fields(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Self {
        Self {
            year,
            month: month as u8,
            day: day as u8,
            hour: hour as u8,
            minute: minute as u8,
            second: second as u8,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month of the year (1..=12).
    #[inline]
    pub const fn month(&self) -> u32 {
        self.month as u32
    }

    /// Day of the month (1..=31).
    #[inline]
    pub const fn day(&self) -> u32 {
        self.day as u32
    }

    #[inline]
    pub const fn hour(&self) -> u32 {
        self.hour as u32
    }

    #[inline]
    pub const fn minute(&self) -> u32 {
        self.minute as u32
    }

    #[inline]
    pub const fn second(&self) -> u32 {
        self.second as u32
    }

    /// Length of this time-point's month.
    #[inline]
    pub const fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month as u32)
    }

    /// Seconds since midnight.
    #[inline]
    pub const fn seconds_of_day(&self) -> u32 {
        self.hour as u32 * 3_600 + self.minute as u32 * 60 + self.second as u32
    }

    /// Days since 1970-01-01 (negative before).
    #[inline]
    pub(crate) const fn day_number(&self) -> i64 {
        days_from_civil(self.year as i64, self.month as u32, self.day as u32)
    }

    // ── snapping ──────────────────────────────────────────────────────

    /// Midnight of the same date.
    #[inline]
    pub const fn start_of_day(&self) -> Self {
        Self::from_fields(self.year, self.month as u32, self.day as u32, 0, 0, 0)
    }

    /// Truncate to the canonical start of `domain`.
    ///
    /// Day and Week snap to midnight, Month to the 1st, Year to January 1st.
    ///
    /// # Errors
    ///
    /// [`TravelError::UnanchorableDomain`] for [`Domain::Hour`].
    pub fn start_of(&self, domain: Domain) -> Result<Self> {
        match domain {
            Domain::Hour => Err(TravelError::UnanchorableDomain { domain }),
            Domain::Day | Domain::Week => Ok(self.start_of_day()),
            Domain::Month => Ok(Self::from_fields(self.year, self.month as u32, 1, 0, 0, 0)),
            Domain::Year => Ok(Self::from_fields(self.year, 1, 1, 0, 0, 0)),
        }
    }

    // ── chrono helpers ────────────────────────────────────────────────

    /// Convert to a `chrono::NaiveDateTime`.
    ///
    /// Returns `None` if the year falls outside chrono's representable range.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month(), self.day())?.and_hms_opt(
            self.hour(),
            self.minute(),
            self.second(),
        )
    }

    /// Convert to a `chrono::DateTime<Utc>`, reading the fields as UTC.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        self.to_naive().map(|naive| naive.and_utc())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Generic trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── From chrono ───────────────────────────────────────────────────────────

impl From<NaiveDateTime> for CivilTime {
    /// Sub-second precision is dropped; a leap second reads as `:59`.
    fn from(value: NaiveDateTime) -> Self {
        Self::from_fields(
            value.year(),
            value.month(),
            value.day(),
            value.hour(),
            value.minute(),
            value.second(),
        )
    }
}

impl From<NaiveDate> for CivilTime {
    fn from(value: NaiveDate) -> Self {
        Self::from_fields(value.year(), value.month(), value.day(), 0, 0, 0)
    }
}

impl From<DateTime<Utc>> for CivilTime {
    fn from(value: DateTime<Utc>) -> Self {
        value.naive_utc().into()
    }
}

// ── Display / FromStr ─────────────────────────────────────────────────────

impl fmt::Display for CivilTime {
    /// `YYYY-MM-DD HH:MM:SS`; years outside 0..=9999 carry a sign.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..=9999).contains(&self.year) {
            write!(f, "{:04}", self.year)?;
        } else {
            write!(f, "{:+05}", self.year)?;
        }
        write!(
            f,
            "-{:02}-{:02} {:02}:{:02}:{:02}",
            self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl FromStr for CivilTime {
    type Err = TravelError;

    /// Accepts `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` and `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let spaced = match NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
            Ok(naive) => return Ok(naive.into()),
            Err(err) => err,
        };
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Ok(naive.into());
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self::from)
            .map_err(|_| TravelError::Parse(spaced))
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

/// Unvalidated field set; deserialization goes through [`CivilTime::new`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawCivilTime {
    year: i32,
    month: u32,
    day: u32,
    #[serde(default)]
    hour: u32,
    #[serde(default)]
    minute: u32,
    #[serde(default)]
    second: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCivilTime> for CivilTime {
    type Error = TravelError;

    fn try_from(raw: RawCivilTime) -> Result<Self> {
        Self::new(raw.year, raw.month, raw.day, raw.hour, raw.minute, raw.second)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
