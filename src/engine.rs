// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Relative offset engine.
//!
//! Resolves `(anchor, direction, magnitude, domain)` to a new [`CivilTime`]
//! by walking the calendar, never by adding a fixed number of seconds:
//!
//! - **Hour** carries whole days (a day always has 24 hours) into the Day rule.
//! - **Day** borrows or spends whole months of 28–31 days until the target
//!   day fits inside one month.  **Week** is Day with the magnitude × 7.
//! - **Month** linearizes `(year, month)` into an absolute month index,
//!   offsets it and decomposes it back.
//! - **Year** offsets the year field.
//!
//! Month and Year keep the day of the month; a day the destination month
//! lacks is resolved by the [`OverflowPolicy`] in [`OffsetOptions`].
//! Time of day is preserved by every domain unless
//! [`OffsetOptions::zero_time`] is set.

use tracing::trace;

use crate::calendar::{
    month_length, next_month, previous_month, DAYS_PER_CYCLE, YEARS_PER_CYCLE,
};
use crate::config::{OffsetOptions, OverflowPolicy};
use crate::domain::{Direction, Domain};
use crate::error::Result;
use crate::CivilTime;

/// Resolve an offset with the default [`OffsetOptions`].
///
/// ```
/// use caltravel::{offset, CivilTime, Direction, Domain};
///
/// let anchor = CivilTime::from_ymd(2011, 3, 2).unwrap();
/// let earlier = offset(anchor, Direction::Past, 4, Domain::Day).unwrap();
/// assert_eq!(earlier, CivilTime::from_ymd(2011, 2, 26).unwrap());
/// ```
///
/// # Errors
///
/// [`TravelError::YearOutOfRange`](crate::TravelError::YearOutOfRange) if
/// the result year does not fit an `i32`.
#[inline]
pub fn offset(
    anchor: CivilTime,
    direction: Direction,
    magnitude: u32,
    domain: Domain,
) -> Result<CivilTime> {
    offset_with(anchor, direction, magnitude, domain, &OffsetOptions::default())
}

/// Resolve an offset with explicit options.
#[tracing::instrument(level = "trace", skip(options), fields(overflow = ?options.overflow))]
pub fn offset_with(
    anchor: CivilTime,
    direction: Direction,
    magnitude: u32,
    domain: Domain,
    options: &OffsetOptions,
) -> Result<CivilTime> {
    let delta = direction.signum() * i64::from(magnitude);
    let result = match domain {
        Domain::Hour => shift_hours(anchor, delta),
        Domain::Day => shift_days(anchor, delta),
        Domain::Week => shift_days(anchor, delta * 7),
        Domain::Month => shift_months(anchor, delta, options.overflow),
        Domain::Year => shift_years(anchor, delta, options.overflow),
    }?;
    let result = if options.zero_time {
        result.start_of_day()
    } else {
        result
    };
    trace!(%result, "offset resolved");
    Ok(result)
}

/// A calendar date whose year is widened for intermediate arithmetic.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Ymd {
    year: i64,
    month: u32,
    day: u32,
}

impl Ymd {
    fn of(t: &CivilTime) -> Self {
        Self {
            year: i64::from(t.year()),
            month: t.month(),
            day: t.day(),
        }
    }

    fn with_time_of(self, t: &CivilTime) -> Result<CivilTime> {
        self.with_time(t.hour(), t.minute(), t.second())
    }

    fn with_time(self, hour: u32, minute: u32, second: u32) -> Result<CivilTime> {
        CivilTime::resolved(self.year, self.month, self.day, hour, minute, second)
    }
}

fn shift_hours(anchor: CivilTime, delta: i64) -> Result<CivilTime> {
    let total = i64::from(anchor.hour()) + delta;
    let carry = total.div_euclid(24);
    let hour = total.rem_euclid(24) as u32;
    walk_days(Ymd::of(&anchor), carry).with_time(hour, anchor.minute(), anchor.second())
}

fn shift_days(anchor: CivilTime, delta: i64) -> Result<CivilTime> {
    walk_days(Ymd::of(&anchor), delta).with_time_of(&anchor)
}

fn shift_months(anchor: CivilTime, delta: i64, policy: OverflowPolicy) -> Result<CivilTime> {
    let index = i64::from(anchor.year()) * 12 + i64::from(anchor.month() - 1) + delta;
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    resolve_day(year, month, anchor.day(), policy).with_time_of(&anchor)
}

fn shift_years(anchor: CivilTime, delta: i64, policy: OverflowPolicy) -> Result<CivilTime> {
    let year = i64::from(anchor.year()) + delta;
    resolve_day(year, anchor.month(), anchor.day(), policy).with_time_of(&anchor)
}

/// Move `delta` calendar days from `start`.
///
/// Whole 400-year cycles are skipped first: the Gregorian calendar repeats
/// every 146 097 days, so this lands on the same month and day.  The
/// remainder is walked one month at a time, borrowing the previous month's
/// length while the target day is below 1 and spending the current month's
/// length while it exceeds the month.
fn walk_days(start: Ymd, delta: i64) -> Ymd {
    let cycles = delta / DAYS_PER_CYCLE;
    let mut year = start.year + cycles * YEARS_PER_CYCLE;
    let mut month = start.month;
    let mut target = i64::from(start.day) + delta % DAYS_PER_CYCLE;

    loop {
        let length = i64::from(month_length(year, month));
        if target < 1 {
            (year, month) = previous_month(year, month);
            target += i64::from(month_length(year, month));
        } else if target > length {
            target -= length;
            (year, month) = next_month(year, month);
        } else {
            break;
        }
    }

    Ymd {
        year,
        month,
        day: target as u32,
    }
}

/// Fit `day` into `(year, month)` according to `policy`.
fn resolve_day(year: i64, month: u32, day: u32, policy: OverflowPolicy) -> Ymd {
    let length = month_length(year, month);
    if day <= length {
        return Ymd { year, month, day };
    }
    let last = Ymd {
        year,
        month,
        day: length,
    };
    match policy {
        OverflowPolicy::Clamp => last,
        OverflowPolicy::Roll => walk_days(last, i64::from(day - length)),
    }
}
