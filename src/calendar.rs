// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Proleptic Gregorian calendar utilities.
//!
//! Pure functions with no dependencies on the rest of the crate:
//!
//! | Function | Result |
//! |----------|--------|
//! | [`is_leap_year`] | divisible by 4, and not by 100 unless also by 400 |
//! | [`days_in_month`] | 28–31, February is 29 in leap years |
//! | [`days_in_year`] | 365 or 366 |
//!
//! The crate-private `i64` variants exist so that the offset engine can
//! walk across years before checking that the result fits an `i32`.

/// Number of days in each month of a common year (index 0 unused).
const DAYS_PER_MONTH: [u32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days in one full 400-year Gregorian cycle.
pub(crate) const DAYS_PER_CYCLE: i64 = 146_097;

/// Years in one full Gregorian cycle.
pub(crate) const YEARS_PER_CYCLE: i64 = 400;

pub(crate) const SECONDS_PER_DAY: i64 = 86_400;

/// Whether `year` is a Gregorian leap year.
///
/// ```
/// use caltravel::is_leap_year;
///
/// assert!(is_leap_year(2012));
/// assert!(!is_leap_year(2011));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(2000));
/// ```
#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    leap(year as i64)
}

/// Number of days in `month` (1..=12) of `year`.
///
/// # Panics
///
/// Panics if `month` is outside 1..=12. Validated types such as
/// [`CivilTime`](crate::CivilTime) never pass such a month.
///
/// ```
/// use caltravel::days_in_month;
///
/// assert_eq!(days_in_month(2012, 2), 29);
/// assert_eq!(days_in_month(2011, 2), 28);
/// assert_eq!(days_in_month(2012, 4), 30);
/// ```
#[inline]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    month_length(year as i64, month)
}

/// Number of days in `year`.
#[inline]
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

#[inline]
pub(crate) const fn leap(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[inline]
pub(crate) const fn month_length(year: i64, month: u32) -> u32 {
    assert!(month >= 1 && month <= 12, "month out of range 1..=12");
    if month == 2 && leap(year) {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}

/// The month before `(year, month)`, carrying into the previous year.
#[inline]
pub(crate) const fn previous_month(year: i64, month: u32) -> (i64, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// The month after `(year, month)`, carrying into the next year.
#[inline]
pub(crate) const fn next_month(year: i64, month: u32) -> (i64, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Days since 1970-01-01 for a valid proleptic Gregorian date.
///
/// Era-based day count (Hinnant's `days_from_civil`): the year is shifted
/// so that it starts in March, which puts the leap day at the end.
pub(crate) const fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(YEARS_PER_CYCLE);
    let yoe = y - era * YEARS_PER_CYCLE;
    let m = month as i64;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_CYCLE + doe - 719_468
}
