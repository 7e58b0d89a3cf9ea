// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Elapsed-time summaries between two civil time-points.

use std::fmt;

use qtty::{Day, Days, Seconds};

use crate::calendar::SECONDS_PER_DAY;
use crate::domain::{Direction, Domain};
use crate::engine::offset;
use crate::error::Result;
use crate::CivilTime;

/// The stretch of civil time from `start` to `end`.
///
/// `end` may precede `start`; every measurement is then negative.
///
/// # Examples
///
/// ```
/// use caltravel::{CivilTime, Span};
///
/// let span = Span::new(
///     CivilTime::from_ymd(2012, 1, 31).unwrap(),
///     CivilTime::from_ymd(2012, 3, 1).unwrap(),
/// );
/// assert_eq!(span.whole_days(), 30);
/// assert_eq!(span.whole_months(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: CivilTime,
    pub end: CivilTime,
}

impl Span {
    pub const fn new(start: CivilTime, end: CivilTime) -> Self {
        Span { start, end }
    }

    /// The calendar period of `domain` containing `at`.
    ///
    /// Runs from the domain start of `at` to the start one period later. A
    /// week counts seven days from the midnight of `at`.
    ///
    /// ```
    /// use caltravel::{CivilTime, Domain, Span};
    ///
    /// let at = CivilTime::new(2012, 2, 14, 9, 30, 0).unwrap();
    /// let month = Span::enclosing(at, Domain::Month).unwrap();
    /// assert_eq!(month.start, CivilTime::from_ymd(2012, 2, 1).unwrap());
    /// assert_eq!(month.end, CivilTime::from_ymd(2012, 3, 1).unwrap());
    /// ```
    ///
    /// # Errors
    ///
    /// [`TravelError::UnanchorableDomain`](crate::TravelError::UnanchorableDomain)
    /// for [`Domain::Hour`].
    pub fn enclosing(at: CivilTime, domain: Domain) -> Result<Self> {
        let start = at.start_of(domain)?;
        let end = offset(start, Direction::Future, 1, domain)?;
        Ok(Span { start, end })
    }

    /// Whether `at` lies in the half-open range `[start, end)`.
    pub fn contains(&self, at: CivilTime) -> bool {
        self.start <= at && at < self.end
    }

    /// Calendar days between the two dates, ignoring the time of day.
    pub fn whole_days(&self) -> i64 {
        self.end.day_number() - self.start.day_number()
    }

    /// Exact elapsed seconds.
    pub fn duration_seconds(&self) -> i64 {
        self.whole_days() * SECONDS_PER_DAY
            + (i64::from(self.end.seconds_of_day()) - i64::from(self.start.seconds_of_day()))
    }

    /// Elapsed time as a seconds quantity.
    pub fn duration(&self) -> Seconds {
        Seconds::new(self.duration_seconds() as f64)
    }

    /// Elapsed time in fractional days.
    ///
    /// ```
    /// use caltravel::{CivilTime, Span};
    ///
    /// let span = Span::new(
    ///     CivilTime::from_ymd(2012, 4, 16).unwrap(),
    ///     CivilTime::new(2012, 4, 17, 12, 0, 0).unwrap(),
    /// );
    /// assert!((span.duration_days().value() - 1.5).abs() < 1e-12);
    /// ```
    pub fn duration_days(&self) -> Days {
        self.duration().to::<Day>()
    }

    /// Whole calendar months elapsed, on the same clamping rule the engine
    /// uses: Jan 31 to Feb 29 is one month.
    ///
    /// The result is the largest `n` for which stepping `n` months from
    /// `start` does not pass `end` (towards the past when negative).
    pub fn whole_months(&self) -> i64 {
        let (start, end) = (self.start, self.end);
        let months = (i64::from(end.year()) - i64::from(start.year())) * 12
            + (i64::from(end.month()) - i64::from(start.month()));

        // `start` stepped `months` months lands in end's month, here.
        let landed = (start.day().min(end.days_in_month()), start.seconds_of_day());
        let reached = (end.day(), end.seconds_of_day());
        if months > 0 && landed > reached {
            months - 1
        } else if months < 0 && landed < reached {
            months + 1
        } else {
            months
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TravelError;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> CivilTime {
        CivilTime::new(y, mo, d, h, mi, s).unwrap()
    }

    fn ymd(y: i32, mo: u32, d: u32) -> CivilTime {
        CivilTime::from_ymd(y, mo, d).unwrap()
    }

    #[test]
    fn whole_days_ignore_time_of_day() {
        let span = Span::new(at(2012, 2, 28, 23, 59, 59), at(2012, 3, 1, 0, 0, 1));
        assert_eq!(span.whole_days(), 2);
        assert_eq!(span.duration_seconds(), 2 + 24 * 3600);
    }

    #[test]
    fn reversed_span_is_negative() {
        let span = Span::new(ymd(2013, 1, 1), ymd(2012, 1, 1));
        assert_eq!(span.whole_days(), -366);
        assert_eq!(span.duration_seconds(), -366 * 86_400);
        assert_eq!(span.whole_months(), -12);
    }

    #[test]
    fn duration_quantities() {
        let span = Span::new(ymd(2012, 4, 16), at(2012, 4, 17, 12, 0, 0));
        assert_eq!(span.duration(), Seconds::new(129_600.0));
        assert!((span.duration_days().value() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn whole_months_follow_clamping() {
        assert_eq!(Span::new(ymd(2012, 1, 31), ymd(2012, 2, 29)).whole_months(), 1);
        assert_eq!(Span::new(ymd(2012, 1, 31), ymd(2012, 2, 28)).whole_months(), 0);
        assert_eq!(Span::new(ymd(2011, 1, 31), ymd(2011, 2, 28)).whole_months(), 1);
        assert_eq!(
            Span::new(at(2012, 1, 15, 12, 0, 0), at(2012, 3, 15, 11, 59, 59)).whole_months(),
            1
        );
        assert_eq!(
            Span::new(at(2012, 1, 15, 12, 0, 0), at(2012, 3, 15, 12, 0, 0)).whole_months(),
            2
        );
    }

    #[test]
    fn whole_months_backwards() {
        assert_eq!(Span::new(ymd(2012, 3, 31), ymd(2012, 2, 29)).whole_months(), -1);
        assert_eq!(Span::new(ymd(2012, 3, 15), ymd(2012, 2, 16)).whole_months(), 0);
        assert_eq!(Span::new(ymd(2012, 3, 15), ymd(2012, 1, 15)).whole_months(), -2);
    }

    #[test]
    fn enclosing_periods() {
        let t = at(2012, 2, 29, 13, 5, 0);
        let day = Span::enclosing(t, Domain::Day).unwrap();
        assert_eq!((day.start, day.end), (ymd(2012, 2, 29), ymd(2012, 3, 1)));
        assert!(day.contains(t));
        assert!(!day.contains(day.end));

        let week = Span::enclosing(t, Domain::Week).unwrap();
        assert_eq!(week.whole_days(), 7);

        let year = Span::enclosing(t, Domain::Year).unwrap();
        assert_eq!((year.start, year.end), (ymd(2012, 1, 1), ymd(2013, 1, 1)));
        assert_eq!(year.whole_days(), 366);

        assert_eq!(
            Span::enclosing(t, Domain::Hour),
            Err(TravelError::UnanchorableDomain {
                domain: Domain::Hour
            })
        );
    }

    #[test]
    fn display_joins_endpoints() {
        let span = Span::new(ymd(2012, 1, 1), at(2012, 1, 2, 6, 0, 0));
        assert_eq!(span.to_string(), "2012-01-01 00:00:00 to 2012-01-02 06:00:00");
    }
}
