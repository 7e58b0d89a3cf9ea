// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Request vocabulary: the unit an offset is expressed in, its direction,
//! and the `(magnitude, domain)` pair that replaces numeric sugar such as
//! `3.days.ago`.
//!
//! | Domain | Wraps across | Canonical start |
//! |--------|--------------|-----------------|
//! | [`Domain::Hour`] | days (24 h) | — |
//! | [`Domain::Day`] | months of 28–31 days | midnight |
//! | [`Domain::Week`] | months (7 days each) | midnight |
//! | [`Domain::Month`] | years (12 months) | 1st of month |
//! | [`Domain::Year`] | — | January 1st |

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::config::OffsetOptions;
use crate::engine;
use crate::error::Result;
use crate::CivilTime;

/// The unit of time an offset is expressed in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Domain {
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Domain {
    /// Every domain, finest first.
    pub const ALL: [Domain; 5] = [
        Domain::Hour,
        Domain::Day,
        Domain::Week,
        Domain::Month,
        Domain::Year,
    ];

    /// Lower-case singular label (`"hour"`, `"day"`, ...).
    pub const fn label(self) -> &'static str {
        match self {
            Domain::Hour => "hour",
            Domain::Day => "day",
            Domain::Week => "week",
            Domain::Month => "month",
            Domain::Year => "year",
        }
    }

    /// Whether results in this domain can be snapped to a canonical start.
    #[inline]
    pub const fn is_anchorable(self) -> bool {
        !matches!(self, Domain::Hour)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sign of an offset request.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Towards earlier time-points ("ago", "last").
    Past,
    /// Towards later time-points ("hence", "next").
    Future,
}

impl Direction {
    /// `-1` for [`Direction::Past`], `+1` for [`Direction::Future`].
    #[inline]
    pub const fn signum(self) -> i64 {
        match self {
            Direction::Past => -1,
            Direction::Future => 1,
        }
    }

    /// The opposite direction.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Direction::Past => Direction::Future,
            Direction::Future => Direction::Past,
        }
    }

    /// Fold a signed magnitude into a direction and an absolute magnitude.
    ///
    /// Negative values point to the past; zero counts as the future, which
    /// is irrelevant since a zero offset is the identity either way.
    ///
    /// ```
    /// use caltravel::Direction;
    ///
    /// assert_eq!(Direction::split_signed(-3), (Direction::Past, 3));
    /// assert_eq!(Direction::split_signed(4), (Direction::Future, 4));
    /// ```
    pub const fn split_signed(value: i32) -> (Direction, u32) {
        if value < 0 {
            (Direction::Past, value.unsigned_abs())
        } else {
            (Direction::Future, value as u32)
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Past => f.write_str("ago"),
            Direction::Future => f.write_str("hence"),
        }
    }
}

/// An unsigned magnitude tagged with the domain it counts.
///
/// ```
/// use caltravel::{CivilTime, Offset};
///
/// let anchor = CivilTime::from_ymd(2012, 6, 29).unwrap();
/// let later = Offset::days(4).hence(anchor).unwrap();
/// assert_eq!(later, CivilTime::from_ymd(2012, 7, 3).unwrap());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Offset {
    magnitude: u32,
    domain: Domain,
}

impl Offset {
    #[inline]
    pub const fn new(magnitude: u32, domain: Domain) -> Self {
        Self { magnitude, domain }
    }

    #[inline]
    pub const fn hours(magnitude: u32) -> Self {
        Self::new(magnitude, Domain::Hour)
    }

    #[inline]
    pub const fn days(magnitude: u32) -> Self {
        Self::new(magnitude, Domain::Day)
    }

    #[inline]
    pub const fn weeks(magnitude: u32) -> Self {
        Self::new(magnitude, Domain::Week)
    }

    #[inline]
    pub const fn months(magnitude: u32) -> Self {
        Self::new(magnitude, Domain::Month)
    }

    #[inline]
    pub const fn years(magnitude: u32) -> Self {
        Self::new(magnitude, Domain::Year)
    }

    /// Build from a signed count, folding the sign into a [`Direction`].
    ///
    /// ```
    /// use caltravel::{Direction, Domain, Offset};
    ///
    /// let (direction, offset) = Offset::signed(-2, Domain::Day);
    /// assert_eq!((direction, offset), (Direction::Past, Offset::days(2)));
    /// ```
    pub const fn signed(value: i32, domain: Domain) -> (Direction, Self) {
        let (direction, magnitude) = Direction::split_signed(value);
        (direction, Self::new(magnitude, domain))
    }

    #[inline]
    pub const fn magnitude(&self) -> u32 {
        self.magnitude
    }

    #[inline]
    pub const fn domain(&self) -> Domain {
        self.domain
    }

    /// Resolve this offset from `anchor` in `direction` with default options.
    pub fn apply(self, direction: Direction, anchor: CivilTime) -> Result<CivilTime> {
        engine::offset(anchor, direction, self.magnitude, self.domain)
    }

    /// Resolve this offset with explicit options.
    pub fn apply_with(
        self,
        direction: Direction,
        anchor: CivilTime,
        options: &OffsetOptions,
    ) -> Result<CivilTime> {
        engine::offset_with(anchor, direction, self.magnitude, self.domain, options)
    }

    /// This offset before `anchor`.
    #[inline]
    pub fn ago(self, anchor: CivilTime) -> Result<CivilTime> {
        self.apply(Direction::Past, anchor)
    }

    /// This offset after `anchor`.
    #[inline]
    pub fn hence(self, anchor: CivilTime) -> Result<CivilTime> {
        self.apply(Direction::Future, anchor)
    }

    /// This offset before the clock's current time.
    pub fn ago_now<C: Clock + ?Sized>(self, clock: &C) -> Result<CivilTime> {
        self.ago(clock.now())
    }

    /// This offset after the clock's current time.
    pub fn hence_now<C: Clock + ?Sized>(self, clock: &C) -> Result<CivilTime> {
        self.hence(clock.now())
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.magnitude == 1 { "" } else { "s" };
        write!(f, "{} {}{}", self.magnitude, self.domain, plural)
    }
}
