// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Anchored offsets: "last 2 months", "next year", "the day after tomorrow".
//!
//! An anchored result is the offset result truncated to the canonical start
//! of its domain, so "last month" on 2012-04-16 is 2012-03-01 00:00:00
//! rather than 2012-03-16 at the current time of day.

use tracing::debug;

use crate::clock::Clock;
use crate::config::OffsetOptions;
use crate::domain::{Direction, Domain};
use crate::engine::{offset, offset_with};
use crate::error::{Result, TravelError};
use crate::CivilTime;

/// Anchors on the first days of a month are moved this far into the month
/// before a Month offset.
const MONTH_START_NUDGE_DAYS: u32 = 3;

/// Offset `anchor` and snap the result to the start of `domain`.
///
/// ```
/// use caltravel::{anchored, CivilTime, Direction, Domain};
///
/// let anchor = CivilTime::from_ymd(2011, 3, 5).unwrap();
/// let start = anchored(Direction::Past, 2, Domain::Month, anchor).unwrap();
/// assert_eq!(start, CivilTime::from_ymd(2011, 1, 1).unwrap());
/// ```
///
/// # Errors
///
/// [`TravelError::UnanchorableDomain`] for [`Domain::Hour`], and
/// [`TravelError::YearOutOfRange`] if the result year does not fit.
pub fn anchored(
    direction: Direction,
    magnitude: u32,
    domain: Domain,
    anchor: CivilTime,
) -> Result<CivilTime> {
    anchored_with(direction, magnitude, domain, anchor, &OffsetOptions::default())
}

/// [`anchored`] relative to the clock's current time.
pub fn anchored_now<C: Clock + ?Sized>(
    direction: Direction,
    magnitude: u32,
    domain: Domain,
    clock: &C,
) -> Result<CivilTime> {
    anchored(direction, magnitude, domain, clock.now())
}

fn anchored_with(
    direction: Direction,
    magnitude: u32,
    domain: Domain,
    anchor: CivilTime,
    options: &OffsetOptions,
) -> Result<CivilTime> {
    if !domain.is_anchorable() {
        return Err(TravelError::UnanchorableDomain { domain });
    }
    let anchor = if domain == Domain::Month && anchor.day() < MONTH_START_NUDGE_DAYS {
        offset(anchor, Direction::Future, MONTH_START_NUDGE_DAYS, Domain::Day)?
    } else {
        anchor
    };
    let target = offset_with(anchor, direction, magnitude, domain, options)?;
    let snapped = target.start_of(domain)?;
    debug!(%anchor, %direction, magnitude, %domain, %snapped, "anchored offset");
    Ok(snapped)
}

/// A one-shot "N domains ago/hence" descriptor.
///
/// Built with [`Traveller::last`] / [`Traveller::next`] (or their aliases),
/// optionally pinned to an explicit anchor, then consumed by one domain
/// accessor.  Without an anchor the accessor asks the clock.
///
/// ```
/// use caltravel::{CivilTime, FixedClock, Traveller};
///
/// let clock = FixedClock::new(CivilTime::new(2012, 4, 16, 5, 32, 16).unwrap());
/// assert_eq!(
///     Traveller::last(2).days(&clock).unwrap(),
///     CivilTime::from_ymd(2012, 4, 14).unwrap()
/// );
/// assert_eq!(
///     Traveller::next(1).years(&clock).unwrap(),
///     CivilTime::from_ymd(2013, 1, 1).unwrap()
/// );
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[must_use = "a Traveller does nothing until a domain accessor consumes it"]
pub struct Traveller {
    direction: Direction,
    magnitude: u32,
    anchor: Option<CivilTime>,
    options: OffsetOptions,
}

impl Traveller {
    pub const fn new(direction: Direction, magnitude: u32) -> Self {
        Self {
            direction,
            magnitude,
            anchor: None,
            options: OffsetOptions::new(),
        }
    }

    /// `magnitude` domains into the past.
    pub const fn last(magnitude: u32) -> Self {
        Self::new(Direction::Past, magnitude)
    }

    /// Alias of [`Traveller::last`].
    pub const fn past(magnitude: u32) -> Self {
        Self::last(magnitude)
    }

    /// `magnitude` domains into the future.
    pub const fn next(magnitude: u32) -> Self {
        Self::new(Direction::Future, magnitude)
    }

    /// Alias of [`Traveller::next`].
    pub const fn coming(magnitude: u32) -> Self {
        Self::next(magnitude)
    }

    /// Resolve relative to `anchor` instead of the clock.
    pub const fn relative_to(mut self, anchor: CivilTime) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Use `options` for the underlying offset.
    ///
    /// `zero_time` has no visible effect here, every anchored result is
    /// already at midnight.
    pub const fn with_options(mut self, options: OffsetOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub const fn magnitude(&self) -> u32 {
        self.magnitude
    }

    #[inline]
    pub const fn anchor(&self) -> Option<CivilTime> {
        self.anchor
    }

    /// Resolve against `domain`, consuming the descriptor.
    ///
    /// The clock is only read when no explicit anchor was given.
    pub fn resolve<C: Clock + ?Sized>(self, domain: Domain, clock: &C) -> Result<CivilTime> {
        let anchor = match self.anchor {
            Some(anchor) => anchor,
            None => clock.now(),
        };
        anchored_with(
            self.direction,
            self.magnitude,
            domain,
            anchor,
            &self.options,
        )
    }

    /// Start of the resolved day.
    pub fn days<C: Clock + ?Sized>(self, clock: &C) -> Result<CivilTime> {
        self.resolve(Domain::Day, clock)
    }

    /// Start of the day `7 × magnitude` days away.
    pub fn weeks<C: Clock + ?Sized>(self, clock: &C) -> Result<CivilTime> {
        self.resolve(Domain::Week, clock)
    }

    /// First day of the resolved month.
    pub fn months<C: Clock + ?Sized>(self, clock: &C) -> Result<CivilTime> {
        self.resolve(Domain::Month, clock)
    }

    /// January 1st of the resolved year.
    pub fn years<C: Clock + ?Sized>(self, clock: &C) -> Result<CivilTime> {
        self.resolve(Domain::Year, clock)
    }
}
