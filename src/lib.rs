// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar-correct relative time.
//!
//! Resolves expressions such as "3 months before this date" or "the start of
//! two weeks from now" to real calendar dates, honoring 28–31-day months,
//! Gregorian leap years and year wraps.  Nothing here approximates a month
//! or a year as a fixed number of seconds.
//!
//! # Core types
//!
//! - [`CivilTime`] — a validated `(year, month, day, hour, minute, second)`.
//! - [`Domain`] and [`Direction`] — the unit and sign of a request.
//! - [`Offset`] — a magnitude tagged with its domain (`Offset::days(3)`).
//! - [`Traveller`] — "last/next N domains", snapped to the period start.
//! - [`Clock`] — where "now" comes from; [`ClockSource`] adds a scoped
//!   fixed-time override.
//! - [`Span`] — elapsed-time summaries between two time-points.
//!
//! # Quick start
//!
//! ```
//! use caltravel::{anchored, offset, CivilTime, Direction, Domain, Offset};
//!
//! let anchor = CivilTime::new(2012, 6, 29, 8, 15, 0).unwrap();
//!
//! // Raw offsets keep the time of day.
//! let later = offset(anchor, Direction::Future, 4, Domain::Day).unwrap();
//! assert_eq!(later, CivilTime::new(2012, 7, 3, 8, 15, 0).unwrap());
//! assert_eq!(Offset::days(4).hence(anchor).unwrap(), later);
//!
//! // Anchored offsets snap to the start of the domain.
//! let start = anchored(Direction::Past, 1, Domain::Year, anchor).unwrap();
//! assert_eq!(start, CivilTime::from_ymd(2011, 1, 1).unwrap());
//! ```
//!
//! # Day overflow
//!
//! Month and Year offsets can land on a day the destination month lacks
//! (Jan 31 + 1 month, Feb 29 + 1 year).  By default the day is clamped to
//! the month's last day; [`OverflowPolicy::Roll`] carries the excess into
//! the next month instead.
//!
//! # Features
//!
//! - `serde` — `Serialize`/`Deserialize` for the value types.

mod calendar;
mod civil;
mod clock;
mod config;
mod domain;
mod engine;
mod error;
mod span;
mod traveller;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{days_in_month, days_in_year, is_leap_year};
pub use civil::CivilTime;
pub use clock::{Clock, ClockSource, FixedClock, SystemClock};
pub use config::{OffsetOptions, OverflowPolicy};
pub use domain::{Direction, Domain, Offset};
pub use engine::{offset, offset_with};
pub use error::{Result, TravelError};
pub use span::Span;
pub use traveller::{anchored, anchored_now, Traveller};
