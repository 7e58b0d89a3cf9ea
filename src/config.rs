// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Options controlling how the offset engine resolves ambiguous results.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What to do when a Month or Year offset lands on a day the destination
/// month does not have (Jan 31 + 1 month, Feb 29 + 1 year).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OverflowPolicy {
    /// Use the last day of the destination month.
    #[default]
    Clamp,
    /// Carry the excess days into the following month.
    Roll,
}

/// Options for [`offset_with`](crate::offset_with).
///
/// # Example
///
/// ```
/// use caltravel::{offset_with, CivilTime, Direction, Domain, OffsetOptions, OverflowPolicy};
///
/// let options = OffsetOptions::new().with_overflow(OverflowPolicy::Roll);
/// let anchor = CivilTime::from_ymd(2012, 2, 29).unwrap();
/// let next = offset_with(anchor, Direction::Future, 1, Domain::Year, &options).unwrap();
/// assert_eq!(next, CivilTime::from_ymd(2013, 3, 1).unwrap());
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OffsetOptions {
    /// Day resolution for Month and Year offsets.
    pub overflow: OverflowPolicy,
    /// Drop the time of day from every result (midnight of the result date).
    pub zero_time: bool,
}

impl OffsetOptions {
    /// Defaults: `overflow = Clamp`, `zero_time = false`.
    pub const fn new() -> Self {
        Self {
            overflow: OverflowPolicy::Clamp,
            zero_time: false,
        }
    }

    /// Sets the day-overflow policy.
    pub const fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Sets whether results are truncated to midnight.
    pub const fn with_zero_time(mut self, zero_time: bool) -> Self {
        self.zero_time = zero_time;
        self
    }
}
