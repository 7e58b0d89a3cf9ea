// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for caltravel operations.

use crate::domain::Domain;

/// Error type for all fallible operations in the crate.
///
/// Calendar arithmetic itself is total over valid inputs; every variant
/// here is either a construction-time validation failure or a result that
/// cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TravelError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a day number is zero or exceeds the month's length.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// Year of the rejected date.
        year: i32,
        /// Month of the rejected date.
        month: u32,
        /// The invalid day number that was provided.
        day: u32,
        /// The last valid day of that month.
        max_day: u32,
    },

    /// Returned when an hour, minute or second is out of range.
    #[error("invalid time of day: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime {
        /// Hour component (must be 0..=23).
        hour: u32,
        /// Minute component (must be 0..=59).
        minute: u32,
        /// Second component (must be 0..=59).
        second: u32,
    },

    /// Returned when an anchored operation is asked to snap a domain that
    /// has no canonical start.
    #[error("domain '{domain}' has no canonical start to anchor to")]
    UnanchorableDomain {
        /// The rejected domain.
        domain: Domain,
    },

    /// Returned when a result year does not fit the civil time-point.
    #[error("year {year} is outside the representable range")]
    YearOutOfRange {
        /// The year the computation arrived at.
        year: i64,
    },

    /// Returned when a civil time-point cannot be parsed from text.
    #[error("invalid civil time: {0}")]
    Parse(#[from] chrono::ParseError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TravelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = TravelError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = TravelError::InvalidDay {
            year: 2011,
            month: 2,
            day: 29,
            max_day: 28,
        };
        assert_eq!(err.to_string(), "invalid day: 29 for 2011-02 (max 28)");
    }

    #[test]
    fn error_invalid_time() {
        let err = TravelError::InvalidTime {
            hour: 24,
            minute: 0,
            second: 5,
        };
        assert_eq!(err.to_string(), "invalid time of day: 24:00:05");
    }

    #[test]
    fn error_unanchorable_domain() {
        let err = TravelError::UnanchorableDomain {
            domain: Domain::Hour,
        };
        assert_eq!(
            err.to_string(),
            "domain 'hour' has no canonical start to anchor to"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<TravelError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<TravelError>();
    }
}
