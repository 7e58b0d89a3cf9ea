// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Clock sources for calls that omit an explicit anchor.
//!
//! Everything that defaults to "now" takes a `&impl Clock`, so tests can
//! pass a [`FixedClock`] and production code a [`SystemClock`].  Code that
//! needs a temporary override of a shared clock uses a [`ClockSource`]:
//!
//! ```
//! use caltravel::{CivilTime, Clock, ClockSource, Offset};
//!
//! let clock = ClockSource::new();
//! let frozen = CivilTime::new(2012, 4, 16, 5, 32, 16).unwrap();
//!
//! let yesterday = clock.with_fixed_time(frozen, |clock| {
//!     Offset::days(1).ago_now(clock).unwrap()
//! });
//! assert_eq!(yesterday, CivilTime::new(2012, 4, 15, 5, 32, 16).unwrap());
//! assert_eq!(clock.fixed_time(), None);
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};

use chrono::Utc;
use tracing::debug;

use crate::CivilTime;

/// Supplies the current civil time.
pub trait Clock: Send + Sync {
    fn now(&self) -> CivilTime;
}

/// Live wall-clock time in UTC, truncated to whole seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> CivilTime {
        CivilTime::from(Utc::now())
    }
}

/// A clock frozen at one time-point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedClock(CivilTime);

impl FixedClock {
    #[inline]
    pub const fn new(value: CivilTime) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(&self) -> CivilTime {
        self.0
    }
}

impl Clock for FixedClock {
    fn now(&self) -> CivilTime {
        self.0
    }
}

/// A live clock with a scoped, serialized fixed-time override.
///
/// [`ClockSource::with_fixed_time`] holds the override for exactly the
/// duration of its body and restores the previous state on every exit,
/// including unwinding.  Scopes entered from different threads run one at a
/// time; a scope nested on the same thread shadows the outer value and
/// restores it when it ends.
#[derive(Debug, Default)]
pub struct ClockSource<C: Clock = SystemClock> {
    live: C,
    fixed: Mutex<Option<CivilTime>>,
    scope: Mutex<()>,
    owner: Mutex<Option<ThreadId>>,
}

impl ClockSource<SystemClock> {
    /// A source backed by the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> ClockSource<C> {
    /// A source backed by `live`.
    pub fn with_clock(live: C) -> Self {
        Self {
            live,
            fixed: Mutex::new(None),
            scope: Mutex::new(()),
            owner: Mutex::new(None),
        }
    }

    /// The active override, if a scope is running.
    pub fn fixed_time(&self) -> Option<CivilTime> {
        *lock(&self.fixed)
    }

    /// The underlying live clock.
    pub fn live(&self) -> &C {
        &self.live
    }

    /// Run `body` with [`Clock::now`] pinned to `value`.
    ///
    /// Blocks while another thread is inside its own scope on this source.
    pub fn with_fixed_time<R>(&self, value: CivilTime, body: impl FnOnce(&Self) -> R) -> R {
        let current = thread::current().id();
        let nested = *lock(&self.owner) == Some(current);
        let scope = if nested {
            None
        } else {
            let guard = lock(&self.scope);
            *lock(&self.owner) = Some(current);
            Some(guard)
        };

        let previous = lock(&self.fixed).replace(value);
        debug!(%value, nested, "fixed time engaged");
        let _restore = Restore {
            source: self,
            previous,
            outermost: !nested,
            _scope: scope,
        };
        body(self)
    }
}

impl<C: Clock> Clock for ClockSource<C> {
    fn now(&self) -> CivilTime {
        match self.fixed_time() {
            Some(value) => value,
            None => self.live.now(),
        }
    }
}

/// Puts back the override a scope replaced, then releases the scope lock.
struct Restore<'a, C: Clock> {
    source: &'a ClockSource<C>,
    previous: Option<CivilTime>,
    outermost: bool,
    _scope: Option<MutexGuard<'a, ()>>,
}

impl<C: Clock> Drop for Restore<'_, C> {
    fn drop(&mut self) {
        *lock(&self.source.fixed) = self.previous;
        if self.outermost {
            *lock(&self.source.owner) = None;
        }
        debug!(restored = ?self.previous, "fixed time released");
    }
}

// The guarded values are always left consistent by `Restore`, so a panic
// inside a scope body must not wedge later callers.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
