//! Time windows
//!
//! Look-back windows are half-open on the right: `[now - d, now)`.
//! Forward-looking windows used by order checks are half-open on the
//! left: `(now, now + d]`. Construction never fails and has no side
//! effects.

use chrono::{DateTime, Duration, Utc};

/// Which bound of the interval is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bounds {
    /// `[start, end)`
    ClosedOpen,
    /// `(start, end]`
    OpenClosed,
}

/// An instant interval against which fact times are tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    bounds: Bounds,
}

impl TimeWindow {
    /// `[now - lookback, now)` — the standard freshness window.
    pub fn lookback(now: DateTime<Utc>, lookback: Duration) -> Self {
        Self {
            start: now - lookback,
            end: now,
            bounds: Bounds::ClosedOpen,
        }
    }

    /// Convenience form of [`TimeWindow::lookback`] in whole hours.
    pub fn lookback_hours(now: DateTime<Utc>, hours: i64) -> Self {
        Self::lookback(now, Duration::hours(hours))
    }

    /// `(now, now + lookahead]` — used by forward-looking order checks.
    pub fn lookahead(now: DateTime<Utc>, lookahead: Duration) -> Self {
        Self {
            start: now,
            end: now + lookahead,
            bounds: Bounds::OpenClosed,
        }
    }

    /// `[start, end)` between two known instants, e.g. since ICU
    /// admission.
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            bounds: Bounds::ClosedOpen,
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether an instant falls inside the window.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        match self.bounds {
            Bounds::ClosedOpen => self.start <= instant && instant < self.end,
            Bounds::OpenClosed => self.start < instant && instant <= self.end,
        }
    }
}
