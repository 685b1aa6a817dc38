//! Time interval and availability window models.
//!
//! `TimeInterval` is a booked half-open range [start, end); two intervals
//! overlap iff neither ends at or before the other starts, so touching
//! endpoints do not overlap.
//!
//! `AvailabilityWindow` is a range the user declared bookable. Containment
//! is closed on both ends: an interval that exactly fills a window still
//! fits.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A half-open time interval [start, end).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    /// Interval start (inclusive).
    pub start: NaiveDateTime,
    /// Interval end (exclusive).
    pub end: NaiveDateTime,
}

impl TimeInterval {
    /// Creates an interval from a start time and a workload in minutes.
    pub fn from_workload(start: NaiveDateTime, workload_min: i64) -> Self {
        Self {
            start,
            end: start + Duration::minutes(workload_min),
        }
    }

    /// Interval duration in minutes.
    #[inline]
    pub fn duration_min(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Whether two intervals overlap.
    ///
    /// Half-open semantics: `[9:00, 9:30)` and `[9:30, 10:00)` do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A user-declared bookable time range.
///
/// Supplied once at intake (`end > start` enforced there); the window set
/// never changes during a scheduling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    /// Window start (inclusive).
    pub start: NaiveDateTime,
    /// Window end (inclusive for containment checks).
    pub end: NaiveDateTime,
}

impl AvailabilityWindow {
    /// Creates a new availability window.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Window span in minutes.
    #[inline]
    pub fn span_min(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Whether an interval lies fully within this window.
    pub fn contains(&self, interval: &TimeInterval) -> bool {
        self.start <= interval.start && interval.end <= self.end
    }
}
