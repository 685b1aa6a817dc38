//! Calendar slot allocation.
//!
//! The calendar owns the availability windows supplied at intake and a
//! day-keyed map of booked slots. Booking scans each window in input
//! order for the earliest candidate start (5-minute steps) whose
//! hypothetical interval overlaps nothing already booked that day and
//! fits entirely inside a window. A coarse linear scan is fine here:
//! inputs are human-entered schedules, at most dozens of tasks and
//! windows.
//!
//! # Invariants
//! - No two slots in a day bucket overlap.
//! - Every slot lies inside at least one availability window.
//! - No day key maps to an empty bucket (evicted on removal).

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ScheduleError;
use crate::models::{AvailabilityWindow, Task, TimeInterval};

/// Candidate start times advance in steps of this many minutes.
const SCAN_STEP_MIN: i64 = 5;

/// A task booked into a concrete interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookedSlot {
    /// The booked task (owned copy; reorder criteria read its fields).
    pub task: Task,
    /// The occupied interval.
    pub interval: TimeInterval,
}

/// Key to re-sort day buckets by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortCriterion {
    /// Ascending task priority value.
    Priority,
    /// Ascending workload minutes.
    Workload,
    /// Earliest deadline first.
    Deadline,
}

impl FromStr for SortCriterion {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "priority" => Ok(Self::Priority),
            "workload" => Ok(Self::Workload),
            "deadline" => Ok(Self::Deadline),
            other => Err(ScheduleError::InvalidSortCriterion(other.to_string())),
        }
    }
}

/// Availability windows plus booked slots, bucketed by calendar day.
#[derive(Debug, Clone, Default)]
pub struct Calendar {
    availability: Vec<AvailabilityWindow>,
    schedule: BTreeMap<NaiveDate, Vec<BookedSlot>>,
}

impl Calendar {
    /// Creates a calendar over the given availability windows.
    ///
    /// Window order is preserved; the slot search scans windows in the
    /// order supplied here.
    pub fn new(availability: Vec<AvailabilityWindow>) -> Self {
        Self {
            availability,
            schedule: BTreeMap::new(),
        }
    }

    /// The availability windows, in intake order.
    pub fn availability(&self) -> &[AvailabilityWindow] {
        &self.availability
    }

    /// Whether the task could start at `candidate_start`.
    ///
    /// The hypothetical interval must not overlap any slot already booked
    /// on the same calendar day, and must fit inside at least one window.
    pub fn is_available(&self, candidate_start: NaiveDateTime, task: &Task) -> bool {
        let interval = TimeInterval::from_workload(candidate_start, task.workload_min);
        let day = candidate_start.date();

        if let Some(bucket) = self.schedule.get(&day) {
            if bucket.iter().any(|slot| slot.interval.overlaps(&interval)) {
                return false;
            }
        }

        self.availability.iter().any(|w| w.contains(&interval))
    }

    /// Finds the earliest feasible start time for a task.
    ///
    /// Scans each window in intake order, candidate starts advancing in
    /// fixed 5-minute steps until the workload no longer fits before the
    /// window end. Returns `None` when no window has room.
    pub fn find_next_available_slot(&self, task: &Task) -> Option<NaiveDateTime> {
        let workload = task.workload();
        for window in &self.availability {
            let mut candidate = window.start;
            while candidate + workload <= window.end {
                if self.is_available(candidate, task) {
                    return Some(candidate);
                }
                candidate += Duration::minutes(SCAN_STEP_MIN);
            }
        }
        None
    }

    /// Books a task into the earliest feasible slot.
    ///
    /// The interval is appended to its day bucket; buckets are not kept
    /// sorted automatically (see [`Calendar::agenda`] and
    /// [`Calendar::reorder`]).
    ///
    /// # Errors
    /// [`ScheduleError::NoSlotAvailable`] if no window has room. The
    /// calendar is unchanged in that case.
    pub fn book(&mut self, task: &Task) -> Result<TimeInterval, ScheduleError> {
        let Some(start) = self.find_next_available_slot(task) else {
            warn!(task = %task.name, "no free slot large enough");
            return Err(ScheduleError::NoSlotAvailable(task.name.clone()));
        };

        let interval = TimeInterval::from_workload(start, task.workload_min);
        info!(task = %task.name, %start, "booked");
        self.schedule.entry(start.date()).or_default().push(BookedSlot {
            task: task.clone(),
            interval,
        });
        Ok(interval)
    }

    /// Removes every slot booked for the named task.
    ///
    /// Day buckets left empty are evicted. Returns whether any matching
    /// slot was found; an unknown name is a no-op, not an error.
    pub fn remove(&mut self, task_name: &str) -> bool {
        let mut found = false;
        self.schedule.retain(|_, bucket| {
            let before = bucket.len();
            bucket.retain(|slot| slot.task.name != task_name);
            found |= bucket.len() < before;
            !bucket.is_empty()
        });
        found
    }

    /// Re-sorts every day bucket by the given criterion.
    ///
    /// Stable: slots equal under the criterion keep their current
    /// relative order. The set of booked slots is unchanged.
    pub fn reorder(&mut self, criterion: SortCriterion) {
        for bucket in self.schedule.values_mut() {
            match criterion {
                SortCriterion::Priority => bucket.sort_by_key(|s| s.task.priority),
                SortCriterion::Workload => bucket.sort_by_key(|s| s.task.workload_min),
                SortCriterion::Deadline => bucket.sort_by_key(|s| s.task.deadline),
            }
        }
    }

    /// Day-keyed listing of booked slots, each day ordered by start time.
    ///
    /// For presentation; internal bucket order (insertion or last
    /// [`Calendar::reorder`]) is left untouched.
    pub fn agenda(&self) -> Vec<(NaiveDate, Vec<&BookedSlot>)> {
        self.schedule
            .iter()
            .map(|(day, bucket)| {
                let mut slots: Vec<&BookedSlot> = bucket.iter().collect();
                slots.sort_by_key(|s| s.interval.start);
                (*day, slots)
            })
            .collect()
    }

    /// Slots booked on one day, in current bucket order.
    pub fn day(&self, day: NaiveDate) -> &[BookedSlot] {
        self.schedule.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    /// Total number of booked slots.
    pub fn slot_count(&self) -> usize {
        self.schedule.values().map(Vec::len).sum()
    }

    /// Whether nothing is booked.
    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn task(name: &str, workload_min: i64, priority: i32) -> Task {
        Task::new(name, dt(2, 0, 0), workload_min).with_priority(priority)
    }

    fn one_hour_calendar() -> Calendar {
        Calendar::new(vec![AvailabilityWindow::new(dt(1, 9, 0), dt(1, 10, 0))])
    }

    #[test]
    fn test_book_earliest_slot() {
        let mut cal = one_hour_calendar();
        let interval = cal.book(&task("a", 30, 1)).unwrap();
        assert_eq!(interval.start, dt(1, 9, 0));
        assert_eq!(interval.end, dt(1, 9, 30));
    }

    #[test]
    fn test_sequential_bookings_pack_window() {
        let mut cal = one_hour_calendar();
        let a = cal.book(&task("a", 30, 1)).unwrap();
        let b = cal.book(&task("b", 30, 2)).unwrap();
        assert_eq!(a.start, dt(1, 9, 0));
        assert_eq!(b.start, dt(1, 9, 30));
        assert_eq!(b.end, dt(1, 10, 0));
    }

    #[test]
    fn test_workload_exceeding_window_fails() {
        let mut cal = one_hour_calendar();
        let err = cal.book(&task("c", 90, 1)).unwrap_err();
        assert_eq!(err, ScheduleError::NoSlotAvailable("c".into()));
        assert!(cal.is_empty());
    }

    #[test]
    fn test_booked_slots_never_overlap() {
        let mut cal = one_hour_calendar();
        for i in 0..5 {
            let _ = cal.book(&task(&format!("t{i}"), 20, 1));
        }
        let day = dt(1, 9, 0).date();
        let slots = cal.day(day);
        assert_eq!(slots.len(), 3); // only 3 x 20min fit in one hour
        for (i, a) in slots.iter().enumerate() {
            for b in &slots[i + 1..] {
                assert!(!a.interval.overlaps(&b.interval));
            }
        }
    }

    #[test]
    fn test_booking_stays_inside_windows() {
        let mut cal = Calendar::new(vec![
            AvailabilityWindow::new(dt(1, 9, 0), dt(1, 9, 45)),
            AvailabilityWindow::new(dt(1, 14, 0), dt(1, 15, 0)),
        ]);
        cal.book(&task("a", 45, 1)).unwrap();
        let b = cal.book(&task("b", 45, 2)).unwrap();
        // First window is full; b lands in the second.
        assert_eq!(b.start, dt(1, 14, 0));
        for (_, slots) in cal.agenda() {
            for slot in slots {
                assert!(cal
                    .availability()
                    .iter()
                    .any(|w| w.contains(&slot.interval)));
            }
        }
    }

    #[test]
    fn test_second_window_used_in_input_order() {
        // Later-starting window listed first: scan honors input order.
        let mut cal = Calendar::new(vec![
            AvailabilityWindow::new(dt(1, 14, 0), dt(1, 15, 0)),
            AvailabilityWindow::new(dt(1, 9, 0), dt(1, 10, 0)),
        ]);
        let a = cal.book(&task("a", 30, 1)).unwrap();
        assert_eq!(a.start, dt(1, 14, 0));
    }

    #[test]
    fn test_remove_reports_found() {
        let mut cal = one_hour_calendar();
        cal.book(&task("a", 30, 1)).unwrap();
        assert!(cal.remove("a"));
        assert!(!cal.remove("a"));
        assert!(!cal.remove("never-booked"));
    }

    #[test]
    fn test_remove_evicts_empty_day_bucket() {
        let mut cal = one_hour_calendar();
        cal.book(&task("a", 30, 1)).unwrap();
        cal.remove("a");
        assert!(cal.is_empty());
        assert!(cal.agenda().is_empty());
    }

    #[test]
    fn test_remove_then_rebook_reclaims_start() {
        let mut cal = one_hour_calendar();
        let a = cal.book(&task("a", 30, 1)).unwrap();
        cal.book(&task("b", 30, 2)).unwrap();
        cal.remove("a");
        let c = cal.book(&task("c", 30, 3)).unwrap();
        assert_eq!(c.start, a.start);
    }

    #[test]
    fn test_reorder_permutes_without_changing_set() {
        let mut cal = Calendar::new(vec![AvailabilityWindow::new(dt(1, 9, 0), dt(1, 12, 0))]);
        cal.book(&task("slow", 60, 3)).unwrap();
        cal.book(&task("quick", 15, 1)).unwrap();
        cal.book(&task("mid", 30, 2)).unwrap();

        let day = dt(1, 9, 0).date();
        let before: Vec<TimeInterval> = cal.day(day).iter().map(|s| s.interval).collect();

        cal.reorder(SortCriterion::Workload);
        let names: Vec<&str> = cal.day(day).iter().map(|s| s.task.name.as_str()).collect();
        assert_eq!(names, vec!["quick", "mid", "slow"]);

        let mut after: Vec<TimeInterval> = cal.day(day).iter().map(|s| s.interval).collect();
        let mut expected = before;
        expected.sort_by_key(|iv| iv.start);
        after.sort_by_key(|iv| iv.start);
        assert_eq!(after, expected);
    }

    #[test]
    fn test_reorder_by_priority() {
        let mut cal = Calendar::new(vec![AvailabilityWindow::new(dt(1, 9, 0), dt(1, 12, 0))]);
        cal.book(&task("late", 30, 5)).unwrap();
        cal.book(&task("early", 30, 1)).unwrap();
        cal.reorder(SortCriterion::Priority);

        let names: Vec<&str> = cal
            .day(dt(1, 9, 0).date())
            .iter()
            .map(|s| s.task.name.as_str())
            .collect();
        assert_eq!(names, vec!["early", "late"]);
    }

    #[test]
    fn test_sort_criterion_from_str() {
        assert_eq!("priority".parse::<SortCriterion>().unwrap(), SortCriterion::Priority);
        assert_eq!("  Workload ".parse::<SortCriterion>().unwrap(), SortCriterion::Workload);
        assert_eq!("DEADLINE".parse::<SortCriterion>().unwrap(), SortCriterion::Deadline);

        let err = "random".parse::<SortCriterion>().unwrap_err();
        assert_eq!(err, ScheduleError::InvalidSortCriterion("random".into()));
    }

    #[test]
    fn test_agenda_ordered_by_start() {
        let mut cal = Calendar::new(vec![AvailabilityWindow::new(dt(1, 9, 0), dt(1, 12, 0))]);
        cal.book(&task("a", 30, 1)).unwrap();
        cal.book(&task("b", 30, 1)).unwrap();
        cal.reorder(SortCriterion::Deadline); // bucket order irrelevant to agenda

        let agenda = cal.agenda();
        assert_eq!(agenda.len(), 1);
        let starts: Vec<NaiveDateTime> =
            agenda[0].1.iter().map(|s| s.interval.start).collect();
        let mut sorted = starts.clone();
        sorted.sort();
        assert_eq!(starts, sorted);
    }
}
