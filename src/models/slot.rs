//! Exam slot model.
//!
//! A slot is a (calendar date, session start time) pair and is the atomic
//! unit of conflict detection: two exams conflict iff they share a slot and
//! at least one enrolled student. Each exam day offers the same fixed
//! sessions; breaks between exams never shift the session grid.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Fixed daily session start times, in order: 09:00, 11:00, 14:00, 16:00.
pub fn session_starts() -> [NaiveTime; 4] {
    [
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
    ]
}

/// A candidate exam slot: one session on one exam day.
///
/// Ordering is chronological (date first, then start time), matching the
/// order in which slots are generated and scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExamSlot {
    /// Exam day.
    pub date: NaiveDate,
    /// Session start time.
    pub start_time: NaiveTime,
}

impl ExamSlot {
    /// Creates a slot.
    pub fn new(date: NaiveDate, start_time: NaiveTime) -> Self {
        Self { date, start_time }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts() {
        let starts = session_starts();
        assert_eq!(starts.len(), 4);
        assert_eq!(starts[0], NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(starts[3], NaiveTime::from_hms_opt(16, 0, 0).unwrap());
        // Strictly increasing within the day
        assert!(starts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_slot_ordering() {
        let d1 = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
        let [s9, s11, ..] = session_starts();

        assert!(ExamSlot::new(d1, s11) < ExamSlot::new(d2, s9));
        assert!(ExamSlot::new(d1, s9) < ExamSlot::new(d1, s11));
        assert_eq!(ExamSlot::new(d1, s9), ExamSlot::new(d1, s9));
    }
}
