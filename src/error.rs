//! Fatal scheduling errors.
//!
//! Every variant aborts the whole batch operation before any exam or seat
//! record is produced. Recoverable conditions (a conflict-free slot being
//! unavailable, an under-capacity room list in the default mode) are not
//! errors; they are collected as [`TimetableWarning`]s on the result.
//!
//! [`TimetableWarning`]: crate::models::TimetableWarning

use chrono::NaiveDate;
use thiserror::Error;

/// Result type for scheduling operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Fatal conditions that abort a scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The exam period start date falls after the end date.
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// First day of the exam period.
        start: NaiveDate,
        /// Last day of the exam period.
        end: NaiveDate,
    },

    /// Slot generation produced no candidate slots (e.g. every weekday excluded).
    #[error("no exam slots available in the given date range")]
    NoSlotsAvailable,

    /// The classroom list is empty; allocation cannot proceed.
    #[error("no classrooms available")]
    NoClassrooms,

    /// Strict-capacity mode: allocated rooms cannot seat the enrolled students.
    #[error(
        "insufficient capacity for course '{course_id}': {capacity} seats for {enrolled} students"
    )]
    InsufficientCapacity {
        /// Course whose exam could not be covered.
        course_id: String,
        /// Total capacity of the allocated classrooms.
        capacity: u32,
        /// Enrolled student count.
        enrolled: u32,
    },
}
