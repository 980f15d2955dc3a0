//! Exam scheduling domain models.
//!
//! Core data types for exam timetabling and seating: what gets scheduled
//! (courses, via their enrollments), where (classroom desk grids), when
//! (exam slots), and the two record sets a run produces (a timetable of
//! exam assignments and per-exam seating plans).

mod classroom;
mod course;
mod exam;
mod seat;
mod slot;

pub use classroom::Classroom;
pub use course::{Course, Enrollment};
pub use exam::{ExamAssignment, ExamType, Timetable, TimetableWarning, WarningKind};
pub use seat::{SeatAssignment, SeatingPlan};
pub use slot::{session_starts, ExamSlot};
