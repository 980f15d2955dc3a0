//! Timetable (scheduling output) model.
//!
//! A timetable is the complete result of one scheduling run: one exam per
//! scheduled course, plus any warnings accumulated along the way. Warnings
//! mark soft degradations (a forced same-slot conflict, an under-capacity
//! room list) that leave the timetable usable but worth surfacing before
//! the caller commits it.
//!
//! Timetables are regenerated wholesale: a rerun replaces the previous
//! result, it never patches individual exams.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::ExamSlot;

/// Kind of exam being scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamType {
    /// End-of-term exam.
    Final,
    /// Mid-term exam.
    Midterm,
    /// Make-up exam for failed or missed finals.
    Resit,
}

/// A scheduled exam: course, slot, duration, and assigned rooms.
///
/// The classroom list is ordered largest-first; the seating planner consumes
/// rooms in this order. Invariant at creation: the rooms' combined capacity
/// covers `student_count`, unless a capacity warning or error was raised.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamAssignment {
    /// Course this exam belongs to.
    pub course_id: String,
    /// Assigned slot (date + session start).
    pub slot: ExamSlot,
    /// Exam duration in minutes.
    pub duration_minutes: u32,
    /// Kind of exam.
    pub exam_type: ExamType,
    /// Assigned classroom identifiers, in seating order.
    pub classroom_ids: Vec<String>,
    /// Enrolled student count at scheduling time.
    pub student_count: u32,
}

impl ExamAssignment {
    /// Creates an exam assignment with no rooms yet.
    pub fn new(
        course_id: impl Into<String>,
        slot: ExamSlot,
        duration_minutes: u32,
        exam_type: ExamType,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            slot,
            duration_minutes,
            exam_type,
            classroom_ids: Vec::new(),
            student_count: 0,
        }
    }

    /// Sets the assigned classrooms (seating order).
    pub fn with_classrooms(mut self, classroom_ids: Vec<String>) -> Self {
        self.classroom_ids = classroom_ids;
        self
    }

    /// Sets the enrolled student count.
    pub fn with_student_count(mut self, student_count: u32) -> Self {
        self.student_count = student_count;
        self
    }
}

/// A soft-degradation warning attached to a timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableWarning {
    /// What degraded.
    pub kind: WarningKind,
    /// Course whose exam is affected.
    pub course_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of timetable warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// No conflict-free slot existed; the exam shares a slot with another
    /// exam these students are also sitting.
    SlotConflict {
        /// Students double-booked in the slot, sorted.
        students: Vec<String>,
    },
    /// Allocated rooms cannot seat every enrolled student.
    CapacityShortfall {
        /// Combined capacity of the allocated rooms.
        capacity: u32,
        /// Enrolled student count.
        enrolled: u32,
    },
}

impl TimetableWarning {
    /// Creates a slot-conflict warning naming the double-booked students.
    pub fn slot_conflict(course_id: impl Into<String>, slot: ExamSlot, students: Vec<String>) -> Self {
        let course_id = course_id.into();
        let message = format!(
            "course '{}' shares slot {} {} with {} already-committed student(s)",
            course_id,
            slot.date,
            slot.start_time,
            students.len()
        );
        Self {
            kind: WarningKind::SlotConflict { students },
            course_id,
            message,
        }
    }

    /// Creates a capacity-shortfall warning.
    pub fn capacity_shortfall(course_id: impl Into<String>, capacity: u32, enrolled: u32) -> Self {
        let course_id = course_id.into();
        let message = format!(
            "course '{course_id}' has {enrolled} students but only {capacity} allocated seats"
        );
        Self {
            kind: WarningKind::CapacityShortfall { capacity, enrolled },
            course_id,
            message,
        }
    }
}

/// A complete exam timetable (solution of one scheduling run).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// Scheduled exams, in scheduling order (largest course first).
    pub exams: Vec<ExamAssignment>,
    /// Soft degradations collected during scheduling.
    pub warnings: Vec<TimetableWarning>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an exam.
    pub fn add_exam(&mut self, exam: ExamAssignment) {
        self.exams.push(exam);
    }

    /// Adds a warning.
    pub fn add_warning(&mut self, warning: TimetableWarning) {
        self.warnings.push(warning);
    }

    /// Whether no unresolved student conflict was admitted.
    pub fn is_conflict_free(&self) -> bool {
        !self
            .warnings
            .iter()
            .any(|w| matches!(w.kind, WarningKind::SlotConflict { .. }))
    }

    /// Finds the exam for a given course.
    pub fn exam_for_course(&self, course_id: &str) -> Option<&ExamAssignment> {
        self.exams.iter().find(|e| e.course_id == course_id)
    }

    /// Returns all exams placed in a given slot.
    pub fn exams_in_slot(&self, slot: &ExamSlot) -> Vec<&ExamAssignment> {
        self.exams.iter().filter(|e| &e.slot == slot).collect()
    }

    /// Number of distinct slots in use.
    pub fn slots_used(&self) -> usize {
        self.exams.iter().map(|e| e.slot).collect::<HashSet<_>>().len()
    }

    /// Number of distinct exam days in use.
    pub fn days_used(&self) -> usize {
        self.exams
            .iter()
            .map(|e| e.slot.date)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Number of scheduled exams.
    pub fn exam_count(&self) -> usize {
        self.exams.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn slot(day: u32, hour: u32) -> ExamSlot {
        ExamSlot::new(
            NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
            NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
        )
    }

    fn sample_timetable() -> Timetable {
        let mut t = Timetable::new();
        t.add_exam(
            ExamAssignment::new("MATH101", slot(2, 9), 75, ExamType::Final)
                .with_classrooms(vec!["A101".into(), "B12".into()])
                .with_student_count(95),
        );
        t.add_exam(
            ExamAssignment::new("PHYS102", slot(2, 11), 75, ExamType::Final)
                .with_classrooms(vec!["A101".into()])
                .with_student_count(40),
        );
        t.add_exam(
            ExamAssignment::new("HIST200", slot(3, 9), 75, ExamType::Final)
                .with_classrooms(vec!["B12".into()])
                .with_student_count(12),
        );
        t
    }

    #[test]
    fn test_timetable_queries() {
        let t = sample_timetable();
        assert_eq!(t.exam_count(), 3);
        assert_eq!(t.slots_used(), 3);
        assert_eq!(t.days_used(), 2);

        let exam = t.exam_for_course("MATH101").unwrap();
        assert_eq!(exam.classroom_ids, vec!["A101", "B12"]);
        assert_eq!(exam.student_count, 95);
        assert!(t.exam_for_course("CHEM1").is_none());

        assert_eq!(t.exams_in_slot(&slot(2, 9)).len(), 1);
        assert!(t.exams_in_slot(&slot(9, 9)).is_empty());
    }

    #[test]
    fn test_conflict_free_flag() {
        let mut t = sample_timetable();
        assert!(t.is_conflict_free());

        // Capacity shortfalls do not make a timetable conflicted
        t.add_warning(TimetableWarning::capacity_shortfall("MATH101", 80, 95));
        assert!(t.is_conflict_free());

        t.add_warning(TimetableWarning::slot_conflict(
            "PHYS102",
            slot(2, 11),
            vec!["S1".into(), "S2".into()],
        ));
        assert!(!t.is_conflict_free());
    }

    #[test]
    fn test_warning_factories() {
        let w = TimetableWarning::slot_conflict("PHYS102", slot(2, 11), vec!["S1".into()]);
        assert_eq!(w.course_id, "PHYS102");
        assert!(matches!(&w.kind, WarningKind::SlotConflict { students } if students.len() == 1));
        assert!(w.message.contains("PHYS102"));

        let w = TimetableWarning::capacity_shortfall("MATH101", 80, 95);
        assert_eq!(
            w.kind,
            WarningKind::CapacityShortfall {
                capacity: 80,
                enrolled: 95
            }
        );
        assert!(w.message.contains("95 students"));
    }

    #[test]
    fn test_exam_type_wire_names() {
        assert_eq!(serde_json::to_string(&ExamType::Final).unwrap(), "\"final\"");
        assert_eq!(serde_json::to_string(&ExamType::Resit).unwrap(), "\"resit\"");
        let parsed: ExamType = serde_json::from_str("\"midterm\"").unwrap();
        assert_eq!(parsed, ExamType::Midterm);
    }

    #[test]
    fn test_exam_serialization_shape() {
        let t = sample_timetable();
        let json = serde_json::to_value(&t.exams[0]).unwrap();
        assert_eq!(json["course_id"], "MATH101");
        assert_eq!(json["slot"]["date"], "2025-06-02");
        assert_eq!(json["duration_minutes"], 75);
        assert_eq!(json["exam_type"], "final");
        assert_eq!(json["classroom_ids"][0], "A101");
    }
}
