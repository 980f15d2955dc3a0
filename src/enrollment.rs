//! Bidirectional enrollment index.
//!
//! Builds student→courses and course→students membership sets from flat
//! enrollment rows. Both directions are needed downstream: the scheduler
//! checks course rosters against per-slot committed-student sets, and the
//! seating planner consumes course rosters directly.
//!
//! Duplicate pairs and rows with empty identifiers are silently dropped:
//! malformed enrollment data degrades to deduplication, never to an error.

use std::collections::{HashMap, HashSet};

use crate::models::Enrollment;

/// Student↔course membership sets derived from enrollment rows.
#[derive(Debug, Clone, Default)]
pub struct EnrollmentIndex {
    student_courses: HashMap<String, HashSet<String>>,
    course_students: HashMap<String, HashSet<String>>,
}

impl EnrollmentIndex {
    /// Builds the index from all enrollment rows.
    pub fn build(enrollments: &[Enrollment]) -> Self {
        Self::build_filtered(enrollments, |_| true)
    }

    /// Builds the index from rows whose course passes `keep_course`.
    ///
    /// Used to restrict the index to active courses within a scheduling
    /// scope; rows for other courses are ignored entirely.
    pub fn build_filtered<F>(enrollments: &[Enrollment], keep_course: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        let mut index = Self::default();
        for e in enrollments {
            if e.student_id.is_empty() || e.course_id.is_empty() {
                continue;
            }
            if !keep_course(&e.course_id) {
                continue;
            }
            index
                .student_courses
                .entry(e.student_id.clone())
                .or_default()
                .insert(e.course_id.clone());
            index
                .course_students
                .entry(e.course_id.clone())
                .or_default()
                .insert(e.student_id.clone());
        }
        index
    }

    /// Students enrolled in a course, if any.
    pub fn students_of(&self, course_id: &str) -> Option<&HashSet<String>> {
        self.course_students.get(course_id)
    }

    /// Courses a student is enrolled in, if any.
    pub fn courses_of(&self, student_id: &str) -> Option<&HashSet<String>> {
        self.student_courses.get(student_id)
    }

    /// Enrolled student count for a course (0 if unknown).
    pub fn enrolled_count(&self, course_id: &str) -> usize {
        self.students_of(course_id).map_or(0, HashSet::len)
    }

    /// Sorted roster for a course.
    ///
    /// Sorting makes downstream seeded shuffles reproducible: the same
    /// inputs always hand the planner the same pre-shuffle order.
    pub fn roster_of(&self, course_id: &str) -> Vec<String> {
        let mut roster: Vec<String> = self
            .students_of(course_id)
            .map(|s| s.iter().cloned().collect())
            .unwrap_or_default();
        roster.sort();
        roster
    }

    /// Number of distinct students in the index.
    pub fn student_count(&self) -> usize {
        self.student_courses.len()
    }

    /// Number of distinct courses in the index.
    pub fn course_count(&self) -> usize {
        self.course_students.len()
    }
}
