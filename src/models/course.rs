//! Course and enrollment models.
//!
//! A course is the unit of exam scheduling: one active course produces at
//! most one exam per run. Enrollments are the many-to-many student↔course
//! edges from which all student counts are derived; a course never stores
//! its own headcount.

use serde::{Deserialize, Serialize};

/// A course that may receive an exam.
///
/// Only active courses participate in scheduling. A course with no
/// enrollments is skipped entirely (produces no exam).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier (e.g. a course code).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Whether this course is scheduled. Inactive courses are ignored.
    pub active: bool,
}

impl Course {
    /// Creates a new active course.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            active: true,
        }
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Marks the course inactive (excluded from scheduling).
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

/// A student's enrollment in a course.
///
/// Duplicate pairs are harmless: the enrollment index deduplicates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Enrolled student identifier.
    pub student_id: String,
    /// Course identifier.
    pub course_id: String,
}

impl Enrollment {
    /// Creates a new enrollment edge.
    pub fn new(student_id: impl Into<String>, course_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            course_id: course_id.into(),
        }
    }
}
