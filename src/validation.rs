//! Input validation for scheduling runs.
//!
//! Checks structural integrity of courses, classrooms, and enrollments
//! before scheduling. Detects:
//! - Duplicate IDs
//! - Degenerate classroom grids (zero rows, columns, or seats per desk)
//! - Enrollments referencing unknown courses
//!
//! Duplicate enrollment pairs are NOT reported: the enrollment index
//! deduplicates them silently.

use std::collections::HashSet;

use crate::models::{Classroom, Course, Enrollment};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A classroom grid has no seats.
    EmptyGrid,
    /// An enrollment references a course that doesn't exist.
    UnknownCourse,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a scheduling run.
///
/// Checks:
/// 1. No duplicate course IDs
/// 2. No duplicate classroom IDs
/// 3. Every classroom grid seats at least one student
/// 4. Every enrollment references a known course
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    courses: &[Course],
    classrooms: &[Classroom],
    enrollments: &[Enrollment],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut course_ids = HashSet::new();
    for course in courses {
        if !course_ids.insert(course.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", course.id),
            ));
        }
    }

    let mut classroom_ids = HashSet::new();
    for room in classrooms {
        if !classroom_ids.insert(room.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate classroom ID: {}", room.id),
            ));
        }
        if room.capacity() == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyGrid,
                format!(
                    "Classroom '{}' has a {}x{} grid with {} seat(s) per desk and seats nobody",
                    room.id, room.rows, room.cols, room.seats_per_desk
                ),
            ));
        }
    }

    // Unknown course references; each missing course reported once
    let mut reported = HashSet::new();
    for enrollment in enrollments {
        if !course_ids.contains(enrollment.course_id.as_str())
            && reported.insert(enrollment.course_id.as_str())
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownCourse,
                format!(
                    "Enrollment of student '{}' references unknown course '{}'",
                    enrollment.student_id, enrollment.course_id
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
