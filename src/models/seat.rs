//! Seating plan (seat assignment) model.
//!
//! One seating plan covers one exam. Rows and columns are 0-based grid
//! coordinates; desk positions are 1-based (`1..=seats_per_desk`), matching
//! how invigilator sheets label seats within a desk.

use serde::{Deserialize, Serialize};

/// A single student's seat for one exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAssignment {
    /// Seated student.
    pub student_id: String,
    /// Exam this seat belongs to.
    pub exam_id: String,
    /// Classroom containing the seat.
    pub classroom_id: String,
    /// Desk row (0-based).
    pub row: u32,
    /// Desk column (0-based).
    pub col: u32,
    /// Position within the desk (1-based).
    pub desk_position: u32,
}

impl SeatAssignment {
    /// Creates a seat assignment.
    pub fn new(
        student_id: impl Into<String>,
        exam_id: impl Into<String>,
        classroom_id: impl Into<String>,
        row: u32,
        col: u32,
        desk_position: u32,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            exam_id: exam_id.into(),
            classroom_id: classroom_id.into(),
            row,
            col,
            desk_position,
        }
    }
}

/// A complete seating plan for one exam.
///
/// Regeneration is destructive-and-replace: each planning run returns a
/// whole new plan superseding any previous one for the same exam. Students
/// who did not fit in the assigned rooms are listed in `unplaced`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeatingPlan {
    /// One seat per placed student.
    pub seats: Vec<SeatAssignment>,
    /// Students left without a seat (allocated grids exhausted).
    pub unplaced: Vec<String>,
}

impl SeatingPlan {
    /// Number of placed students.
    pub fn placed_count(&self) -> usize {
        self.seats.len()
    }

    /// Whether every rostered student received a seat.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Finds a student's seat.
    pub fn seat_for_student(&self, student_id: &str) -> Option<&SeatAssignment> {
        self.seats.iter().find(|s| s.student_id == student_id)
    }

    /// Returns all seats in a given classroom.
    pub fn seats_in_classroom(&self, classroom_id: &str) -> Vec<&SeatAssignment> {
        self.seats
            .iter()
            .filter(|s| s.classroom_id == classroom_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> SeatingPlan {
        SeatingPlan {
            seats: vec![
                SeatAssignment::new("S1", "E1", "A101", 0, 0, 1),
                SeatAssignment::new("S2", "E1", "A101", 0, 0, 2),
                SeatAssignment::new("S3", "E1", "B12", 0, 0, 1),
            ],
            unplaced: vec!["S4".into()],
        }
    }

    #[test]
    fn test_plan_queries() {
        let plan = sample_plan();
        assert_eq!(plan.placed_count(), 3);
        assert!(!plan.is_complete());

        let seat = plan.seat_for_student("S2").unwrap();
        assert_eq!(seat.classroom_id, "A101");
        assert_eq!(seat.desk_position, 2);
        assert!(plan.seat_for_student("S9").is_none());

        assert_eq!(plan.seats_in_classroom("A101").len(), 2);
        assert_eq!(plan.seats_in_classroom("B12").len(), 1);
    }

    #[test]
    fn test_seat_serialization_shape() {
        let seat = SeatAssignment::new("S1", "E1", "A101", 2, 3, 1);
        let json = serde_json::to_value(&seat).unwrap();
        assert_eq!(json["student_id"], "S1");
        assert_eq!(json["exam_id"], "E1");
        assert_eq!(json["row"], 2);
        assert_eq!(json["col"], 3);
        assert_eq!(json["desk_position"], 1);
    }
}
