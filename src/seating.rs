//! Seating plan generation.
//!
//! Places one exam's roster into its assigned classrooms. The roster is
//! shuffled uniformly, then dealt into each room's desk grid row-major:
//! row outer, column inner, desk position innermost. Rooms are consumed in
//! their assigned (largest-first) order.
//!
//! The planner does not validate capacity; that is the scheduler's job at
//! allocation time. Students beyond the combined grid capacity are reported
//! as unplaced, never silently dropped.
//!
//! By default the shuffle is unseeded, so every run deals a fresh layout.
//! Supplying a seed makes placements reproducible; pair it with a sorted
//! roster (see [`EnrollmentIndex::roster_of`]) for identical plans across runs.
//!
//! [`EnrollmentIndex::roster_of`]: crate::enrollment::EnrollmentIndex::roster_of

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::models::{Classroom, ExamAssignment, SeatAssignment, SeatingPlan};

/// Resolves an exam's assigned classrooms, in seating order.
///
/// Room ids without a matching classroom are skipped; the planner then
/// simply has less capacity to fill.
pub fn assigned_classrooms(exam: &ExamAssignment, classrooms: &[Classroom]) -> Vec<Classroom> {
    exam.classroom_ids
        .iter()
        .filter_map(|id| classrooms.iter().find(|c| &c.id == id))
        .cloned()
        .collect()
}

/// Grid seating planner for a single exam.
///
/// Each call to [`plan`](Self::plan) returns a complete fresh plan that
/// supersedes any previous one for the same exam; regeneration is
/// destructive-and-replace, never an incremental edit.
#[derive(Debug, Clone, Default)]
pub struct SeatingPlanner {
    seed: Option<u64>,
}

impl SeatingPlanner {
    /// Creates an unseeded planner (fresh random layout per run).
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the shuffle seed, making placements reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generates the seating plan for one exam.
    ///
    /// `classrooms` must be the exam's rooms in assigned order (see
    /// [`assigned_classrooms`]); `roster` is the enrolled students.
    pub fn plan(
        &self,
        exam_id: impl Into<String>,
        classrooms: &[Classroom],
        roster: &[String],
    ) -> SeatingPlan {
        let exam_id = exam_id.into();
        let mut students = roster.to_vec();
        match self.seed {
            Some(seed) => students.shuffle(&mut SmallRng::seed_from_u64(seed)),
            None => students.shuffle(&mut rand::rng()),
        }

        let mut seats = Vec::new();
        let mut placed = 0usize;
        'rooms: for room in classrooms {
            for row in 0..room.rows {
                for col in 0..room.cols {
                    for desk_position in 1..=room.seats_per_desk {
                        let Some(student) = students.get(placed) else {
                            break 'rooms;
                        };
                        seats.push(SeatAssignment::new(
                            student,
                            &exam_id,
                            &room.id,
                            row,
                            col,
                            desk_position,
                        ));
                        placed += 1;
                    }
                }
            }
        }

        let unplaced = students.split_off(placed);
        SeatingPlan { seats, unplaced }
    }
}
