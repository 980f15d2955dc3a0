//! Exam timetabling and seating assignment engine.
//!
//! Assigns courses to exam time slots while avoiding student scheduling
//! conflicts and respecting classroom capacity, then places enrolled
//! students into grid-shaped rooms. The engine is a pure, synchronous batch
//! computation: it consumes in-memory snapshots (courses, classrooms,
//! enrollments, a period configuration) and returns in-memory record sets.
//! Persistence, identifier allocation, and presentation belong to the caller.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `Enrollment`, `Classroom`,
//!   `ExamSlot`, `ExamAssignment`, `Timetable`, `SeatAssignment`, `SeatingPlan`
//! - **`enrollment`**: Bidirectional student↔course membership index
//! - **`scheduler`**: Slot generation, conflict-aware greedy timetabling,
//!   largest-first classroom allocation, timetable KPIs
//! - **`seating`**: Shuffled row-major grid seating per exam
//! - **`validation`**: Input integrity checks (duplicate IDs, empty grids,
//!   dangling course references)
//! - **`error`**: Fatal error taxonomy
//!
//! # Guarantees
//!
//! Scheduling is greedy and deterministic given the same input: reruns
//! reproduce the identical course→slot mapping. Seating layouts are random
//! per run unless a seed is supplied. Soft degradations (an admitted
//! conflict, an under-capacity room list) are returned as warnings on the
//! result; fatal conditions abort with no partial output.

pub mod enrollment;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod seating;
pub mod validation;
