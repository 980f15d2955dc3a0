//! Exam timetabling: slot generation, greedy scheduling, room allocation, KPIs.
//!
//! # Algorithm
//!
//! [`ExamScheduler`] is greedy and conflict-aware: courses are placed
//! largest-first into the earliest slot free of student overlap, with a
//! round-robin fallback when no such slot exists. It produces one feasible
//! timetable, not an optimal one. Stronger guarantees would call for a
//! graph-coloring or constraint-solver formulation.
//!
//! # KPI
//!
//! [`TimetableKpi`] computes descriptive metrics: slot/day usage, peak slot
//! occupancy, double-booked students, seat utilization.
//!
//! # Reference
//! Carter & Laporte (1996), "Recent Developments in Practical Examination
//! Timetabling"

mod allocation;
mod greedy;
mod kpi;
mod slots;

pub use allocation::{allocate_classrooms, sort_by_capacity_desc, total_capacity};
pub use greedy::{ExamScheduler, ScheduleConfig, SchedulingRequest};
pub use kpi::TimetableKpi;
pub use slots::generate_slots;
