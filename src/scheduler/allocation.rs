//! Greedy classroom allocation.
//!
//! Covers a course's headcount by accumulating classroom capacity
//! largest-first (first-fit decreasing). Exhausting the room list before
//! reaching the headcount returns the partial list; the scheduler decides
//! whether to warn or abort on the shortfall.

use crate::models::Classroom;

/// Sorts classrooms by descending capacity.
///
/// Equal capacities keep their input order (stable sort), so allocation is
/// deterministic given the same room list.
pub fn sort_by_capacity_desc(classrooms: &mut [&Classroom]) {
    classrooms.sort_by(|a, b| b.capacity().cmp(&a.capacity()));
}

/// Combined capacity of a set of classrooms.
pub fn total_capacity(classrooms: &[&Classroom]) -> u32 {
    classrooms.iter().map(|c| c.capacity()).sum()
}

/// Selects enough classrooms (largest first) to seat `student_count`.
///
/// `classrooms` must already be sorted descending by capacity. Returns the
/// selected room ids in seating order. A zero headcount still gets the first
/// room; every exam record carries at least one room.
pub fn allocate_classrooms(classrooms: &[&Classroom], student_count: u32) -> Vec<String> {
    if student_count == 0 {
        return classrooms.first().map(|c| vec![c.id.clone()]).unwrap_or_default();
    }

    let mut assigned = Vec::new();
    let mut remaining = i64::from(student_count);
    for room in classrooms {
        if remaining <= 0 {
            break;
        }
        assigned.push(room.id.clone());
        remaining -= i64::from(room.capacity());
    }
    assigned
}
