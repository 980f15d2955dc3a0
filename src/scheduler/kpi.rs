//! Timetable quality metrics (KPIs).
//!
//! Computes descriptive indicators from a completed timetable and its
//! enrollment data. Reporting only: the scheduler never optimizes these.
//! They exist so a caller can judge a run before committing it.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Exam count | Number of scheduled exams |
//! | Slots / days used | Distinct slots and exam days |
//! | Max exams per slot | Peak slot occupancy |
//! | Double-booked students | Distinct students with ≥2 exams in one slot |
//! | Avg seat utilization | Mean enrolled ÷ allocated capacity per exam |

use std::collections::{HashMap, HashSet};

use crate::enrollment::EnrollmentIndex;
use crate::models::{Classroom, ExamSlot, Timetable};

/// Timetable performance indicators.
#[derive(Debug, Clone)]
pub struct TimetableKpi {
    /// Number of scheduled exams.
    pub exam_count: usize,
    /// Distinct slots in use.
    pub slots_used: usize,
    /// Distinct exam days in use.
    pub days_used: usize,
    /// Largest number of exams sharing one slot.
    pub max_exams_per_slot: usize,
    /// Distinct students sitting two or more exams in the same slot.
    pub double_booked_students: usize,
    /// Mean enrolled ÷ allocated-capacity across exams (0.0 if no exams).
    pub avg_seat_utilization: f64,
}

impl TimetableKpi {
    /// Computes KPIs from a timetable, its enrollment index, and the room list.
    pub fn calculate(
        timetable: &Timetable,
        index: &EnrollmentIndex,
        classrooms: &[Classroom],
    ) -> Self {
        let capacities: HashMap<&str, u32> = classrooms
            .iter()
            .map(|c| (c.id.as_str(), c.capacity()))
            .collect();

        // Group exams by slot for occupancy and double-booking
        let mut by_slot: HashMap<ExamSlot, Vec<&str>> = HashMap::new();
        for exam in &timetable.exams {
            by_slot.entry(exam.slot).or_default().push(&exam.course_id);
        }
        let max_exams_per_slot = by_slot.values().map(Vec::len).max().unwrap_or(0);

        let mut double_booked: HashSet<&str> = HashSet::new();
        for courses in by_slot.values().filter(|c| c.len() > 1) {
            let mut seen: HashMap<&str, usize> = HashMap::new();
            for course_id in courses {
                if let Some(students) = index.students_of(course_id) {
                    for student in students {
                        *seen.entry(student.as_str()).or_insert(0) += 1;
                    }
                }
            }
            for (student, count) in &seen {
                if *count > 1 {
                    double_booked.insert(*student);
                }
            }
        }

        // Seat utilization per exam
        let mut utilization_sum = 0.0;
        let mut measured = 0usize;
        for exam in &timetable.exams {
            let capacity: u32 = exam
                .classroom_ids
                .iter()
                .filter_map(|id| capacities.get(id.as_str()))
                .sum();
            if capacity > 0 {
                utilization_sum += f64::from(exam.student_count) / f64::from(capacity);
                measured += 1;
            }
        }
        let avg_seat_utilization = if measured == 0 {
            0.0
        } else {
            utilization_sum / measured as f64
        };

        Self {
            exam_count: timetable.exam_count(),
            slots_used: timetable.slots_used(),
            days_used: timetable.days_used(),
            max_exams_per_slot,
            double_booked_students: double_booked.len(),
            avg_seat_utilization,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Enrollment, ExamAssignment, ExamType};
    use chrono::{NaiveDate, NaiveTime};

    fn slot(day: u32, hour: u32) -> ExamSlot {
        ExamSlot::new(
            NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
            NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
        )
    }

    fn exam(course: &str, s: ExamSlot, rooms: &[&str], students: u32) -> ExamAssignment {
        ExamAssignment::new(course, s, 75, ExamType::Final)
            .with_classrooms(rooms.iter().map(|r| r.to_string()).collect())
            .with_student_count(students)
    }

    fn rooms() -> Vec<Classroom> {
        vec![
            Classroom::new("A101", 5, 8).with_seats_per_desk(2), // 80
            Classroom::new("B12", 4, 5),                         // 20
        ]
    }

    #[test]
    fn test_kpi_basic() {
        let mut timetable = Timetable::new();
        timetable.add_exam(exam("MATH", slot(2, 9), &["A101"], 40));
        timetable.add_exam(exam("PHYS", slot(2, 11), &["B12"], 10));
        timetable.add_exam(exam("HIST", slot(3, 9), &["B12"], 20));

        let index = EnrollmentIndex::build(&[]);
        let kpi = TimetableKpi::calculate(&timetable, &index, &rooms());

        assert_eq!(kpi.exam_count, 3);
        assert_eq!(kpi.slots_used, 3);
        assert_eq!(kpi.days_used, 2);
        assert_eq!(kpi.max_exams_per_slot, 1);
        assert_eq!(kpi.double_booked_students, 0);
        // (40/80 + 10/20 + 20/20) / 3 = 2/3
        assert!((kpi.avg_seat_utilization - 2.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_double_booked() {
        let mut timetable = Timetable::new();
        timetable.add_exam(exam("MATH", slot(2, 9), &["A101"], 2));
        timetable.add_exam(exam("PHYS", slot(2, 9), &["B12"], 2));

        // S1 sits both same-slot exams, S2 and S3 only one each
        let index = EnrollmentIndex::build(&[
            Enrollment::new("S1", "MATH"),
            Enrollment::new("S2", "MATH"),
            Enrollment::new("S1", "PHYS"),
            Enrollment::new("S3", "PHYS"),
        ]);
        let kpi = TimetableKpi::calculate(&timetable, &index, &rooms());

        assert_eq!(kpi.max_exams_per_slot, 2);
        assert_eq!(kpi.double_booked_students, 1);
    }

    #[test]
    fn test_kpi_empty_timetable() {
        let index = EnrollmentIndex::build(&[]);
        let kpi = TimetableKpi::calculate(&Timetable::new(), &index, &rooms());
        assert_eq!(kpi.exam_count, 0);
        assert_eq!(kpi.max_exams_per_slot, 0);
        assert!((kpi.avg_seat_utilization - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_unknown_rooms_skipped() {
        // Exam referencing a room outside the list contributes no utilization
        let mut timetable = Timetable::new();
        timetable.add_exam(exam("MATH", slot(2, 9), &["GHOST"], 40));

        let index = EnrollmentIndex::build(&[]);
        let kpi = TimetableKpi::calculate(&timetable, &index, &rooms());
        assert!((kpi.avg_seat_utilization - 0.0).abs() < 1e-10);
    }
}
