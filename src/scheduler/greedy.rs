//! Conflict-aware greedy exam scheduler.
//!
//! # Algorithm
//!
//! 1. Sort courses by descending enrolled count; placing large courses
//!    first reduces the chance they get stranded without a conflict-free slot.
//! 2. Track, per slot, the set of students already committed there.
//! 3. For each course, pick the first slot (generation order) whose
//!    committed set is disjoint from the course roster; fall back to
//!    round-robin when none exists, recording the admitted conflict as a
//!    warning rather than failing.
//! 4. Cover the course's headcount with classrooms, largest first.
//!
//! # Complexity
//! O(n · k · s) where n=courses, k=slots, s=students per course.
//!
//! # Reference
//! Carter & Laporte (1996), "Recent Developments in Practical Examination
//! Timetabling"

use std::collections::HashSet;

use chrono::{NaiveDate, Weekday};
use log::{debug, warn};

use super::allocation::{allocate_classrooms, sort_by_capacity_desc};
use super::slots::generate_slots;
use crate::enrollment::EnrollmentIndex;
use crate::error::ScheduleError;
use crate::models::{
    Classroom, Course, Enrollment, ExamAssignment, ExamType, Timetable, TimetableWarning,
};

/// Scheduling configuration for one exam period.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// First day of the exam period.
    pub start_date: NaiveDate,
    /// Last day of the exam period (inclusive).
    pub end_date: NaiveDate,
    /// Weekdays on which no exams take place.
    pub excluded_weekdays: HashSet<Weekday>,
    /// Exam duration in minutes.
    pub exam_duration_minutes: u32,
    /// Break between exams in minutes. Carried for callers; session start
    /// times are fixed, so this never alters slot spacing.
    pub break_minutes: u32,
    /// Whether to avoid placing a student in two exams in the same slot.
    pub prevent_conflicts: bool,
    /// Kind of exam being scheduled.
    pub exam_type: ExamType,
}

impl ScheduleConfig {
    /// Creates a configuration with the default settings: 75-minute exams,
    /// 15-minute breaks, conflict prevention on, final exams.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            excluded_weekdays: HashSet::new(),
            exam_duration_minutes: 75,
            break_minutes: 15,
            prevent_conflicts: true,
            exam_type: ExamType::Final,
        }
    }

    /// Sets the excluded weekdays.
    pub fn with_excluded_weekdays(mut self, weekdays: impl IntoIterator<Item = Weekday>) -> Self {
        self.excluded_weekdays = weekdays.into_iter().collect();
        self
    }

    /// Sets the exam duration in minutes.
    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.exam_duration_minutes = minutes;
        self
    }

    /// Sets the break between exams in minutes.
    pub fn with_break(mut self, minutes: u32) -> Self {
        self.break_minutes = minutes;
        self
    }

    /// Enables or disables conflict prevention.
    pub fn with_prevent_conflicts(mut self, prevent: bool) -> Self {
        self.prevent_conflicts = prevent;
        self
    }

    /// Sets the exam type.
    pub fn with_exam_type(mut self, exam_type: ExamType) -> Self {
        self.exam_type = exam_type;
        self
    }
}

/// Input container for one scheduling run.
///
/// Scope (which department, which term) is the caller's concern: the request
/// carries an already-scoped snapshot, never ambient state.
#[derive(Debug, Clone)]
pub struct SchedulingRequest {
    /// Courses in scope. Inactive ones are ignored.
    pub courses: Vec<Course>,
    /// Classrooms in scope.
    pub classrooms: Vec<Classroom>,
    /// Enrollment rows in scope.
    pub enrollments: Vec<Enrollment>,
    /// Period and behavior configuration.
    pub config: ScheduleConfig,
}

impl SchedulingRequest {
    /// Creates a request. The exam period defaults to a single epoch day;
    /// set the real period via [`with_config`](Self::with_config).
    pub fn new(courses: Vec<Course>, classrooms: Vec<Classroom>) -> Self {
        let epoch = NaiveDate::default();
        Self {
            courses,
            classrooms,
            enrollments: Vec::new(),
            config: ScheduleConfig::new(epoch, epoch),
        }
    }

    /// Sets the enrollment rows.
    pub fn with_enrollments(mut self, enrollments: Vec<Enrollment>) -> Self {
        self.enrollments = enrollments;
        self
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: ScheduleConfig) -> Self {
        self.config = config;
        self
    }
}

/// Conflict-aware greedy exam scheduler.
///
/// Produces one feasible timetable per run; reruns with unchanged input
/// reproduce the same course→slot mapping (stable ordering throughout).
/// It does not optimize any global objective.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use exam_schedule::models::{Classroom, Course, Enrollment};
/// use exam_schedule::scheduler::{ExamScheduler, ScheduleConfig, SchedulingRequest};
///
/// let config = ScheduleConfig::new(
///     NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 6).unwrap(),
/// );
/// let request = SchedulingRequest::new(
///     vec![Course::new("MATH101")],
///     vec![Classroom::new("A101", 5, 8)],
/// )
/// .with_enrollments(vec![Enrollment::new("S1", "MATH101")])
/// .with_config(config);
///
/// let timetable = ExamScheduler::new().schedule(&request).unwrap();
/// assert_eq!(timetable.exam_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExamScheduler {
    strict_capacity: bool,
}

impl ExamScheduler {
    /// Creates a scheduler with the default (warn-and-proceed) capacity policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Treats an under-capacity room allocation as fatal instead of a warning.
    pub fn with_strict_capacity(mut self) -> Self {
        self.strict_capacity = true;
        self
    }

    /// Schedules every active course in the request onto an exam slot.
    ///
    /// Courses with no enrolled students produce no exam. The returned
    /// timetable carries warnings for any admitted conflict or capacity
    /// shortfall; fatal conditions abort with no partial result.
    ///
    /// # Errors
    /// - [`ScheduleError::InvalidDateRange`] — period start after end.
    /// - [`ScheduleError::NoSlotsAvailable`] — zero candidate slots.
    /// - [`ScheduleError::NoClassrooms`] — empty classroom list.
    /// - [`ScheduleError::InsufficientCapacity`] — shortfall in strict mode.
    pub fn schedule(&self, request: &SchedulingRequest) -> Result<Timetable, ScheduleError> {
        let active: Vec<&Course> = request.courses.iter().filter(|c| c.active).collect();
        if active.is_empty() {
            return Ok(Timetable::new());
        }
        if request.classrooms.is_empty() {
            return Err(ScheduleError::NoClassrooms);
        }

        let config = &request.config;
        let slots = generate_slots(
            config.start_date,
            config.end_date,
            &config.excluded_weekdays,
        )?;
        if slots.is_empty() {
            return Err(ScheduleError::NoSlotsAvailable);
        }
        debug!(
            "scheduling {} active course(s) over {} slot(s)",
            active.len(),
            slots.len()
        );

        let active_ids: HashSet<&str> = active.iter().map(|c| c.id.as_str()).collect();
        let index =
            EnrollmentIndex::build_filtered(&request.enrollments, |c| active_ids.contains(c));

        let mut rooms: Vec<&Classroom> = request.classrooms.iter().collect();
        sort_by_capacity_desc(&mut rooms);

        // Largest course first; ties keep input order (stable sort), so the
        // course→slot mapping is reproducible across reruns.
        let mut ordered: Vec<(&Course, usize)> = active
            .iter()
            .map(|c| (*c, index.enrolled_count(&c.id)))
            .collect();
        ordered.sort_by(|a, b| b.1.cmp(&a.1));

        let mut timetable = Timetable::new();
        let mut slot_students: Vec<HashSet<&str>> = vec![HashSet::new(); slots.len()];

        for (course, count) in ordered {
            if count == 0 {
                debug!("course '{}' has no enrollments, no exam scheduled", course.id);
                continue;
            }
            let Some(students) = index.students_of(&course.id) else {
                continue;
            };

            let round_robin = timetable.exam_count() % slots.len();
            let slot_index = if config.prevent_conflicts {
                let free = (0..slots.len()).find(|&i| {
                    students.iter().all(|s| !slot_students[i].contains(s.as_str()))
                });
                match free {
                    Some(i) => i,
                    None => {
                        let mut shared: Vec<String> = students
                            .iter()
                            .filter(|s| slot_students[round_robin].contains(s.as_str()))
                            .cloned()
                            .collect();
                        shared.sort();
                        warn!(
                            "no conflict-free slot for course '{}', falling back to slot {} ({} shared students)",
                            course.id,
                            round_robin,
                            shared.len()
                        );
                        timetable.add_warning(TimetableWarning::slot_conflict(
                            &course.id,
                            slots[round_robin],
                            shared,
                        ));
                        round_robin
                    }
                }
            } else {
                round_robin
            };

            let classroom_ids = allocate_classrooms(&rooms, count as u32);
            let capacity: u32 = rooms
                .iter()
                .filter(|r| classroom_ids.contains(&r.id))
                .map(|r| r.capacity())
                .sum();
            if (capacity as usize) < count {
                if self.strict_capacity {
                    return Err(ScheduleError::InsufficientCapacity {
                        course_id: course.id.clone(),
                        capacity,
                        enrolled: count as u32,
                    });
                }
                warn!(
                    "course '{}' needs {} seats but only {} are allocatable",
                    course.id, count, capacity
                );
                timetable.add_warning(TimetableWarning::capacity_shortfall(
                    &course.id,
                    capacity,
                    count as u32,
                ));
            }

            timetable.add_exam(
                ExamAssignment::new(
                    &course.id,
                    slots[slot_index],
                    config.exam_duration_minutes,
                    config.exam_type,
                )
                .with_classrooms(classroom_ids)
                .with_student_count(count as u32),
            );

            if config.prevent_conflicts {
                for student in students {
                    slot_students[slot_index].insert(student.as_str());
                }
            }
        }

        Ok(timetable)
    }
}
