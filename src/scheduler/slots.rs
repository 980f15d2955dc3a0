//! Candidate slot generation.
//!
//! Enumerates exam slots across a date range: every non-excluded day
//! contributes the four fixed sessions, in date order then session order.
//! Both endpoint dates are included, so a single-day range (`start == end`)
//! yields exactly four slots.
//!
//! An empty result (every day excluded) is not an error here; the
//! scheduler decides whether an empty slot list is fatal.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::ScheduleError;
use crate::models::{session_starts, ExamSlot};

/// Generates candidate exam slots for `[start, end]`, skipping excluded weekdays.
///
/// # Errors
/// [`ScheduleError::InvalidDateRange`] if `start` is after `end`.
pub fn generate_slots(
    start: NaiveDate,
    end: NaiveDate,
    excluded_weekdays: &HashSet<Weekday>,
) -> Result<Vec<ExamSlot>, ScheduleError> {
    if start > end {
        return Err(ScheduleError::InvalidDateRange { start, end });
    }

    let starts = session_starts();
    let mut slots = Vec::new();
    let mut date = start;
    while date <= end {
        if !excluded_weekdays.contains(&date.weekday()) {
            for time in starts {
                slots.push(ExamSlot::new(date, time));
            }
        }
        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        // June 2025: the 2nd is a Monday
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn test_single_day_yields_four_sessions() {
        let slots = generate_slots(day(2), day(2), &HashSet::new()).unwrap();
        assert_eq!(slots.len(), 4);
        assert!(slots.iter().all(|s| s.date == day(2)));
        let times: Vec<_> = slots.iter().map(|s| s.start_time).collect();
        assert_eq!(times, session_starts().to_vec());
    }

    #[test]
    fn test_inclusive_endpoints() {
        // Mon..Fri inclusive = 5 days × 4 sessions
        let slots = generate_slots(day(2), day(6), &HashSet::new()).unwrap();
        assert_eq!(slots.len(), 20);
        assert_eq!(slots.first().unwrap().date, day(2));
        assert_eq!(slots.last().unwrap().date, day(6));
    }

    #[test]
    fn test_chronological_order() {
        let slots = generate_slots(day(2), day(4), &HashSet::new()).unwrap();
        assert!(slots.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_excluded_weekdays_skipped() {
        // Mon 2nd .. Sun 8th, weekend excluded → 5 days × 4 sessions
        let excluded: HashSet<Weekday> = [Weekday::Sat, Weekday::Sun].into_iter().collect();
        let slots = generate_slots(day(2), day(8), &excluded).unwrap();
        assert_eq!(slots.len(), 20);
        assert!(slots
            .iter()
            .all(|s| !matches!(s.date.weekday(), Weekday::Sat | Weekday::Sun)));
    }

    #[test]
    fn test_all_weekdays_excluded_yields_empty() {
        let excluded: HashSet<Weekday> = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .into_iter()
        .collect();
        let slots = generate_slots(day(2), day(30), &excluded).unwrap();
        assert!(slots.is_empty());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = generate_slots(day(10), day(2), &HashSet::new()).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::InvalidDateRange {
                start: day(10),
                end: day(2),
            }
        );
    }
}
