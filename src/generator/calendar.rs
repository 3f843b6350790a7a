//! Calendar helpers
//!
//! Weekday and month-end enumeration for the configured date range.

use chrono::{Datelike, NaiveDate, Weekday};

/// Returns true for Monday through Friday
pub fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// All weekdays in [start, end], in ascending order
pub fn weekdays_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut day = start;

    while day <= end {
        if is_weekday(day) {
            days.push(day);
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    days
}

/// Last calendar day of the month containing `date`
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let (year, month) = (date.year(), date.month());
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    // Both constructions are valid for any in-range date
    first_of_next.and_then(|d| d.pred_opt()).unwrap()
}

/// All month-end dates in [start, end], in ascending order
///
/// A month whose last day falls outside the range contributes nothing,
/// so a partial final month produces no record.
pub fn month_ends_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut ends = Vec::new();
    let mut cursor = start;

    while cursor <= end {
        let eom = month_end(cursor);
        if eom > end {
            break;
        }
        ends.push(eom);
        cursor = match eom.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    ends
}
