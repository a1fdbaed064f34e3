//! Upcoming birthday computation.

use crate::domain::birthday::{Birthday, BIRTHDAY_FORMAT};
use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;

/// Default look-ahead for the birthday report, in days.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// A contact to congratulate and the day to do it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.name,
            self.congratulation_date.format(BIRTHDAY_FORMAT)
        )
    }
}

/// Day on which to congratulate `birthday`, if it falls inside the window.
///
/// The birthday is placed in `today`'s year, or the next year when that date
/// has already passed. It is kept when it is at most `window_days` away
/// (today itself counts), and a Saturday or Sunday moves to the next Monday.
/// The weekend shift happens after the window check, so a date can land up
/// to two days past the window.
pub fn congratulation_date(
    birthday: &Birthday,
    today: NaiveDate,
    window_days: i64,
) -> Option<NaiveDate> {
    let mut date = birthday.anniversary_in(today.year())?;
    if date < today {
        date = birthday.anniversary_in(today.year() + 1)?;
    }

    if (date - today).num_days() > window_days {
        return None;
    }

    Some(shift_weekend(date))
}

/// Move a Saturday or Sunday forward to the following Monday.
pub fn shift_weekend(date: NaiveDate) -> NaiveDate {
    let weekday = i64::from(date.weekday().num_days_from_monday());
    if weekday >= 5 {
        date + Duration::days(7 - weekday)
    } else {
        date
    }
}
