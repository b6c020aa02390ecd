use std::fmt;
use thiserror::Error;
use time::{
    error::ComponentRange,
    util::is_leap_year,
    Date,
    Month::{self, *},
    Weekday,
};

pub(crate) const DAYS_IN_WEEK: usize = 7;

pub(crate) trait WeekdayExt {
    fn index0(&self) -> u8;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> u8 {
        self.number_days_from_sunday()
    }
}

/// Number of days in the given month of the proleptic Gregorian calendar
pub(crate) fn days_in_month(year: i32, month: Month) -> u8 {
    match month {
        February if is_leap_year(year) => 29,
        February => 28,
        April | June | September | November => 30,
        January | March | May | July | August | October | December => 31,
    }
}

/// A year and month, i.e., the month currently shown by a calendar view.
///
/// Only months whose first day is representable as a [`Date`] can be
/// constructed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct YearMonth {
    year: i32,
    month: Month,
}

impl YearMonth {
    pub(crate) fn new(year: i32, month: Month) -> Result<YearMonth, OutOfTimeError> {
        Date::from_calendar_date(year, month, 1).map_err(|_| OutOfTimeError)?;
        Ok(YearMonth { year, month })
    }

    pub(crate) fn containing(date: Date) -> YearMonth {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    pub(crate) fn year(&self) -> i32 {
        self.year
    }

    pub(crate) fn month(&self) -> Month {
        self.month
    }

    pub(crate) fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub(crate) fn first_day(&self) -> Result<Date, ComponentRange> {
        Date::from_calendar_date(self.year, self.month, 1)
    }

    /// Day of the week of the first of the month, counting from Sunday = 0
    pub(crate) fn first_weekday(&self) -> Result<u8, ComponentRange> {
        Ok(self.first_day()?.weekday().index0())
    }

    pub(crate) fn day_count(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    pub(crate) fn previous(self) -> Result<YearMonth, OutOfTimeError> {
        if self.month == January {
            let year = self.year.checked_sub(1).ok_or(OutOfTimeError)?;
            YearMonth::new(year, December)
        } else {
            YearMonth::new(self.year, self.month.previous())
        }
    }

    pub(crate) fn next(self) -> Result<YearMonth, OutOfTimeError> {
        if self.month == December {
            let year = self.year.checked_add(1).ok_or(OutOfTimeError)?;
            YearMonth::new(year, January)
        } else {
            YearMonth::new(self.year, self.month.next())
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub(crate) struct OutOfTimeError;
