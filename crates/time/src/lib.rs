pub use chrono;

use chrono::{Datelike as _, Days, Duration, Months, NaiveDate};
use eyre::{eyre, Error};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Calendar month identifier. Month is always in 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<MonthKey, Error> {
        // four-digit years, well inside chrono's calendar range
        if !(0..=9999).contains(&year) {
            return Err(eyre!("Invalid year: {}", year));
        }
        if !(1..=12).contains(&month) {
            return Err(eyre!("Invalid month: {}", month));
        }
        Ok(MonthKey { year, month })
    }

    pub fn from_date(date: NaiveDate) -> MonthKey {
        MonthKey {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first_day()
            .checked_add_months(Months::new(1))
            .unwrap()
            .checked_sub_days(Days::new(1))
            .unwrap()
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn next(&self) -> MonthKey {
        MonthKey::from_date(
            self.first_day()
                .checked_add_months(Months::new(1))
                .unwrap(),
        )
    }

    pub fn prev(&self) -> MonthKey {
        MonthKey::from_date(
            self.first_day()
                .checked_sub_months(Months::new(1))
                .unwrap(),
        )
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<MonthKey, Error> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| eyre!("Invalid month key: {}", s))?;
        MonthKey::new(
            year.parse().map_err(|_| eyre!("Invalid year: {}", year))?,
            month
                .parse()
                .map_err(|_| eyre!("Invalid month: {}", month))?,
        )
    }
}

impl From<NaiveDate> for MonthKey {
    fn from(date: NaiveDate) -> Self {
        MonthKey::from_date(date)
    }
}

impl Default for MonthKey {
    fn default() -> Self {
        MonthKey::from_date(chrono::Local::now().date_naive())
    }
}

/// Trailing seven-day window ending at `today`, oldest first.
pub fn week_window(today: NaiveDate) -> [NaiveDate; 7] {
    let mut days = [today; 7];
    for (idx, slot) in days.iter_mut().enumerate() {
        *slot = today - Duration::days(6 - idx as i64);
    }
    days
}

/// Weekday index with a Sunday-first week: 0=Sunday .. 6=Saturday.
pub fn sunday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}
