use crate::record::{DailyRecord, Mood};
use chrono::{Datelike as _, NaiveDate, Weekday};
use std::collections::BTreeMap;

/// One bar of the weekly trend chart. Days without a record keep their slot
/// with a zero score and no mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub score: i32,
    pub mood: Option<Mood>,
}

/// Scores of the trailing seven days ending at `today`, oldest first.
/// Always exactly seven points, however sparse the journal is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyTrend {
    pub points: Vec<TrendPoint>,
}

impl WeeklyTrend {
    pub fn build(records: &BTreeMap<NaiveDate, DailyRecord>, today: NaiveDate) -> WeeklyTrend {
        let points = time::week_window(today)
            .iter()
            .map(|&date| match records.get(&date) {
                Some(record) => TrendPoint {
                    date,
                    weekday: date.weekday(),
                    score: record.score,
                    mood: Some(record.mood),
                },
                None => TrendPoint {
                    date,
                    weekday: date.weekday(),
                    score: 0,
                    mood: None,
                },
            })
            .collect();
        WeeklyTrend { points }
    }
}
