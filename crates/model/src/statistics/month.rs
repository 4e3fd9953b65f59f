use crate::record::DailyRecord;
use time::MonthKey;

/// Score thresholds for the good/okay/bad buckets. The only policy knobs of
/// the monthly aggregation: a "good" day scores at least `GOOD_SCORE`, an
/// "okay" day at least `OKAY_SCORE`.
pub const GOOD_SCORE: i32 = 75;
pub const OKAY_SCORE: i32 = 60;

/// Records of one calendar month, in date order.
pub fn monthly_records<'r>(
    records: impl IntoIterator<Item = &'r DailyRecord>,
    month: MonthKey,
) -> Vec<&'r DailyRecord> {
    records
        .into_iter()
        .filter(|record| month.contains(record.date))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthStatistics {
    /// Mean score rounded to the nearest integer, 0 for an empty month.
    pub average: i32,
    pub good: u32,
    pub okay: u32,
    pub bad: u32,
    pub total: u32,
    pub stool_total: u32,
}

impl MonthStatistics {
    pub fn collect<'r>(records: impl IntoIterator<Item = &'r DailyRecord>) -> MonthStatistics {
        let mut stat = MonthStatistics::default();
        let mut score_sum: i64 = 0;

        for record in records {
            stat.total += 1;
            stat.stool_total += record.stool_count;
            score_sum += record.score as i64;

            if record.score >= GOOD_SCORE {
                stat.good += 1;
            } else if record.score >= OKAY_SCORE {
                stat.okay += 1;
            } else {
                stat.bad += 1;
            }
        }

        if stat.total > 0 {
            stat.average = (score_sum as f64 / stat.total as f64).round() as i32;
        }
        stat
    }

    /// Share of good days, 0.0 for an empty month.
    pub fn good_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.good as f64 / self.total as f64
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::record::Mood;
    use chrono::NaiveDate;

    fn record(day: u32, score: i32) -> DailyRecord {
        DailyRecord::new(
            NaiveDate::from_ymd_opt(2025, 5, day).unwrap(),
            Mood::Okay,
            score,
            1,
            "",
        )
    }

    #[test]
    fn test_empty_month() {
        let stat = MonthStatistics::collect(&Vec::new());
        assert_eq!(stat, MonthStatistics::default());
        assert_eq!(stat.average, 0);
        assert_eq!(stat.good_ratio(), 0.0);
    }

    #[test]
    fn test_may_2025_sample() {
        let records: Vec<_> = [85, 76, 62, 45, 92]
            .iter()
            .enumerate()
            .map(|(idx, &score)| record(10 + idx as u32, score))
            .collect();

        let stat = MonthStatistics::collect(&records);
        assert_eq!(stat.average, 72);
        assert_eq!(stat.good, 2);
        assert_eq!(stat.okay, 1);
        assert_eq!(stat.bad, 2);
        assert_eq!(stat.total, 5);
        assert_eq!(stat.stool_total, 5);
    }

    #[test]
    fn test_buckets_partition_total() {
        let records: Vec<_> = (1..=28).map(|day| record(day, (day as i32) * 4)).collect();
        let stat = MonthStatistics::collect(&records);
        assert_eq!(stat.good + stat.okay + stat.bad, stat.total);
        assert_eq!(stat.total, 28);
    }

    #[test]
    fn test_bucket_boundaries() {
        let stat = MonthStatistics::collect(&[record(1, 75), record(2, 74), record(3, 60), record(4, 59)]);
        assert_eq!(stat.good, 1);
        assert_eq!(stat.okay, 2);
        assert_eq!(stat.bad, 1);
    }

    #[test]
    fn test_out_of_range_scores() {
        // saving can produce scores above 100; they still land in a bucket
        let stat = MonthStatistics::collect(&[record(1, 140), record(2, -10)]);
        assert_eq!(stat.good, 1);
        assert_eq!(stat.bad, 1);
        assert_eq!(stat.average, 65);
    }

    #[test]
    fn test_rounding() {
        let stat = MonthStatistics::collect(&[record(1, 70), record(2, 71)]);
        assert_eq!(stat.average, 71);
        let stat = MonthStatistics::collect(&[record(1, 70), record(2, 70), record(3, 71)]);
        assert_eq!(stat.average, 70);
    }

    #[test]
    fn test_monthly_records_filter() {
        let month: MonthKey = "2025-05".parse().unwrap();
        let mut records = vec![record(10, 80), record(11, 60)];
        records.push(DailyRecord::new(
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            Mood::Good,
            90,
            1,
            "",
        ));

        let monthly = monthly_records(&records, month);
        assert_eq!(monthly.len(), 2);
        assert!(monthly.iter().all(|r| month.contains(r.date)));
    }
}
