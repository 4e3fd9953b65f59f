use crate::store::RecordStore;
use chrono::NaiveDate;
use model::{
    record::DailyRecord,
    statistics::{calendar_grid, monthly_records, MonthStatistics, SummaryTier, WeeklyTrend, CALENDAR_CELLS},
};
use time::MonthKey;

/// Derived views over the journal. Every call reads one snapshot and runs
/// the pure aggregation from the model crate; nothing here mutates records.
#[derive(Clone)]
pub struct Statistics {
    store: RecordStore,
}

/// Everything the history screen needs for one month.
#[derive(Debug, Clone)]
pub struct MonthDashboard {
    pub month: MonthKey,
    pub records: Vec<DailyRecord>,
    pub stats: MonthStatistics,
    pub tier: SummaryTier,
    pub grid: [Option<u32>; CALENDAR_CELLS],
}

impl Statistics {
    pub(crate) fn new(store: RecordStore) -> Self {
        Self { store }
    }

    pub fn month_dashboard(&self, month: MonthKey) -> MonthDashboard {
        let snapshot = self.store.snapshot();
        let records: Vec<DailyRecord> = monthly_records(snapshot.values(), month)
            .into_iter()
            .cloned()
            .collect();
        let stats = MonthStatistics::collect(&records);

        MonthDashboard {
            month,
            stats,
            tier: SummaryTier::from_stats(&stats),
            grid: calendar_grid(month),
            records,
        }
    }

    pub fn weekly_trend(&self, today: NaiveDate) -> WeeklyTrend {
        WeeklyTrend::build(&self.store.snapshot(), today)
    }
}
