pub mod calendar;
pub mod month;
pub mod summary;
pub mod trend;

pub use calendar::{calendar_grid, CALENDAR_CELLS};
pub use month::{monthly_records, MonthStatistics};
pub use summary::SummaryTier;
pub use trend::{TrendPoint, WeeklyTrend};
