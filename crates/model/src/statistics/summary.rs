use super::month::MonthStatistics;

/// Monthly encouragement banner, picked by the share of good days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryTier {
    Great,
    Encourage,
    Support,
}

pub const GREAT_RATIO: f64 = 0.5;
pub const ENCOURAGE_RATIO: f64 = 0.3;

impl SummaryTier {
    pub fn from_stats(stats: &MonthStatistics) -> SummaryTier {
        let ratio = stats.good_ratio();
        if ratio >= GREAT_RATIO {
            SummaryTier::Great
        } else if ratio >= ENCOURAGE_RATIO {
            SummaryTier::Encourage
        } else {
            SummaryTier::Support
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            SummaryTier::Great => "🎉 정말 잘하고 있어요! 장 상태가 매우 좋습니다.",
            SummaryTier::Encourage => "💪 조금만 더 힘내세요! 식이섬유와 물을 더 챙겨보세요.",
            SummaryTier::Support => "🤗 함께 개선해 나가요! GutBuddy가 도와드릴게요.",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn stats(good: u32, total: u32) -> MonthStatistics {
        MonthStatistics {
            good,
            total,
            ..MonthStatistics::default()
        }
    }

    #[test]
    fn test_empty_month_is_support() {
        assert_eq!(SummaryTier::from_stats(&stats(0, 0)), SummaryTier::Support);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(SummaryTier::from_stats(&stats(5, 10)), SummaryTier::Great);
        assert_eq!(SummaryTier::from_stats(&stats(4, 10)), SummaryTier::Encourage);
        assert_eq!(SummaryTier::from_stats(&stats(3, 10)), SummaryTier::Encourage);
        assert_eq!(SummaryTier::from_stats(&stats(2, 10)), SummaryTier::Support);
    }

    #[test]
    fn test_may_2025_sample_is_encourage() {
        // 2 good days of 5 -> 40%
        assert_eq!(SummaryTier::from_stats(&stats(2, 5)), SummaryTier::Encourage);
    }
}
