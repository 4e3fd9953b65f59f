use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Five-level mood scale used by the daily log.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Mood {
    Great,
    Good,
    Okay,
    Bad,
    Awful,
}

impl Mood {
    pub fn icon(&self) -> &'static str {
        match self {
            Mood::Great => "😄",
            Mood::Good => "😊",
            Mood::Okay => "😐",
            Mood::Bad => "😣",
            Mood::Awful => "😫",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Great => "최고예요",
            Mood::Good => "좋아요",
            Mood::Okay => "보통이에요",
            Mood::Bad => "안 좋아요",
            Mood::Awful => "힘들어요",
        }
    }
}

/// One journal entry per calendar date. The store keeps at most one record
/// per date; saving again replaces the previous entry.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub mood: Mood,
    /// Gut-health score, nominally 0..=100. Values outside the range are
    /// accepted as-is; aggregation tolerates them.
    pub score: i32,
    pub stool_count: u32,
    pub memo: String,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, mood: Mood, score: i32, stool_count: u32, memo: &str) -> Self {
        DailyRecord {
            date,
            mood,
            score,
            stool_count,
            memo: memo.to_owned(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use strum::IntoEnumIterator as _;

    #[test]
    fn test_mood_scale() {
        assert_eq!(Mood::iter().count(), 5);
        assert_eq!(Mood::Great.icon(), "😄");
        assert_eq!(Mood::Awful.label(), "힘들어요");
    }
}
