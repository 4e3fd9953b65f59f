use crate::store::RecordStore;
use chrono::NaiveDate;
use log::info;
use model::{
    errors::JournalError,
    record::{DailyRecord, Mood},
    user::UserProfile,
};
use parking_lot::RwLock;
use std::sync::Arc;

/// Experience granted for every saved daily record.
pub const RECORD_EXP: u32 = 50;

#[derive(Clone)]
pub struct Records {
    store: RecordStore,
    profile: Arc<RwLock<UserProfile>>,
}

impl Records {
    pub(crate) fn new(store: RecordStore, profile: Arc<RwLock<UserProfile>>) -> Self {
        Self { store, profile }
    }

    /// Save a day's entry. Saving the same date twice replaces the earlier
    /// entry; either way the user earns record exp.
    pub fn upsert(&self, record: DailyRecord) {
        let date = record.date;
        let replaced = self.store.upsert(record);
        info!(
            "Record for {} {}",
            date,
            if replaced { "replaced" } else { "saved" }
        );

        self.profile.write().gain_exp(RECORD_EXP);
    }

    pub fn get(&self, date: NaiveDate) -> Option<DailyRecord> {
        self.store.get(date)
    }

    pub fn require(&self, date: NaiveDate) -> Result<DailyRecord, JournalError> {
        self.store
            .get(date)
            .ok_or(JournalError::RecordNotFound(date))
    }

    pub fn count(&self) -> usize {
        self.store.len()
    }

    /// Save-time score heuristic carried over from the product: baseline 70,
    /// +5 per stool event, +20 on a great day. Deliberately unclamped, so it
    /// can exceed 100; aggregation tolerates that.
    pub fn suggested_score(stool_count: u32, mood: Mood) -> i32 {
        70 + stool_count as i32 * 5 + if mood == Mood::Great { 20 } else { 0 }
    }

    /// Demo journal the app boots with.
    pub fn seed_demo(&self) {
        let demo = [
            (10, Mood::Great, 85, 1, "에너지가 넘치는 하루였어요!"),
            (11, Mood::Good, 76, 1, "무난한 하루였습니다."),
            (12, Mood::Okay, 62, 0, "약간 더부룩해요."),
            (13, Mood::Bad, 45, 0, "배가 좀 아프네요."),
            (14, Mood::Great, 92, 2, "완벽한 하루!"),
        ];
        for (day, mood, score, stool_count, memo) in demo {
            let date = NaiveDate::from_ymd_opt(2025, 5, day).unwrap();
            self.store
                .upsert(DailyRecord::new(date, mood, score, stool_count, memo));
        }
    }
}
