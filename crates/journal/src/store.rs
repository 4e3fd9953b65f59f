use chrono::NaiveDate;
use model::record::DailyRecord;
use parking_lot::RwLock;
use std::{collections::BTreeMap, sync::Arc};

pub type Snapshot = Arc<BTreeMap<NaiveDate, DailyRecord>>;

/// In-memory, date-keyed record store. Writers never touch a published map:
/// an upsert clones the current map, inserts, and swaps the `Arc`, so any
/// snapshot handed out earlier stays valid for its whole iteration.
#[derive(Clone, Default)]
pub struct RecordStore {
    inner: Arc<RwLock<Snapshot>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.inner.read().clone()
    }

    /// Replace-by-date. Returns true when an existing record was replaced.
    pub fn upsert(&self, record: DailyRecord) -> bool {
        let mut guard = self.inner.write();
        let mut map = BTreeMap::clone(guard.as_ref());
        let replaced = map.insert(record.date, record).is_some();
        *guard = Arc::new(map);
        replaced
    }

    pub fn get(&self, date: NaiveDate) -> Option<DailyRecord> {
        self.inner.read().get(&date).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
