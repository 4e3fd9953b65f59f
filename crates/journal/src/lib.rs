use ai::GutAssistant;
use model::{errors::JournalError, user::UserProfile};
use parking_lot::RwLock;
use service::{assistant::Assistant, records::Records, statistics::Statistics};
use std::sync::Arc;
use store::RecordStore;

pub mod service;
mod store;

/// Facade over the in-memory journal: the record store plus the services
/// built on top of it. Cheap to clone; all clones share the same state.
#[derive(Clone)]
pub struct Journal {
    pub records: Records,
    pub statistics: Statistics,
    pub profile: Arc<RwLock<UserProfile>>,
    assistant: Option<Assistant>,
}

impl Journal {
    pub fn new(profile: UserProfile, ai: Option<Arc<dyn GutAssistant>>) -> Self {
        let store = RecordStore::new();
        let profile = Arc::new(RwLock::new(profile));
        Journal {
            records: Records::new(store.clone(), profile.clone()),
            statistics: Statistics::new(store),
            assistant: ai.map(Assistant::new),
            profile,
        }
    }

    pub fn assistant(&self) -> Result<&Assistant, JournalError> {
        self.assistant
            .as_ref()
            .ok_or(JournalError::AssistantNotConfigured)
    }

    pub fn has_assistant(&self) -> bool {
        self.assistant.is_some()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_journal_without_assistant() {
        let journal = Journal::new(UserProfile::new("민수"), None);
        assert!(!journal.has_assistant());
        assert!(matches!(
            journal.assistant(),
            Err(JournalError::AssistantNotConfigured)
        ));
    }

    #[test]
    fn test_clones_share_state() {
        let journal = Journal::new(UserProfile::new("민수"), None);
        let clone = journal.clone();

        clone.records.seed_demo();
        assert_eq!(journal.records.count(), 5);
    }
}
