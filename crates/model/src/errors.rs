use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Common error: {0}")]
    Eyre(#[from] eyre::Error),
    #[error("Record not found: {0}")]
    RecordNotFound(NaiveDate),
    #[error("Assistant is not configured")]
    AssistantNotConfigured,
}
