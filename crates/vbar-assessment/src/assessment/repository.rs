use serde::{Deserialize, Serialize};

use super::domain::{AnswerSheet, SessionId};
use super::evaluation::Evaluation;

/// Repository record for one assessment session. Only the answer sheet is
/// stored; scores and verdicts are derived on every read, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: SessionId,
    pub sheet: AnswerSheet,
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait SessionRepository: Send + Sync {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError>;
    fn update(&self, record: SessionRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError>;
}

/// Error enumeration for session store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

/// Serialized representation of a session's current standing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub evaluation: Evaluation,
    pub advice: &'static str,
}
