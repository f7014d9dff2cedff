use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::domain::{Answer, AnswerOutOfRange, AnswerSheet, Questionnaire, SessionId};
use super::evaluation::{EvaluationConfig, EvaluationEngine};
use super::repository::{RepositoryError, SessionRecord, SessionRepository, SessionView};

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("ses-{id:06}"))
}

/// Service composing the session store and the evaluation engine.
pub struct AssessmentService<R> {
    engine: Arc<EvaluationEngine>,
    repository: Arc<R>,
}

impl<R> AssessmentService<R>
where
    R: SessionRepository + 'static,
{
    pub fn new(repository: Arc<R>, questionnaire: Questionnaire, config: EvaluationConfig) -> Self {
        Self {
            engine: Arc::new(EvaluationEngine::new(questionnaire, config)),
            repository,
        }
    }

    pub fn engine(&self) -> &EvaluationEngine {
        &self.engine
    }

    /// Open a new session with every question unanswered.
    pub fn start(&self) -> Result<SessionView, AssessmentError> {
        let record = SessionRecord {
            session_id: next_session_id(),
            sheet: AnswerSheet::for_questionnaire(self.engine.questionnaire()),
        };

        let stored = self.repository.insert(record)?;
        Ok(self.view(stored))
    }

    /// Apply one answer and return the refreshed standing. The stored sheet is
    /// replaced wholesale with the new snapshot.
    pub fn answer(
        &self,
        session_id: &SessionId,
        category: usize,
        question: usize,
        answer: Answer,
    ) -> Result<SessionView, AssessmentError> {
        let mut record = self
            .repository
            .fetch(session_id)?
            .ok_or(RepositoryError::NotFound)?;

        record.sheet = record.sheet.with_answer(category, question, answer)?;
        self.repository.update(record.clone())?;

        Ok(self.view(record))
    }

    /// Current standing of a session for API responses.
    pub fn get(&self, session_id: &SessionId) -> Result<SessionView, AssessmentError> {
        let record = self
            .repository
            .fetch(session_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(self.view(record))
    }

    fn view(&self, record: SessionRecord) -> SessionView {
        let evaluation = self.engine.evaluate(&record.sheet);
        SessionView {
            session_id: record.session_id,
            advice: evaluation.verdict.advice(),
            evaluation,
        }
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error(transparent)]
    OutOfRange(#[from] AnswerOutOfRange),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
