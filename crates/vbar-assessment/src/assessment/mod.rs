pub mod domain;
pub mod evaluation;
pub mod repository;
mod router;
mod service;

pub use domain::{
    Answer, AnswerOutOfRange, AnswerSheet, Bucket, Category, Questionnaire, SessionId,
};
pub use evaluation::{
    classify, score_sheet, Evaluation, EvaluationConfig, EvaluationEngine, ScoreTotals, Verdict,
    DEFAULT_RISK_THRESHOLD,
};
pub use repository::{RepositoryError, SessionRecord, SessionRepository, SessionView};
pub use router::{assessment_router, AnswerRequest};
pub use service::{AssessmentError, AssessmentService};
