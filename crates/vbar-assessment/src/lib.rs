//! Scoring and classification engine for the VBAR working-relationship
//! questionnaire, plus the configuration, telemetry, and error plumbing shared
//! with its service wrappers.
//!
//! The engine itself is pure: an immutable [`assessment::AnswerSheet`] flows
//! through [`assessment::score_sheet`] and [`assessment::classify`], and every
//! verdict is re-derived from the latest snapshot.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
