mod config;
mod policy;
mod rules;

pub use config::{EvaluationConfig, DEFAULT_RISK_THRESHOLD};
pub use policy::{classify, Verdict};
pub use rules::{score_sheet, ScoreTotals};

use serde::{Deserialize, Serialize};

use super::domain::{AnswerSheet, Questionnaire};

/// Stateless evaluator binding a questionnaire to the verdict policy.
pub struct EvaluationEngine {
    questionnaire: Questionnaire,
    config: EvaluationConfig,
}

impl EvaluationEngine {
    pub fn new(questionnaire: Questionnaire, config: EvaluationConfig) -> Self {
        Self {
            questionnaire,
            config,
        }
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    /// Score the sheet and classify the result. Recomputed from scratch on
    /// every call; nothing is cached or mutated.
    pub fn evaluate(&self, sheet: &AnswerSheet) -> Evaluation {
        let totals = rules::score_sheet(&self.questionnaire, sheet);
        let total_questions = self.questionnaire.total_questions();
        let answered_count = sheet.answered_count();
        let verdict = policy::classify(totals, total_questions, answered_count, &self.config);

        Evaluation {
            risk_indicator: totals.risk_indicator(),
            totals,
            total_questions,
            answered_count,
            verdict,
        }
    }
}

/// Evaluation output describing totals, completion, and the verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub totals: ScoreTotals,
    pub risk_indicator: f64,
    pub total_questions: usize,
    pub answered_count: usize,
    pub verdict: Verdict,
}

#[cfg(test)]
mod tests {
    use super::super::domain::{Answer, AnswerSheet, Questionnaire};
    use super::*;

    #[test]
    fn fresh_sheet_evaluates_to_insufficient_data() {
        let engine = EvaluationEngine::new(Questionnaire::standard(), EvaluationConfig::default());
        let sheet = AnswerSheet::for_questionnaire(engine.questionnaire());

        let evaluation = engine.evaluate(&sheet);
        assert_eq!(evaluation.totals, ScoreTotals::ZERO);
        assert_eq!(evaluation.answered_count, 0);
        assert_eq!(evaluation.total_questions, 14);
        assert_eq!(evaluation.verdict, Verdict::InsufficientData);
    }

    #[test]
    fn verdict_moves_back_and_forth_as_answers_change() {
        let engine = EvaluationEngine::new(Questionnaire::standard(), EvaluationConfig::default());
        let mut sheet = AnswerSheet::for_questionnaire(engine.questionnaire());

        // Answer everything "no": complete, but no evidence either way.
        for (category_index, category) in engine.questionnaire().categories().iter().enumerate() {
            for question_index in 0..category.question_count() {
                sheet = sheet
                    .with_answer(category_index, question_index, Answer::No)
                    .expect("slot exists");
            }
        }
        assert_eq!(engine.evaluate(&sheet).verdict, Verdict::Undetermined);

        // Flip the employment indicators to "yes": verdict swings.
        for question_index in 0..5 {
            sheet = sheet
                .with_answer(0, question_index, Answer::Yes)
                .expect("slot exists");
        }
        let evaluation = engine.evaluate(&sheet);
        assert_eq!(evaluation.risk_indicator, -7.0);
        assert_eq!(evaluation.verdict, Verdict::LeansEmployment);

        // Flip the entrepreneurship indicators as well: back to balance.
        for category_index in [1, 2] {
            let count = engine.questionnaire().categories()[category_index].question_count();
            for question_index in 0..count {
                sheet = sheet
                    .with_answer(category_index, question_index, Answer::Yes)
                    .expect("slot exists");
            }
        }
        let evaluation = engine.evaluate(&sheet);
        assert_eq!(evaluation.risk_indicator, 6.0 - 7.0 + 6.0);
        assert_eq!(evaluation.verdict, Verdict::LeansSelfEmployment);
    }
}
