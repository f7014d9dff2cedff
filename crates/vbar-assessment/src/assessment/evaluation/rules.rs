use serde::{Deserialize, Serialize};

use super::super::domain::{Answer, AnswerSheet, Bucket, Questionnaire};

/// Weighted running totals for the two indicator buckets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreTotals {
    pub employment: f64,
    pub entrepreneurship: f64,
}

impl ScoreTotals {
    pub const ZERO: Self = Self {
        employment: 0.0,
        entrepreneurship: 0.0,
    };

    /// Entrepreneurship minus employment; the single scalar driving the
    /// verdict policy.
    pub fn risk_indicator(&self) -> f64 {
        self.entrepreneurship - self.employment
    }
}

/// Accumulates `weight x answer value` per question into the bucket named by
/// its category. Pure over its inputs; an all-unanswered sheet yields zeros.
///
/// Accumulation runs in category order then question order so repeated runs
/// are bit-for-bit reproducible.
pub fn score_sheet(questionnaire: &Questionnaire, sheet: &AnswerSheet) -> ScoreTotals {
    let mut totals = ScoreTotals::ZERO;

    for (category_index, category) in questionnaire.categories().iter().enumerate() {
        for (question_index, weight) in category.weights().iter().enumerate() {
            let value = sheet
                .answer(category_index, question_index)
                .map_or(0.0, Answer::value);
            let contribution = value * weight;

            match category.bucket() {
                Bucket::Employment => totals.employment += contribution,
                Bucket::Entrepreneurship => totals.entrepreneurship += contribution,
            }
        }
    }

    totals
}
