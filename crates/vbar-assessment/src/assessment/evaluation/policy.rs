use serde::{Deserialize, Serialize};

use super::config::EvaluationConfig;
use super::rules::ScoreTotals;

/// Four-way verdict derived from the aggregate totals.
///
/// A pure decision table: nothing is stored between evaluations, so the
/// verdict moves freely in any direction as answers change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Fewer than half the questions answered.
    InsufficientData,
    /// Evidence favors an employment relationship.
    LeansEmployment,
    /// Ambiguous or borderline.
    Undetermined,
    /// Evidence favors genuine self-employment.
    LeansSelfEmployment,
}

impl Verdict {
    pub const fn label(self) -> &'static str {
        match self {
            Verdict::InsufficientData => "insufficient_data",
            Verdict::LeansEmployment => "leans_employment",
            Verdict::Undetermined => "undetermined",
            Verdict::LeansSelfEmployment => "leans_self_employment",
        }
    }

    /// User-facing advisory text, kept in the original Dutch wording.
    pub const fn advice(self) -> &'static str {
        match self {
            Verdict::InsufficientData => "Nog te weinig vragen beantwoord",
            Verdict::LeansEmployment => {
                "Let op! Waarschijnlijk sprake van een dienstverband."
            }
            Verdict::Undetermined => "We twijfelen nog..",
            Verdict::LeansSelfEmployment => {
                "Prima! Waarschijnlijk geen sprake van een dienstverband."
            }
        }
    }
}

/// Decision table, first match wins:
/// completion gate, then the risk indicator against the threshold. Both
/// boundary values (exactly +/- threshold) stay `Undetermined`.
pub fn classify(
    totals: ScoreTotals,
    total_questions: usize,
    answered_count: usize,
    config: &EvaluationConfig,
) -> Verdict {
    // Integer form of `answered < total / 2`: on odd totals, answering
    // floor(total / 2) questions is still insufficient.
    if answered_count * 2 < total_questions {
        return Verdict::InsufficientData;
    }

    let risk_indicator = totals.risk_indicator();
    if risk_indicator > config.risk_threshold {
        return Verdict::LeansSelfEmployment;
    }
    if risk_indicator < -config.risk_threshold {
        return Verdict::LeansEmployment;
    }
    Verdict::Undetermined
}
