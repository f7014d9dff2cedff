use serde::{Deserialize, Serialize};

/// Magnitude the risk indicator must exceed, in either direction, before the
/// verdict leaves `Undetermined`.
pub const DEFAULT_RISK_THRESHOLD: f64 = 2.0;

/// Tunables for the verdict policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub risk_threshold: f64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            risk_threshold: DEFAULT_RISK_THRESHOLD,
        }
    }
}
