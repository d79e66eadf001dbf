use serde::Serialize;

use crate::model::profile::ScoringProfile;
use crate::model::scores::CategoryScores;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionCounts {
    pub correct: i64,
    pub incorrect: i64,
}

/// Weighted sum of the four categories. No rounding and no range checks.
pub fn compute_score(scores: &CategoryScores, profile: &ScoringProfile) -> f64 {
    let dev = scores.dev_fundamentals * profile.dev_fundamentals_weight;
    let process = scores.process_automation * profile.process_automation_weight;
    let ui = scores.user_interface * profile.user_interface_weight;
    let test = scores.test_debug_deploy * profile.test_debug_deploy_weight;
    dev + process + ui + test
}

/// `floor(score / 100 * total)` correct answers, the rest incorrect.
/// Scores outside 0..=100 are not clamped; NaN yields zero correct.
/// Counts past the `i64` range saturate instead of wrapping.
pub fn derive_question_counts(score: f64, total: i64) -> QuestionCounts {
    let correct = ((score / 100.0) * total as f64).floor() as i64;
    QuestionCounts {
        correct,
        incorrect: total.saturating_sub(correct),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/score.rs"]
mod tests;
