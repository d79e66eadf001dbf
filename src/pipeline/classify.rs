use crate::model::profile::ScoringProfile;
use crate::model::verdict::Verdict;

/// Strictly below the passing score fails; the cutoff itself passes.
pub fn classify(score: f64, profile: &ScoringProfile) -> Verdict {
    if score < profile.passing_score {
        Verdict::Fail
    } else {
        Verdict::Pass
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/classify.rs"]
mod tests;
