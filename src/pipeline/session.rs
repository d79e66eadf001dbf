use tracing::{debug, info};

use crate::input::{InputError, coerce_score};
use crate::model::attempt::{Attempt, AttemptHistory};
use crate::model::profile::{DEFAULT_CATEGORY_SCORE, ScoringProfile};
use crate::model::scores::{Category, CategoryScores};
use crate::model::verdict::Verdict;
use crate::pipeline::classify::classify;
use crate::pipeline::score::{QuestionCounts, compute_score, derive_question_counts};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubmitOutcome {
    pub attempt: Attempt,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttemptView {
    pub attempt: Attempt,
    pub counts: QuestionCounts,
}

/// Owns all calculator state for one user session.
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    profile: ScoringProfile,
    scores: CategoryScores,
    history: AttemptHistory,
    certification_score: f64,
    verdict: Option<Verdict>,
}

impl CalculatorSession {
    pub fn new(profile: ScoringProfile) -> Self {
        Self::with_history(profile, AttemptHistory::default())
    }

    pub fn with_seed(profile: ScoringProfile, seed: Vec<Attempt>) -> Self {
        Self::with_history(profile, AttemptHistory::new(seed))
    }

    fn with_history(profile: ScoringProfile, history: AttemptHistory) -> Self {
        Self {
            profile,
            scores: CategoryScores::default(),
            history,
            // Shown before the first submit.
            certification_score: DEFAULT_CATEGORY_SCORE,
            verdict: None,
        }
    }

    /// Applies raw text from a named input field. On error the session is
    /// left untouched.
    pub fn set_category(&mut self, field: &str, text: &str) -> Result<Category, InputError> {
        let category = Category::from_field_name(field)
            .ok_or_else(|| InputError::UnknownField(field.to_string()))?;
        let value = coerce_score(text)?;
        self.set_score(category, value);
        Ok(category)
    }

    pub fn set_score(&mut self, category: Category, value: f64) {
        debug!(?category, value, "category score updated");
        self.scores.set(category, value);
    }

    pub fn set_scores(&mut self, scores: CategoryScores) {
        self.scores = scores;
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let score = compute_score(&self.scores, &self.profile);
        let verdict = classify(score, &self.profile);
        self.certification_score = score;
        self.verdict = Some(verdict);
        let attempt = self.history.record_attempt(score);
        info!(
            id = attempt.id,
            score,
            verdict = verdict.as_str(),
            "attempt recorded"
        );
        SubmitOutcome { attempt, verdict }
    }

    pub fn delete_attempt(&mut self, id: u64) -> usize {
        let removed = self.history.delete_attempt(id);
        if removed > 0 {
            info!(id, removed, "attempt deleted");
        } else {
            debug!(id, "delete ignored; no such attempt");
        }
        removed
    }

    pub fn attempt_views(&self) -> Vec<AttemptView> {
        self.history
            .attempts()
            .iter()
            .map(|&attempt| AttemptView {
                attempt,
                counts: derive_question_counts(attempt.score, self.profile.question_count),
            })
            .collect()
    }

    pub fn history(&self) -> &AttemptHistory {
        &self.history
    }

    pub fn scores(&self) -> &CategoryScores {
        &self.scores
    }

    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    pub fn certification_score(&self) -> f64 {
        self.certification_score
    }

    /// `None` until the first submit.
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/session.rs"]
mod tests;
