use serde::Serialize;

use crate::model::scores::CategoryScores;
use crate::model::verdict::Verdict;
use crate::pipeline::session::CalculatorSession;

pub mod json;
pub mod text;

#[derive(Debug, Clone, Serialize)]
pub struct AttemptRow {
    pub id: u64,
    pub score: f64,
    pub correct: i64,
    pub incorrect: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub tool: String,
    pub version: String,
    pub questions: i64,
    pub passing_score: f64,
    pub certification_score: f64,
    pub verdict: Option<Verdict>,
    pub show_resources: bool,
    pub show_good_job: bool,
    pub categories: CategoryScores,
    pub attempts: Vec<AttemptRow>,
}

impl SessionReport {
    pub fn from_session(session: &CalculatorSession) -> Self {
        let attempts = session
            .attempt_views()
            .into_iter()
            .map(|view| AttemptRow {
                id: view.attempt.id,
                score: view.attempt.score,
                correct: view.counts.correct,
                incorrect: view.counts.incorrect,
            })
            .collect();

        let verdict = session.verdict();
        Self {
            tool: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            questions: session.profile().question_count,
            passing_score: session.profile().passing_score,
            certification_score: session.certification_score(),
            verdict,
            show_resources: verdict.is_some_and(Verdict::shows_resources),
            show_good_job: verdict.is_some_and(Verdict::shows_good_job),
            categories: *session.scores(),
            attempts,
        }
    }
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
