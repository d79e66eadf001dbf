pub const DEV_FUNDAMENTALS_WEIGHT: f64 = 0.23;
pub const PROCESS_AUTOMATION_WEIGHT: f64 = 0.30;
pub const USER_INTERFACE_WEIGHT: f64 = 0.25;
pub const TEST_DEBUG_DEPLOY_WEIGHT: f64 = 0.22;

pub const PASSING_SCORE: f64 = 68.0;
pub const DEFAULT_QUESTION_COUNT: i64 = 60;
pub const DEFAULT_CATEGORY_SCORE: f64 = 50.0;

/// Weights and cutoffs for one exam. The four weights sum to 1.0.
#[derive(Debug, Clone)]
pub struct ScoringProfile {
    pub dev_fundamentals_weight: f64,
    pub process_automation_weight: f64,
    pub user_interface_weight: f64,
    pub test_debug_deploy_weight: f64,
    pub passing_score: f64,
    pub question_count: i64,
}

impl ScoringProfile {
    pub fn platform_dev_v1() -> Self {
        Self {
            dev_fundamentals_weight: DEV_FUNDAMENTALS_WEIGHT,
            process_automation_weight: PROCESS_AUTOMATION_WEIGHT,
            user_interface_weight: USER_INTERFACE_WEIGHT,
            test_debug_deploy_weight: TEST_DEBUG_DEPLOY_WEIGHT,
            passing_score: PASSING_SCORE,
            question_count: DEFAULT_QUESTION_COUNT,
        }
    }

    pub fn with_question_count(mut self, question_count: i64) -> Self {
        self.question_count = question_count;
        self
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::platform_dev_v1()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/profile.rs"]
mod tests;
