use serde::{Deserialize, Serialize};

use crate::model::profile::DEFAULT_CATEGORY_SCORE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    DevFundamentals,
    ProcessAutomation,
    UserInterface,
    TestDebugDeploy,
}

pub fn category_order() -> &'static [Category] {
    &[
        Category::DevFundamentals,
        Category::ProcessAutomation,
        Category::UserInterface,
        Category::TestDebugDeploy,
    ]
}

impl Category {
    /// Maps an input field name to its category. Accepts the form field
    /// names (`processAuto`, ...) as well as snake_case names.
    pub fn from_field_name(name: &str) -> Option<Self> {
        match name.trim() {
            "devFundamentals" | "dev_fundamentals" => Some(Self::DevFundamentals),
            "processAuto" | "processAutomation" | "process_automation" => {
                Some(Self::ProcessAutomation)
            }
            "userInterface" | "user_interface" => Some(Self::UserInterface),
            "testDebugDeploy" | "test_debug_deploy" => Some(Self::TestDebugDeploy),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::DevFundamentals => "Developer Fundamentals",
            Self::ProcessAutomation => "Process Automation and Logic",
            Self::UserInterface => "User Interface",
            Self::TestDebugDeploy => "Testing, Debugging, and Deployment",
        }
    }
}

/// Per-category percentages. Values outside 0..=100 are kept as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub dev_fundamentals: f64,
    pub process_automation: f64,
    pub user_interface: f64,
    pub test_debug_deploy: f64,
}

impl CategoryScores {
    pub fn new(
        dev_fundamentals: f64,
        process_automation: f64,
        user_interface: f64,
        test_debug_deploy: f64,
    ) -> Self {
        Self {
            dev_fundamentals,
            process_automation,
            user_interface,
            test_debug_deploy,
        }
    }

    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::DevFundamentals => self.dev_fundamentals,
            Category::ProcessAutomation => self.process_automation,
            Category::UserInterface => self.user_interface,
            Category::TestDebugDeploy => self.test_debug_deploy,
        }
    }

    pub fn set(&mut self, category: Category, value: f64) {
        let slot = match category {
            Category::DevFundamentals => &mut self.dev_fundamentals,
            Category::ProcessAutomation => &mut self.process_automation,
            Category::UserInterface => &mut self.user_interface,
            Category::TestDebugDeploy => &mut self.test_debug_deploy,
        };
        *slot = value;
    }
}

impl Default for CategoryScores {
    fn default() -> Self {
        Self::new(
            DEFAULT_CATEGORY_SCORE,
            DEFAULT_CATEGORY_SCORE,
            DEFAULT_CATEGORY_SCORE,
            DEFAULT_CATEGORY_SCORE,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/scores.rs"]
mod tests;
