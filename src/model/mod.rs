pub mod attempt;
pub mod profile;
pub mod scores;
pub mod verdict;
