use std::sync::Arc;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    #[serde(alias = "Id")]
    pub id: u64,
    #[serde(alias = "Score")]
    pub score: f64,
}

impl Attempt {
    pub fn new(id: u64, score: f64) -> Self {
        Self { id, score }
    }
}

pub fn default_seed() -> Vec<Attempt> {
    vec![
        Attempt::new(1, 50.0),
        Attempt::new(2, 68.0),
        Attempt::new(3, 70.0),
    ]
}

/// Ordered attempt list with a monotonic id counter.
///
/// Every mutation publishes a fresh slice; clones taken earlier keep
/// pointing at the old one. `revision` bumps only when the contents change.
#[derive(Debug, Clone)]
pub struct AttemptHistory {
    attempts: Arc<[Attempt]>,
    last_id: u64,
    revision: u64,
}

impl AttemptHistory {
    /// The counter starts at the seed's length, not its max id, so a
    /// non-contiguous seed can hand out an id that is already present.
    pub fn new(seed: Vec<Attempt>) -> Self {
        let last_id = seed.len() as u64;
        Self {
            attempts: seed.into(),
            last_id,
            revision: 0,
        }
    }

    pub fn record_attempt(&mut self, score: f64) -> Attempt {
        self.last_id += 1;
        let attempt = Attempt::new(self.last_id, score);

        let mut next = Vec::with_capacity(self.attempts.len() + 1);
        next.extend_from_slice(&self.attempts);
        next.push(attempt);
        self.publish(next);

        attempt
    }

    /// Removes every attempt carrying `id`. Unknown ids are ignored.
    pub fn delete_attempt(&mut self, id: u64) -> usize {
        let next: Vec<Attempt> = self
            .attempts
            .iter()
            .filter(|a| a.id != id)
            .copied()
            .collect();
        let removed = self.attempts.len() - next.len();
        if removed > 0 {
            self.publish(next);
        }
        removed
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    fn publish(&mut self, next: Vec<Attempt>) {
        self.attempts = next.into();
        self.revision += 1;
    }
}

impl Default for AttemptHistory {
    fn default() -> Self {
        Self::new(default_seed())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/attempt.rs"]
mod tests;
