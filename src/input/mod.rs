use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::model::attempt::Attempt;

pub mod script;

/// Category text that does not read as a finite number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot read {text:?} as a score")]
pub struct CoercionFailure {
    pub text: String,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid seed history {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Coercion(#[from] CoercionFailure),
    #[error("unknown category field: {0}")]
    UnknownField(String),
}

/// Numeric coercion for a category field. Blank text reads as zero, like an
/// emptied number input.
pub fn coerce_score(text: &str) -> Result<f64, CoercionFailure> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CoercionFailure {
            text: text.to_string(),
        }),
    }
}

pub fn parse_seed_history(json: &str) -> Result<Vec<Attempt>, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn load_seed_history(path: &Path) -> Result<Vec<Attempt>, InputError> {
    let content = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let seed = parse_seed_history(&content).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), attempts = seed.len(), "loaded seed history");
    Ok(seed)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
