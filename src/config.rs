use serde::{Deserialize, Serialize};

use crate::error::ScoringError;

/// What a [`Scorer`](crate::Scorer) does with entries outside the scoring domain
/// (`no_records > 0`, `0 < alpha < 1`, `0 <= n_alpha <= no_records`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainCheck {
    Off,
    #[default]
    Warn,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Batches at least this long are split across the rayon pool.
    pub parallel_min_len: usize,
    pub chunk_size: usize,
    pub domain_check: DomainCheck,
}

impl ScoringConfig {
    pub fn default_v1() -> Self {
        Self {
            parallel_min_len: 1 << 16,
            chunk_size: 1 << 13,
            domain_check: DomainCheck::Warn,
        }
    }

    pub fn sequential() -> Self {
        Self {
            parallel_min_len: usize::MAX,
            ..Self::default_v1()
        }
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        if self.chunk_size == 0 {
            return Err(ScoringError::InvalidConfig(
                "chunk_size must be positive".to_string(),
            ));
        }
        if self.parallel_min_len == 0 {
            return Err(ScoringError::InvalidConfig(
                "parallel_min_len must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::default_v1()
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
