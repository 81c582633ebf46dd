use thiserror::Error;

use crate::model::batch::DomainViolation;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error(
        "input length mismatch: n_alpha={n_alpha}, no_records={no_records}, alpha={alpha}"
    )]
    LengthMismatch {
        n_alpha: usize,
        no_records: usize,
        alpha: usize,
    },
    #[error("input outside scoring domain: {0}")]
    Domain(DomainViolation),
    #[error("invalid scoring config: {0}")]
    InvalidConfig(String),
    #[error("unknown score kind: {0} (use berk_jones|higher_criticism|kolmogorov_smirnov)")]
    UnknownScoreKind(String),
}
