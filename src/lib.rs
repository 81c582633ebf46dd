//! Scan-statistic scoring functions for subset scanning.
//!
//! Each score takes three equal-length vectors (`n_alpha`, `no_records`, `alpha`) and returns
//! one score per entry. Entries outside the active region score `0.0`; inputs outside the
//! documented domain propagate as IEEE-754 `inf`/`nan` instead of failing.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod scoring;
pub mod simd;

pub use config::{DomainCheck, ScoringConfig};
pub use error::ScoringError;
pub use model::batch::{DomainFault, DomainViolation, ScanBatch};
pub use model::kind::ScoreKind;
pub use model::scores::ScoreSet;
pub use scoring::{
    Scorer, score_all, score_berk_jones, score_higher_criticism, score_kolmogorov_smirnov,
    try_score_berk_jones, try_score_higher_criticism, try_score_kolmogorov_smirnov,
};
