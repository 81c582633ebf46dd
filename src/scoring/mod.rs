pub mod berk_jones;
pub mod higher_criticism;
pub mod kolmogorov_smirnov;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::config::{DomainCheck, ScoringConfig};
use crate::error::ScoringError;
use crate::model::batch::ScanBatch;
use crate::model::kind::ScoreKind;
use crate::model::scores::ScoreSet;
use crate::simd;

/// Berk-Jones scores, one per entry.
///
/// # Panics
///
/// If the three inputs differ in length. Use [`try_score_berk_jones`] to get an error instead.
pub fn score_berk_jones(n_alpha: &[f64], no_records: &[f64], alpha: &[f64]) -> Vec<f64> {
    score_or_panic(ScoreKind::BerkJones, n_alpha, no_records, alpha)
}

/// Higher Criticism scores, one per entry.
///
/// # Panics
///
/// If the three inputs differ in length.
pub fn score_higher_criticism(n_alpha: &[f64], no_records: &[f64], alpha: &[f64]) -> Vec<f64> {
    score_or_panic(ScoreKind::HigherCriticism, n_alpha, no_records, alpha)
}

/// Kolmogorov-Smirnov scores, one per entry.
///
/// # Panics
///
/// If the three inputs differ in length.
pub fn score_kolmogorov_smirnov(
    n_alpha: &[f64],
    no_records: &[f64],
    alpha: &[f64],
) -> Vec<f64> {
    score_or_panic(ScoreKind::KolmogorovSmirnov, n_alpha, no_records, alpha)
}

pub fn try_score_berk_jones(
    n_alpha: &[f64],
    no_records: &[f64],
    alpha: &[f64],
) -> Result<Vec<f64>, ScoringError> {
    let batch = ScanBatch::new(n_alpha, no_records, alpha)?;
    Ok(ScoreKind::BerkJones.score(&batch))
}

pub fn try_score_higher_criticism(
    n_alpha: &[f64],
    no_records: &[f64],
    alpha: &[f64],
) -> Result<Vec<f64>, ScoringError> {
    let batch = ScanBatch::new(n_alpha, no_records, alpha)?;
    Ok(ScoreKind::HigherCriticism.score(&batch))
}

pub fn try_score_kolmogorov_smirnov(
    n_alpha: &[f64],
    no_records: &[f64],
    alpha: &[f64],
) -> Result<Vec<f64>, ScoringError> {
    let batch = ScanBatch::new(n_alpha, no_records, alpha)?;
    Ok(ScoreKind::KolmogorovSmirnov.score(&batch))
}

pub fn score_all(batch: &ScanBatch<'_>) -> ScoreSet {
    let mut set = ScoreSet::zeros(batch.len());
    for kind in ScoreKind::ALL {
        kind.score_into(batch, set.get_mut(kind));
    }
    set
}

fn score_or_panic(
    kind: ScoreKind,
    n_alpha: &[f64],
    no_records: &[f64],
    alpha: &[f64],
) -> Vec<f64> {
    match ScanBatch::new(n_alpha, no_records, alpha) {
        Ok(batch) => kind.score(&batch),
        Err(err) => panic!("{kind}: {err}"),
    }
}

/// Configured evaluator: applies the [`DomainCheck`] policy, then scores on the calling
/// thread or across the rayon pool depending on batch size. Output is identical either way.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    config: ScoringConfig,
}

impl Scorer {
    pub fn new(config: ScoringConfig) -> Result<Self, ScoringError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(
        &self,
        kind: ScoreKind,
        batch: &ScanBatch<'_>,
    ) -> Result<Vec<f64>, ScoringError> {
        self.check_domain(batch)?;
        let mut out = vec![0.0; batch.len()];
        self.evaluate(kind, batch, &mut out);
        Ok(out)
    }

    pub fn score_all(&self, batch: &ScanBatch<'_>) -> Result<ScoreSet, ScoringError> {
        self.check_domain(batch)?;
        let mut set = ScoreSet::zeros(batch.len());
        for kind in ScoreKind::ALL {
            self.evaluate(kind, batch, set.get_mut(kind));
        }
        Ok(set)
    }

    fn evaluate(&self, kind: ScoreKind, batch: &ScanBatch<'_>, out: &mut [f64]) {
        let parallel = batch.len() >= self.config.parallel_min_len;
        debug!(
            kind = %kind,
            len = batch.len(),
            backend = simd::backend_name(),
            parallel,
            "scoring batch"
        );
        if !parallel {
            kind.score_into(batch, out);
            return;
        }
        let chunk = self.config.chunk_size;
        out.par_chunks_mut(chunk)
            .enumerate()
            .for_each(|(idx, dst)| {
                let start = idx * chunk;
                kind.score_into(&batch.slice(start..start + dst.len()), dst);
            });
    }

    fn check_domain(&self, batch: &ScanBatch<'_>) -> Result<(), ScoringError> {
        match self.config.domain_check {
            DomainCheck::Off => Ok(()),
            DomainCheck::Warn => {
                let mut violations = batch.domain_violations();
                if let Some(first) = violations.next() {
                    let count = 1 + violations.count();
                    warn!(
                        count,
                        first = %first,
                        "batch has entries outside the scoring domain; inf/nan scores propagate"
                    );
                }
                Ok(())
            }
            DomainCheck::Reject => match batch.domain_violations().next() {
                Some(violation) => Err(ScoringError::Domain(violation)),
                None => Ok(()),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/mod.rs"]
mod tests;
