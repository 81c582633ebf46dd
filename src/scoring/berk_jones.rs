//! Berk-Jones score: the binomial log-likelihood ratio of the observed proportion
//! `n_alpha / no_records` against the null proportion `alpha`.

use crate::model::batch::ScanBatch;
use crate::simd;

/// Score for one record group.
///
/// * tie (`n_alpha == no_records`): `no_records * ln(1 / alpha)`
/// * active (`n_alpha > no_records * alpha`):
///   `n_alpha * ln(n_alpha / (no_records * alpha))
///    + (no_records - n_alpha) * ln((no_records - n_alpha) / (no_records * (1 - alpha)))`
/// * otherwise `0.0`
///
/// The tie branch is the limit of the active form; evaluating the second term there would be
/// `0 * ln(0)`, which is NaN in floating point.
#[inline]
pub fn score_one(n_alpha: f64, no_records: f64, alpha: f64) -> f64 {
    if n_alpha == no_records {
        return no_records * (1.0 / alpha).ln();
    }
    if n_alpha > no_records * alpha {
        let rest = no_records - n_alpha;
        return n_alpha * (n_alpha / (no_records * alpha)).ln()
            + rest * (rest / (no_records * (1.0 - alpha))).ln();
    }
    0.0
}

pub fn score_into(batch: &ScanBatch<'_>, out: &mut [f64]) {
    simd::berk_jones_f64(batch.n_alpha(), batch.no_records(), batch.alpha(), out);
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/berk_jones.rs"]
mod tests;
