use crate::model::batch::ScanBatch;
use crate::simd;

/// `(observed - expected) / sd` under Binomial(`no_records`, `alpha`); `0.0` unless
/// `n_alpha > no_records * alpha`.
#[inline]
pub fn score_one(n_alpha: f64, no_records: f64, alpha: f64) -> f64 {
    let expected = no_records * alpha;
    if n_alpha > expected {
        (n_alpha - expected) / (expected * (1.0 - alpha)).sqrt()
    } else {
        0.0
    }
}

pub fn score_into(batch: &ScanBatch<'_>, out: &mut [f64]) {
    simd::higher_criticism_f64(batch.n_alpha(), batch.no_records(), batch.alpha(), out);
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/higher_criticism.rs"]
mod tests;
