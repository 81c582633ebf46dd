use crate::model::batch::ScanBatch;
use crate::simd;

#[inline]
pub fn score_one(n_alpha: f64, no_records: f64, alpha: f64) -> f64 {
    let expected = no_records * alpha;
    if n_alpha > expected {
        (n_alpha - expected) / no_records.sqrt()
    } else {
        0.0
    }
}

pub fn score_into(batch: &ScanBatch<'_>, out: &mut [f64]) {
    simd::kolmogorov_smirnov_f64(batch.n_alpha(), batch.no_records(), batch.alpha(), out);
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/kolmogorov_smirnov.rs"]
mod tests;
