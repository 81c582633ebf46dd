use crate::scoring::{berk_jones, higher_criticism, kolmogorov_smirnov};
use crate::simd::assert_same_len;

pub fn berk_jones_f64(n_alpha: &[f64], no_records: &[f64], alpha: &[f64], out: &mut [f64]) {
    assert_same_len(n_alpha, no_records, alpha, out);
    for i in 0..out.len() {
        out[i] = berk_jones::score_one(n_alpha[i], no_records[i], alpha[i]);
    }
}

pub fn higher_criticism_f64(
    n_alpha: &[f64],
    no_records: &[f64],
    alpha: &[f64],
    out: &mut [f64],
) {
    assert_same_len(n_alpha, no_records, alpha, out);
    for i in 0..out.len() {
        out[i] = higher_criticism::score_one(n_alpha[i], no_records[i], alpha[i]);
    }
}

pub fn kolmogorov_smirnov_f64(
    n_alpha: &[f64],
    no_records: &[f64],
    alpha: &[f64],
    out: &mut [f64],
) {
    assert_same_len(n_alpha, no_records, alpha, out);
    for i in 0..out.len() {
        out[i] = kolmogorov_smirnov::score_one(n_alpha[i], no_records[i], alpha[i]);
    }
}

pub fn backend_name() -> &'static str {
    "scalar"
}

#[cfg(test)]
#[path = "../../tests/src_inline/simd/scalar.rs"]
mod tests;
