#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::scoring::{higher_criticism, kolmogorov_smirnov};
use crate::simd::assert_same_len;

// No vector ln in AVX2; Berk-Jones stays lane-by-lane.
pub use crate::simd::scalar::berk_jones_f64;

const LANES: usize = 4;

pub fn higher_criticism_f64(
    n_alpha: &[f64],
    no_records: &[f64],
    alpha: &[f64],
    out: &mut [f64],
) {
    assert_same_len(n_alpha, no_records, alpha, out);
    let n = out.len();
    let mut i = 0usize;
    unsafe {
        let one = _mm256_set1_pd(1.0);
        while i + LANES <= n {
            let k = _mm256_loadu_pd(n_alpha.as_ptr().add(i));
            let m = _mm256_loadu_pd(no_records.as_ptr().add(i));
            let a = _mm256_loadu_pd(alpha.as_ptr().add(i));
            let expected = _mm256_mul_pd(m, a);
            // Ordered compare: NaN lanes are inactive, matching the scalar `>`.
            let active = _mm256_cmp_pd(k, expected, _CMP_GT_OQ);
            let sd = _mm256_sqrt_pd(_mm256_mul_pd(expected, _mm256_sub_pd(one, a)));
            let score = _mm256_div_pd(_mm256_sub_pd(k, expected), sd);
            _mm256_storeu_pd(out.as_mut_ptr().add(i), _mm256_and_pd(active, score));
            i += LANES;
        }
    }
    while i < n {
        out[i] = higher_criticism::score_one(n_alpha[i], no_records[i], alpha[i]);
        i += 1;
    }
}

pub fn kolmogorov_smirnov_f64(
    n_alpha: &[f64],
    no_records: &[f64],
    alpha: &[f64],
    out: &mut [f64],
) {
    assert_same_len(n_alpha, no_records, alpha, out);
    let n = out.len();
    let mut i = 0usize;
    unsafe {
        while i + LANES <= n {
            let k = _mm256_loadu_pd(n_alpha.as_ptr().add(i));
            let m = _mm256_loadu_pd(no_records.as_ptr().add(i));
            let a = _mm256_loadu_pd(alpha.as_ptr().add(i));
            let expected = _mm256_mul_pd(m, a);
            let active = _mm256_cmp_pd(k, expected, _CMP_GT_OQ);
            let score = _mm256_div_pd(_mm256_sub_pd(k, expected), _mm256_sqrt_pd(m));
            _mm256_storeu_pd(out.as_mut_ptr().add(i), _mm256_and_pd(active, score));
            i += LANES;
        }
    }
    while i < n {
        out[i] = kolmogorov_smirnov::score_one(n_alpha[i], no_records[i], alpha[i]);
        i += 1;
    }
}

pub fn backend_name() -> &'static str {
    "avx2"
}
