#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use crate::scoring::{higher_criticism, kolmogorov_smirnov};
use crate::simd::assert_same_len;

pub use crate::simd::scalar::berk_jones_f64;

const LANES: usize = 2;

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
        let one = vdupq_n_f64(1.0);
        let zero = vdupq_n_f64(0.0);
        while i + LANES <= n {
            let k = vld1q_f64(n_alpha.as_ptr().add(i));
            let m = vld1q_f64(no_records.as_ptr().add(i));
            let a = vld1q_f64(alpha.as_ptr().add(i));
            let expected = vmulq_f64(m, a);
            let active = vcgtq_f64(k, expected);
            let sd = vsqrtq_f64(vmulq_f64(expected, vsubq_f64(one, a)));
            let score = vdivq_f64(vsubq_f64(k, expected), sd);
            vst1q_f64(out.as_mut_ptr().add(i), vbslq_f64(active, score, zero));
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
        let zero = vdupq_n_f64(0.0);
        while i + LANES <= n {
            let k = vld1q_f64(n_alpha.as_ptr().add(i));
            let m = vld1q_f64(no_records.as_ptr().add(i));
            let a = vld1q_f64(alpha.as_ptr().add(i));
            let expected = vmulq_f64(m, a);
            let active = vcgtq_f64(k, expected);
            let score = vdivq_f64(vsubq_f64(k, expected), vsqrtq_f64(m));
            vst1q_f64(out.as_mut_ptr().add(i), vbslq_f64(active, score, zero));
            i += LANES;
        }
    }
    while i < n {
        out[i] = kolmogorov_smirnov::score_one(n_alpha[i], no_records[i], alpha[i]);
        i += 1;
    }
}

pub fn backend_name() -> &'static str {
    "neon"
}
