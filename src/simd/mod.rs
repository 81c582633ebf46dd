//! Element-wise score kernels. The backend is fixed at compile time from the enabled target
//! features; every backend writes bit-identical results to `scalar`.

#[inline]
pub fn berk_jones_f64(n_alpha: &[f64], no_records: &[f64], alpha: &[f64], out: &mut [f64]) {
    backend::berk_jones_f64(n_alpha, no_records, alpha, out)
}

#[inline]
pub fn higher_criticism_f64(
    n_alpha: &[f64],
    no_records: &[f64],
    alpha: &[f64],
    out: &mut [f64],
) {
    backend::higher_criticism_f64(n_alpha, no_records, alpha, out)
}

#[inline]
pub fn kolmogorov_smirnov_f64(
    n_alpha: &[f64],
    no_records: &[f64],
    alpha: &[f64],
    out: &mut [f64],
) {
    backend::kolmogorov_smirnov_f64(n_alpha, no_records, alpha, out)
}

#[inline]
pub fn backend_name() -> &'static str {
    backend::backend_name()
}

/// Kernels read `out.len()` entries from every input.
#[inline]
fn assert_same_len(n_alpha: &[f64], no_records: &[f64], alpha: &[f64], out: &[f64]) {
    let n = out.len();
    assert!(
        n_alpha.len() == n && no_records.len() == n && alpha.len() == n,
        "kernel length mismatch: n_alpha={}, no_records={}, alpha={}, out={}",
        n_alpha.len(),
        no_records.len(),
        alpha.len(),
        n
    );
}

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
mod backend {
    pub use crate::simd::avx2::*;
}

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
mod backend {
    pub use crate::simd::neon::*;
}

#[cfg(not(any(
    all(target_arch = "x86_64", target_feature = "avx2"),
    all(target_arch = "aarch64", target_feature = "neon"),
)))]
mod backend {
    pub use crate::simd::scalar::*;
}

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub mod avx2;
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
pub mod neon;
pub mod scalar;

#[cfg(test)]
#[path = "../../tests/src_inline/simd/mod.rs"]
mod tests;
