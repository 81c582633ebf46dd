use super::*;

#[test]
fn test_berk_jones_branches() {
    let mut out = vec![f64::NAN; 3];
    berk_jones_f64(&[10.0, 8.0, 4.0], &[10.0; 3], &[0.5; 3], &mut out);
    assert!((out[0] - 10.0 * 2f64.ln()).abs() < 1e-12);
    assert!(out[1] > 0.0);
    assert_eq!(out[2], 0.0);
}

#[test]
fn test_inactive_entries_overwrite_out() {
    let mut out = vec![7.0; 2];
    higher_criticism_f64(&[1.0, 5.0], &[10.0; 2], &[0.5; 2], &mut out);
    assert_eq!(out, vec![0.0, 0.0]);
    let mut out = vec![7.0; 2];
    kolmogorov_smirnov_f64(&[1.0, 5.0], &[10.0; 2], &[0.5; 2], &mut out);
    assert_eq!(out, vec![0.0, 0.0]);
}
