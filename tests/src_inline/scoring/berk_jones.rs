use super::*;

#[test]
fn test_tie_uses_limit_form() {
    let score = score_one(10.0, 10.0, 0.5);
    assert!((score - 10.0 * 2f64.ln()).abs() < 1e-12);
    assert!((score - 6.9315).abs() < 1e-4);
}

#[test]
fn test_tie_ignores_expectation() {
    // alpha >= 1 puts the tie below expectation; the tie branch still applies.
    let score = score_one(4.0, 4.0, 1.5);
    assert!((score - 4.0 * (1.0f64 / 1.5).ln()).abs() < 1e-12);
    assert!(score < 0.0);
}

#[test]
fn test_active_two_term_form() {
    let score = score_one(8.0, 10.0, 0.5);
    let expected = 8.0 * (8.0f64 / 5.0).ln() + 2.0 * (2.0f64 / 5.0).ln();
    assert!((score - expected).abs() < 1e-12);
    assert!((score - 1.92745).abs() < 1e-4);
}

#[test]
fn test_inactive_and_boundary_are_zero() {
    assert_eq!(score_one(4.0, 10.0, 0.5), 0.0);
    assert_eq!(score_one(5.0, 10.0, 0.5), 0.0);
    assert_eq!(score_one(0.0, 10.0, 0.5), 0.0);
}

#[test]
fn test_all_records_empty_group() {
    assert_eq!(score_one(0.0, 0.0, 0.5), 0.0);
}

#[test]
fn test_nan_count_is_inactive() {
    assert_eq!(score_one(f64::NAN, 10.0, 0.5), 0.0);
}

#[test]
fn test_score_into_batch() {
    let n_alpha = [10.0, 8.0, 4.0];
    let no_records = [10.0; 3];
    let alpha = [0.5; 3];
    let batch = ScanBatch::new(&n_alpha, &no_records, &alpha).unwrap();
    let mut out = vec![f64::NAN; 3];
    score_into(&batch, &mut out);
    assert_eq!(out[0].to_bits(), score_one(10.0, 10.0, 0.5).to_bits());
    assert_eq!(out[1].to_bits(), score_one(8.0, 10.0, 0.5).to_bits());
    assert_eq!(out[2], 0.0);
}
