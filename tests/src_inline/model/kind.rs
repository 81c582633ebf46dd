use super::*;

#[test]
fn test_parse_aliases() {
    assert_eq!("bj".parse::<ScoreKind>().unwrap(), ScoreKind::BerkJones);
    assert_eq!("Berk-Jones".parse::<ScoreKind>().unwrap(), ScoreKind::BerkJones);
    assert_eq!(" HC ".parse::<ScoreKind>().unwrap(), ScoreKind::HigherCriticism);
    assert_eq!(
        "kolmogorov_smirnov".parse::<ScoreKind>().unwrap(),
        ScoreKind::KolmogorovSmirnov
    );
}

#[test]
fn test_parse_unknown() {
    let err = "anderson".parse::<ScoreKind>().unwrap_err();
    assert_eq!(err, ScoringError::UnknownScoreKind("anderson".to_string()));
}

#[test]
fn test_display_roundtrips_through_parse() {
    for kind in ScoreKind::ALL {
        assert_eq!(kind.to_string().parse::<ScoreKind>().unwrap(), kind);
    }
}

#[test]
fn test_serde_names() {
    let text = serde_json::to_string(&ScoreKind::HigherCriticism).unwrap();
    assert_eq!(text, "\"higher_criticism\"");
    let kind: ScoreKind = serde_json::from_str("\"berk_jones\"").unwrap();
    assert_eq!(kind, ScoreKind::BerkJones);
}

#[test]
fn test_score_matches_score_one() {
    let n_alpha = [8.0, 4.0, 10.0, 3.0, 7.0];
    let no_records = [10.0, 10.0, 10.0, 4.0, 9.0];
    let alpha = [0.5, 0.5, 0.5, 0.25, 0.6];
    let batch = ScanBatch::new(&n_alpha, &no_records, &alpha).unwrap();
    for kind in ScoreKind::ALL {
        let scores = kind.score(&batch);
        assert_eq!(scores.len(), 5);
        for i in 0..5 {
            let expected = kind.score_one(n_alpha[i], no_records[i], alpha[i]);
            assert_eq!(scores[i].to_bits(), expected.to_bits(), "{kind} at {i}");
        }
    }
}
