use super::*;

#[test]
fn test_default_is_v1() {
    assert_eq!(ScoringConfig::default(), ScoringConfig::default_v1());
    assert_eq!(ScoringConfig::default().domain_check, DomainCheck::Warn);
    assert!(ScoringConfig::default_v1().validate().is_ok());
}

#[test]
fn test_sequential_never_goes_parallel() {
    let cfg = ScoringConfig::sequential();
    assert_eq!(cfg.parallel_min_len, usize::MAX);
    assert_eq!(cfg.chunk_size, ScoringConfig::default_v1().chunk_size);
}

#[test]
fn test_validate_rejects_zero_chunk() {
    let cfg = ScoringConfig {
        chunk_size: 0,
        ..ScoringConfig::default_v1()
    };
    assert!(matches!(cfg.validate(), Err(ScoringError::InvalidConfig(_))));
}

#[test]
fn test_validate_rejects_zero_parallel_min_len() {
    let cfg = ScoringConfig {
        parallel_min_len: 0,
        ..ScoringConfig::default_v1()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_deserialize_partial_uses_defaults() {
    let cfg: ScoringConfig =
        serde_json::from_str(r#"{"chunk_size": 64, "domain_check": "reject"}"#).unwrap();
    assert_eq!(cfg.chunk_size, 64);
    assert_eq!(cfg.domain_check, DomainCheck::Reject);
    assert_eq!(cfg.parallel_min_len, ScoringConfig::default_v1().parallel_min_len);
}

#[test]
fn test_domain_check_serializes_snake_case() {
    let text = serde_json::to_string(&DomainCheck::Off).unwrap();
    assert_eq!(text, "\"off\"");
}
