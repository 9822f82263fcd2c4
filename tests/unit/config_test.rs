//! Tests for configuration validation

use colony_jobs::config::{BoardConfig, JobConfig, DEFAULT_ATTEMPT_LIMIT};
use colony_jobs::util::JobPriority;

#[test]
fn test_job_config_validation() {
    let valid = JobConfig::new("Haul").with_zone(2).with_menial(true);
    assert!(valid.validate().is_ok());
}

#[test]
fn test_job_config_blank_name() {
    let invalid = JobConfig::new("   ");
    assert!(invalid.validate().is_err());
}

#[test]
fn test_job_config_zero_attempts() {
    let invalid = JobConfig::new("Haul").with_attempt_limit(0);
    assert!(invalid.validate().is_err());
}

#[test]
fn test_job_config_from_json_defaults() {
    let cfg: JobConfig = serde_json::from_str(r#"{ "name": "Dig", "priority": "very_high" }"#).unwrap();
    assert_eq!(cfg.priority, JobPriority::VeryHigh);
    assert_eq!(cfg.attempt_limit, DEFAULT_ATTEMPT_LIMIT);
    assert_eq!(cfg.zone, 0);
}

#[test]
fn test_board_config_validation() {
    assert!(BoardConfig::default().validate().is_ok());

    let invalid = BoardConfig {
        max_cascade_depth: 0,
        ..BoardConfig::default()
    };
    assert!(invalid.validate().is_err());

    let invalid = BoardConfig {
        audit_capacity: 0,
        ..BoardConfig::default()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_board_config_from_json() {
    let json = r#"{
        "max_cascade_depth": 16,
        "strict_prerequisites": true,
        "audit_capacity": 256
    }"#;

    let config = BoardConfig::from_json_str(json).unwrap();
    assert_eq!(config.max_cascade_depth, 16);
    assert!(config.strict_prerequisites);

    assert!(BoardConfig::from_json_str(r#"{ "max_cascade_depth": 0, "audit_capacity": 1 }"#).is_err());
    assert!(BoardConfig::from_json_str("not json").is_err());
}

#[test]
fn test_board_config_partial_json_uses_defaults() {
    let config = BoardConfig::from_json_str(r#"{ "strict_prerequisites": true }"#).unwrap();
    assert!(config.strict_prerequisites);
    assert_eq!(config.max_cascade_depth, BoardConfig::default().max_cascade_depth);
    assert_eq!(config.audit_capacity, BoardConfig::default().audit_capacity);

    let empty = BoardConfig::from_json_str("{}").unwrap();
    assert_eq!(empty, BoardConfig::default());
}

#[test]
fn test_board_config_from_file() {
    let path = std::env::temp_dir().join(format!("colony-jobs-{}.json", uuid::Uuid::new_v4()));
    std::fs::write(&path, r#"{ "max_cascade_depth": 8, "audit_capacity": 32 }"#).unwrap();

    let config = BoardConfig::from_file(&path).unwrap();
    assert_eq!(config.max_cascade_depth, 8);
    assert!(!config.strict_prerequisites);
    std::fs::remove_file(&path).unwrap();

    let err = BoardConfig::from_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("reading board config"));
}

#[test]
fn test_board_config_from_env() {
    std::env::set_var("COLONY_JOBS_MAX_CASCADE_DEPTH", "12");
    std::env::set_var("COLONY_JOBS_STRICT_PREREQUISITES", "true");
    let config = BoardConfig::from_env();
    std::env::remove_var("COLONY_JOBS_MAX_CASCADE_DEPTH");
    std::env::remove_var("COLONY_JOBS_STRICT_PREREQUISITES");

    let config = config.unwrap();
    assert_eq!(config.max_cascade_depth, 12);
    assert!(config.strict_prerequisites);
    assert_eq!(config.audit_capacity, BoardConfig::default().audit_capacity);
}
