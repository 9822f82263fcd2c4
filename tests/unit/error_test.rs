//! Tests for error types

use colony_jobs::core::JobError;
use colony_jobs::util::JobId;

#[test]
fn test_unknown_job_error() {
    let err = JobError::UnknownJob(JobId(4));
    assert_eq!(format!("{}", err), "unknown job: Job#4");
}

#[test]
fn test_self_reference_error() {
    let err = JobError::SelfReference(JobId(1));
    assert_eq!(format!("{}", err), "Job#1 cannot reference itself");
}

#[test]
fn test_parent_cycle_error() {
    let err = JobError::ParentCycle {
        child: JobId(2),
        parent: JobId(5),
    };
    assert_eq!(
        format!("{}", err),
        "linking Job#2 under Job#5 would create a parent cycle"
    );
}

#[test]
fn test_invalid_config_error() {
    let err = JobError::InvalidConfig("attempt_limit must be greater than 0".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid configuration: attempt_limit must be greater than 0"
    );
}
