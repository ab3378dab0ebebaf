//! Disk reporter tests

use hrm_domain::Error;
use hrm_infrastructure::reporters::DiskReporter;

#[test]
fn test_usage_of_temp_dir() {
    let dir = tempfile::tempdir().unwrap();
    let usage = DiskReporter::new().usage(dir.path()).unwrap();

    assert!(usage.total_gb > 0.0);
    assert!(usage.free_gb <= usage.total_gb);
    assert!((0.0..=100.0).contains(&usage.used_percent));
    assert!((usage.used_percent + usage.free_percent() - 100.0).abs() < 1e-9);
    assert!((usage.used_gb - (usage.total_gb - usage.free_gb)).abs() < 1e-9);
}

#[test]
fn test_missing_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = DiskReporter::new()
        .usage(&dir.path().join("does/not/exist"))
        .unwrap_err();
    match err {
        Error::Io { message, .. } => assert!(message.contains("does/not/exist")),
        other => panic!("Expected Io error, got {other:?}"),
    }
}
