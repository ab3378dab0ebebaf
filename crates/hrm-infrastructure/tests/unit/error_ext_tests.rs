//! Error context extension tests

use hrm_domain::Error;
use hrm_infrastructure::ErrorContext;

fn io_failure() -> Result<(), std::io::Error> {
    Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "denied",
    ))
}

#[test]
fn test_io_context_keeps_source() {
    let err = io_failure()
        .with_io_context(|| "battery BAT0: capacity")
        .unwrap_err();
    match err {
        Error::Io { message, source } => {
            assert_eq!(message, "battery BAT0: capacity: denied");
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_with_io_context_is_lazy_on_success() {
    let mut evaluated = false;
    let result: Result<u8, std::io::Error> = Ok(1);
    let value = result
        .with_io_context(|| {
            evaluated = true;
            "unused"
        })
        .unwrap();
    assert_eq!(value, 1);
    assert!(!evaluated);
}

#[test]
fn test_parse_context() {
    let err = "abc".parse::<u64>().parse_context("capacity").unwrap_err();
    match err {
        Error::Parse { message } => assert!(message.starts_with("capacity: ")),
        other => panic!("Expected Parse error, got {other:?}"),
    }
}

#[test]
fn test_config_context() {
    let err = io_failure().config_context("loading hrm.toml").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_context_is_internal() {
    let err = "[".parse::<u64>().context("invalid pattern for key MemTotal").unwrap_err();
    assert!(matches!(err, Error::Internal { .. }));
    assert!(err.to_string().contains("MemTotal"));
}
