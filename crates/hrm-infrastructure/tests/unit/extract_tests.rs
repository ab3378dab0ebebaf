//! Value extractor tests

use hrm_domain::Error;
use hrm_infrastructure::procfs::extract_kb_value;

const MEMINFO: &str = "\
MemTotal:       16318480 kB
MemFree:         1203344 kB
MemAvailable:    9876543 kB
Buffers:          512000 kB
SwapTotal:             0 kB
HugePages_Total:       0
";

#[test]
fn test_extracts_labeled_value() {
    assert_eq!(extract_kb_value(MEMINFO, "MemTotal").unwrap(), 16_318_480);
    assert_eq!(extract_kb_value(MEMINFO, "MemAvailable").unwrap(), 9_876_543);
    assert_eq!(extract_kb_value(MEMINFO, "SwapTotal").unwrap(), 0);
}

#[test]
fn test_missing_key_is_not_found() {
    let err = extract_kb_value(MEMINFO, "Shmem").unwrap_err();
    match err {
        Error::NotFound { resource } => assert!(resource.contains("Shmem")),
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_value_without_unit_is_not_found() {
    let err = extract_kb_value(MEMINFO, "HugePages_Total").unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn test_overflowing_digits_is_parse_error() {
    let text = "MemTotal: 99999999999999999999999 kB\n";
    let err = extract_kb_value(text, "MemTotal").unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn test_key_is_matched_literally() {
    let text = "MemXTotal: 7 kB\nMem.Total: 5 kB\n";
    assert_eq!(extract_kb_value(text, "Mem.Total").unwrap(), 5);
}
