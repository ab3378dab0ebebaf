//! Battery reporter tests

use hrm_domain::Error;
use hrm_infrastructure::reporters::BatteryReporter;
use std::path::Path;

fn write_attr(root: &Path, battery: &str, attr: &str, value: &str) {
    let dir = root.join(battery);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(attr), value).unwrap();
}

#[test]
fn test_state_of_charge() {
    let root = tempfile::tempdir().unwrap();
    write_attr(root.path(), "BAT0", "capacity", "42");

    let reporter = BatteryReporter::new(root.path());
    assert_eq!(reporter.state_of_charge("BAT0").unwrap(), 42);
}

#[test]
fn test_state_of_charge_trailing_newline() {
    let root = tempfile::tempdir().unwrap();
    write_attr(root.path(), "BAT1", "capacity", "100\n");

    let reporter = BatteryReporter::new(root.path());
    assert_eq!(reporter.state_of_charge("BAT1").unwrap(), 100);
}

#[test]
fn test_state_of_health_truncates() {
    let root = tempfile::tempdir().unwrap();
    write_attr(root.path(), "BAT0", "energy_full", "41234000\n");
    write_attr(root.path(), "BAT0", "energy_full_design", "57000000\n");

    let reporter = BatteryReporter::new(root.path());
    // 100 * 41234000 / 57000000 = 72.34...
    assert_eq!(reporter.state_of_health("BAT0").unwrap(), 72);
}

#[test]
fn test_state_of_health_above_design() {
    let root = tempfile::tempdir().unwrap();
    write_attr(root.path(), "BAT0", "energy_full", "51000");
    write_attr(root.path(), "BAT0", "energy_full_design", "50000");

    let reporter = BatteryReporter::new(root.path());
    assert_eq!(reporter.state_of_health("BAT0").unwrap(), 102);
}

#[test]
fn test_zero_design_capacity_fails() {
    let root = tempfile::tempdir().unwrap();
    write_attr(root.path(), "BAT0", "energy_full", "41234000");
    write_attr(root.path(), "BAT0", "energy_full_design", "0");

    let err = BatteryReporter::new(root.path())
        .state_of_health("BAT0")
        .unwrap_err();
    assert!(matches!(err, Error::ZeroDivisor { .. }));
}

#[test]
fn test_missing_attribute_names_battery() {
    let root = tempfile::tempdir().unwrap();
    write_attr(root.path(), "BAT0", "energy_full", "41234000");

    let err = BatteryReporter::new(root.path())
        .state_of_health("BAT0")
        .unwrap_err();
    match err {
        Error::Io { message, .. } => {
            assert!(message.contains("BAT0"));
            assert!(message.contains("energy_full_design"));
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_malformed_capacity_is_parse_error() {
    let root = tempfile::tempdir().unwrap();
    write_attr(root.path(), "BAT0", "capacity", "-5");

    let err = BatteryReporter::new(root.path())
        .state_of_charge("BAT0")
        .unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn test_empty_name_rejected() {
    let root = tempfile::tempdir().unwrap();
    let reporter = BatteryReporter::new(root.path());

    assert!(matches!(
        reporter.state_of_charge("").unwrap_err(),
        Error::InvalidArgument { .. }
    ));
    assert!(matches!(
        reporter.state_of_health("").unwrap_err(),
        Error::InvalidArgument { .. }
    ));
}

#[test]
fn test_path_escaping_name_rejected() {
    let root = tempfile::tempdir().unwrap();
    let reporter = BatteryReporter::new(root.path());

    for name in ["..", ".", "../BAT0", "BAT0/capacity"] {
        assert!(matches!(
            reporter.state_of_charge(name).unwrap_err(),
            Error::InvalidArgument { .. }
        ));
    }
}
