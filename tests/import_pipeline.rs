use std::{fs, path::Path};

use patron_registry::{
    core::registry::PatronRegistry,
    import::report::{FailureReason, ImportFailure},
};
use tempfile::TempDir;

fn write_source(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("patrons.txt");
    fs::write(&path, body).expect("write source");
    path
}

fn import(body: &str) -> (PatronRegistry, patron_registry::import::report::ImportReport) {
    let dir = TempDir::new().expect("tempdir");
    let path = write_source(&dir, body);
    let mut reg = PatronRegistry::new();
    let report = reg.import_from_source(Some(&path));
    (reg, report)
}

#[test]
fn sample_line_is_imported() {
    let (reg, report) = import("1245789-Sarah Jones-1136 Gorden Ave. Orlando, FL 32822-40.54\n");

    assert_eq!((report.total(), report.succeeded(), report.failed()), (1, 1, 0));
    let p = reg.get("1245789").expect("stored");
    assert_eq!(p.name(), "Sarah Jones");
    assert_eq!(p.address(), "1136 Gorden Ave. Orlando, FL 32822");
    assert_eq!(p.fine(), 40.54);
}

#[test]
fn two_field_line_is_bad_format() {
    let (_, report) = import("bad-line\n");
    assert_eq!((report.total(), report.succeeded()), (1, 0));
    assert_eq!(
        report.failures(),
        [ImportFailure {
            reason: FailureReason::BadFormat,
            line: "bad-line".into()
        }]
    );
}

#[test]
fn non_numeric_fine_is_bad_fine() {
    let (_, report) = import("1234567-Name-Addr-notanumber\n");
    assert_eq!(report.failures()[0].reason, FailureReason::BadFine);
    assert_eq!(report.failures()[0].line, "1234567-Name-Addr-notanumber");
}

#[test]
fn semantic_failures_are_invalid_data() {
    let body = "12-Name-Addr-10.0\n\
                1234567- -Addr-10\n\
                1234567-Name-Addr-300\n\
                1234567-Name-Addr-5\n\
                1234567-Other-Place-6\n";
    let (reg, report) = import(body);

    assert_eq!(report.total(), 5);
    assert_eq!(report.succeeded(), 1);
    let reasons: Vec<_> = report.failures().iter().map(|f| f.reason.clone()).collect();
    assert_eq!(reasons, vec![FailureReason::InvalidData; 4]);
    assert_eq!(report.failures()[0].line, "12-Name-Addr-10.0");
    assert_eq!(report.failures()[3].line, "1234567-Other-Place-6");
    assert_eq!(reg.get("1234567").map(|p| p.name()), Some("Name"));
}

#[test]
fn missing_source_short_circuits() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("nope.txt");
    let mut reg = PatronRegistry::new();

    let report = reg.import_from_source(Some(&path));
    assert_eq!((report.total(), report.succeeded()), (0, 0));
    assert_eq!(report.failures()[0].reason, FailureReason::FileNotFound);
    assert_eq!(report.failures()[0].line, path.display().to_string());

    let report = reg.import_from_source(None);
    assert_eq!(report.summary(), "Imported: 0/0 (1 failed)\nErrors: File not found: (none)");
}

#[test]
fn directory_source_is_an_io_fault() {
    let dir = TempDir::new().expect("tempdir");
    let mut reg = PatronRegistry::new();

    let report = reg.import_from_source(Some(dir.path()));
    assert_eq!(report.total(), 0);
    assert_eq!(report.failed(), 1);
    assert!(matches!(report.failures()[0].reason, FailureReason::Io(_)));
    assert!(report.summary().contains("I/O: "));
}

#[test]
fn crlf_and_blank_lines_are_counted() {
    let (reg, report) = import("1111111-A-B-1\r\n\r\n2222222-C-D-2\r\n");
    assert_eq!(report.total(), 3);
    assert_eq!(report.succeeded(), 2);
    assert_eq!(report.failures()[0].reason, FailureReason::BadFormat);
    assert_eq!(report.failures()[0].line, "");
    assert_eq!(reg.get("1111111").map(|p| p.address()), Some("B"));
}

#[test]
fn invalid_utf8_aborts_with_progress_kept() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("binary.txt");
    let mut bytes = b"1111111-A-B-1\n".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
    bytes.extend_from_slice(b"2222222-C-D-2\n");
    fs::write(&path, bytes).expect("write");

    let mut reg = PatronRegistry::new();
    let report = reg.import_from_source(Some(Path::new(&path)));

    assert_eq!(report.total(), 1);
    assert_eq!(report.succeeded(), 1);
    assert!(matches!(report.failures()[0].reason, FailureReason::Io(_)));
    assert_eq!(report.failures()[0].line, path.display().to_string());
    assert_eq!(reg.len(), 1);
}

#[test]
fn clean_import_preserves_line_order() {
    let ids = ["7000000", "1000000", "5000000", "3000000"];
    let body: String = ids
        .iter()
        .map(|id| format!("{id}-Name {id}-Addr {id}-12.5\n"))
        .collect();
    let (reg, report) = import(&body);

    assert_eq!(report.total(), ids.len());
    assert_eq!(report.succeeded(), ids.len());
    assert!(report.is_clean());
    assert_eq!(report.summary(), "Imported: 4/4 (0 failed)");
    let listed: Vec<String> = reg.list().iter().map(|p| p.id().to_string()).collect();
    assert_eq!(listed, ids);
}

#[test]
fn bundled_dataset_imports_cleanly() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/patrons_sample.txt");
    let mut reg = PatronRegistry::new();
    let report = reg.import_from_source(Some(&path));
    assert!(report.total() > 0);
    assert!(report.is_clean(), "{}", report.summary());
    assert_eq!(reg.len(), report.total());
}

#[test]
fn non_finite_fines_are_bad_fine() {
    let (reg, report) = import("1234567-A-B-nan\n1234568-A-B-inf\n1234569-A-B-Infinity\n");

    assert_eq!((report.total(), report.succeeded()), (3, 0));
    let reasons: Vec<_> = report.failures().iter().map(|f| f.reason.clone()).collect();
    assert_eq!(reasons, vec![FailureReason::BadFine; 3]);
    assert!(reg.is_empty());
}

#[test]
fn lone_carriage_returns_end_lines() {
    let (reg, report) = import("1111111-A-B-1\r2222222-C-D-2\r");

    assert_eq!(report.summary(), "Imported: 2/2 (0 failed)");
    assert_eq!(reg.ordered_ids(), ["1111111", "2222222"]);
}
