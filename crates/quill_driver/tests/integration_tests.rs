//! End-to-end driver tests over the checked-in fixture scripts.

use quill_driver::{resolve_and_run, run_with_output, DriverError, RunMode, RunOptions, SourceError};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/fixtures")
        .join(name)
}

fn run_fixture(name: &str, mode: RunMode) -> Result<String, DriverError> {
    let options = RunOptions {
        entry: fixture(name),
        mode,
    };
    let mut out = Vec::new();
    run_with_output(&options, &mut out)?;
    Ok(String::from_utf8(out).expect("driver output is UTF-8"))
}

// ============================================================================
// Normal mode
// ============================================================================

#[test]
fn runs_the_hello_fixture() {
    assert_eq!(run_fixture("hello.quill", RunMode::Normal).unwrap(), "42\n");
}

#[test]
fn runs_the_arithmetic_fixture() {
    assert_eq!(
        run_fixture("arithmetic.quill", RunMode::Normal).unwrap(),
        "6\n60\n"
    );
}

#[test]
fn runs_the_functions_fixture() {
    assert_eq!(
        run_fixture("functions.quill", RunMode::Normal).unwrap(),
        "42\n42\n40\n"
    );
}

#[test]
fn empty_scripts_produce_no_output() {
    assert_eq!(run_fixture("empty.quill", RunMode::Normal).unwrap(), "");
}

// ============================================================================
// debug_scanner mode
// ============================================================================

#[test]
fn debug_scanner_prints_the_token_table_and_stops() {
    let expected = "\nSuccessfully scanned 4 tokens!\n\n\
                    \t    0 | Print        |\n\
                    \t    1 | ParenOpen    |\n\
                    \t    2 | Number       | 42\n\
                    \t    3 | ParenClose   |\n\n";
    assert_eq!(
        run_fixture("hello.quill", RunMode::DebugScanner).unwrap(),
        expected
    );
}

#[test]
fn debug_scanner_does_not_parse() {
    // The fixture fails to parse, but its token stream is fine.
    let output = run_fixture("parse_error.quill", RunMode::DebugScanner).unwrap();
    assert!(output.starts_with("\nSuccessfully scanned 3 tokens!\n"));
}

// ============================================================================
// Failure paths
// ============================================================================

#[test]
fn scan_errors_abort_both_modes() {
    for mode in [RunMode::Normal, RunMode::DebugScanner] {
        let err = run_fixture("scan_error.quill", mode).unwrap_err();
        assert!(matches!(err, DriverError::Scan(_)), "mode {mode}: {err}");
        assert_eq!(err.to_string(), "unrecognized character `?` (line 1)");
    }
}

#[test]
fn parse_errors_surface_from_normal_mode() {
    let err = run_fixture("parse_error.quill", RunMode::Normal).unwrap_err();
    assert!(matches!(err, DriverError::Parse(_)), "{err}");
}

#[test]
fn runtime_errors_surface_from_normal_mode() {
    let err = run_fixture("undefined.quill", RunMode::Normal).unwrap_err();
    assert_eq!(err.to_string(), "undefined variable `y` (line 0)");
}

#[test]
fn a_missing_entry_is_a_source_error() {
    let err = run_fixture("no_such_file.quill", RunMode::Normal).unwrap_err();
    assert!(matches!(err, DriverError::Source(SourceError::Io { .. })));
}

// ============================================================================
// quill.json resolution
// ============================================================================

#[test]
fn config_next_to_the_entry_supplies_the_mode() {
    let entry = fixture("project/main.quill");
    let options = RunOptions::resolve(Some(entry.clone()), None).unwrap();
    assert_eq!(options.entry, entry);
    assert_eq!(options.mode, RunMode::DebugScanner);
}

#[test]
fn command_line_mode_wins_over_config() {
    let options =
        RunOptions::resolve(Some(fixture("project/main.quill")), Some(RunMode::Normal)).unwrap();
    assert_eq!(options.mode, RunMode::Normal);
}

#[test]
fn no_config_defaults_to_normal_mode() {
    let options = RunOptions::resolve(Some(fixture("hello.quill")), None).unwrap();
    assert_eq!(options.mode, RunMode::Normal);
}

#[test]
fn resolved_project_entries_run() {
    let options = RunOptions::resolve(Some(fixture("project/main.quill")), None).unwrap();
    let mut out = Vec::new();
    run_with_output(&options, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();
    assert!(output.starts_with("\nSuccessfully scanned 4 tokens!\n"));
}

#[test]
fn config_failures_surface_as_driver_errors() {
    let err = resolve_and_run(Some(fixture("bad_project/main.quill")), None).unwrap_err();
    assert!(matches!(err, DriverError::Config(_)), "{err}");
    assert!(err.to_string().starts_with("failed to parse"));
}
