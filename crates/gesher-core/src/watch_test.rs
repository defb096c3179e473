use std::io::Write;
use std::path::Path;

use super::*;

fn write_yaml(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn default_config_is_valid() {
    assert!(validate_watch_config(&WatchConfig::default()).is_ok());
}

#[test]
fn default_config_keeps_show_order() {
    let cfg = WatchConfig::default();
    let ids: Vec<u32> = cfg.shows.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![2839, 2752]);
    assert_eq!(cfg.month_start, 1);
    assert_eq!(cfg.month_end, 8);
}

#[test]
fn loads_yaml_and_fills_default_base_url() {
    let file = write_yaml(
        r"
shows:
  - id: 100
    name: Hamlet
  - id: 7
    name: The Dybbuk
years: [2026, 2027]
month_start: 3
month_end: 4
",
    );

    let cfg = load_watch_config(file.path()).expect("valid config");
    assert_eq!(cfg.calendar_base_url, DEFAULT_CALENDAR_BASE_URL);
    assert_eq!(cfg.shows[0].name, "Hamlet");
    assert_eq!(cfg.shows[1].id, 7);
    assert_eq!(cfg.years, vec![2026, 2027]);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = load_watch_config(&dir.path().join("nope.yaml"));
    assert!(
        matches!(result, Err(ConfigError::ShowsFileIo { .. })),
        "expected ShowsFileIo, got: {result:?}"
    );
}

#[test]
fn malformed_yaml_is_parse_error() {
    let file = write_yaml("shows: [unterminated");
    let result = load_watch_config(file.path());
    assert!(
        matches!(result, Err(ConfigError::ShowsFileParse(_))),
        "expected ShowsFileParse, got: {result:?}"
    );
}

#[test]
fn rejects_duplicate_show_ids() {
    let mut cfg = WatchConfig::default();
    cfg.shows.push(ShowConfig {
        id: 2839,
        name: "Souls (again)".to_string(),
    });
    let err = validate_watch_config(&cfg).unwrap_err();
    assert!(err.to_string().contains("duplicate show id: 2839"));
}

#[test]
fn rejects_empty_show_name() {
    let mut cfg = WatchConfig::default();
    cfg.shows[0].name = "  ".to_string();
    assert!(matches!(
        validate_watch_config(&cfg),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn rejects_no_shows_or_years() {
    let mut no_shows = WatchConfig::default();
    no_shows.shows.clear();
    assert!(validate_watch_config(&no_shows).is_err());

    let mut no_years = WatchConfig::default();
    no_years.years.clear();
    assert!(validate_watch_config(&no_years).is_err());
}

#[test]
fn rejects_out_of_range_months() {
    let mut cfg = WatchConfig::default();
    cfg.month_end = 13;
    assert!(validate_watch_config(&cfg).is_err());

    cfg.month_start = 0;
    cfg.month_end = 5;
    assert!(validate_watch_config(&cfg).is_err());
}

#[test]
fn rejects_inverted_month_range() {
    let mut cfg = WatchConfig::default();
    cfg.month_start = 9;
    cfg.month_end = 2;
    let err = validate_watch_config(&cfg).unwrap_err();
    assert!(err.to_string().contains("after month_end"));
}

#[test]
fn single_month_range_is_valid() {
    let mut cfg = WatchConfig::default();
    cfg.month_start = 6;
    cfg.month_end = 6;
    assert!(validate_watch_config(&cfg).is_ok());
}

#[test]
fn shipped_shows_file_matches_default() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/shows.yaml");
    let cfg = load_watch_config(&path).expect("shipped config is valid");
    assert_eq!(cfg, WatchConfig::default());
}
