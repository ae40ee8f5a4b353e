//! Configuration loading from disk.

use std::io::Write;

use fxlens::models::{FxLensConfig, LogFormat};
use fxlens::{analyze_input, build_analyzer, load_config, FxLensError};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_full_config() {
    let file = write_config(
        r#"
[extraction]
seed = 1234

[output]
pretty = true

[logging]
format = "json"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.extraction.seed, Some(1234));
    assert!(config.output.pretty);
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn partial_config_fills_defaults() {
    let file = write_config("[output]\npretty = true\n");
    let config = load_config(file.path()).unwrap();
    assert!(config.extraction.seed.is_none());
    assert_eq!(config.logging.format, LogFormat::Text);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, FxLensError::Io(_)));
}

#[test]
fn invalid_toml_is_config_error() {
    let file = write_config("[logging]\nformat = \"xml\"\n");
    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, FxLensError::Config(_)));
}

#[test]
fn seeded_config_makes_reports_reproducible() {
    let file = write_config("[extraction]\nseed = 99\n");
    let config: FxLensConfig = load_config(file.path()).unwrap();

    let text = "EUR/JPY achat sans chiffre";
    let first = analyze_input(&mut build_analyzer(&config, None), text, false).unwrap();
    let second = analyze_input(&mut build_analyzer(&config, None), text, false).unwrap();

    let strength = first.trading_signal.as_ref().unwrap().signal_strength;
    assert!((5..=9).contains(&strength));
    assert_eq!(first.trading_signal, second.trading_signal);
    assert_ne!(first.id, second.id);
}

#[test]
fn shipped_config_parses() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/fxlens.toml");
    let config = load_config(path).unwrap();
    assert_eq!(config.logging.format, LogFormat::Text);
}
