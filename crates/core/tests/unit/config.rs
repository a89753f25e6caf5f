//! # Configuration Tests
//!
//! Defaults, partial JSON overrides and file loading.

use std::io::Write;
use std::time::Duration;

use tapeworks_core::anim::Fill;
use tapeworks_core::common::{ConfigError, Position, Symbol};
use tapeworks_core::config::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.run.step_millis, 500);
    assert_eq!(config.run.step_duration(), Duration::from_millis(500));
    assert_eq!((config.run.default_cols, config.run.default_rows), (9, 9));
    assert_eq!(config.style.empty_fill, "#E0E");
    assert_eq!(config.share.title, "Sample");
    assert!(config.share.base_url.is_empty());
    assert!(config.initial_level.is_none());
}

#[test]
fn test_empty_document_uses_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.run.step_millis, 500);
    assert_eq!(config.view.cell_size, 56.0);
}

#[test]
fn test_partial_sections_keep_other_defaults() {
    let json = r##"{
        "run": { "default_cols": 5 },
        "style": { "red": "#F00" },
        "initial_level": "lvl1x2:...."
    }"##;
    let config = Config::from_json(json).unwrap();
    assert_eq!(config.run.default_cols, 5);
    assert_eq!(config.run.default_rows, 9);
    assert_eq!(config.run.step_millis, 500);
    assert_eq!(config.style.red, "#F00");
    assert_eq!(config.style.blue, StyleConfig::default().blue);
    assert_eq!(config.initial_level.as_deref(), Some("lvl1x2:...."));
}

#[test]
fn test_fill_for_head_symbols() {
    let style = StyleConfig::default();
    assert_eq!(style.fill_for(Symbol::Empty), Fill("#E0E".to_string()));
    assert_eq!(style.fill_for(Symbol::Green), Fill(style.green.clone()));
    assert_ne!(style.fill_for(Symbol::Red), style.fill_for(Symbol::Blue));
}

#[test]
fn test_view_layout_places_cells() {
    let view = ViewConfig {
        origin_x: 5.0,
        origin_y: 7.0,
        cell_size: 10.0,
    };
    let t = view.layout().cell_transform(Position::new(2, 3));
    assert_eq!((t.x, t.y), (25.0, 37.0));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let text = r#"{"run": {"step_millis": 40}, "share": {"base_url": "http://x/y"}}"#;
    file.write_all(text.as_bytes()).unwrap();
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.run.step_millis, 40);
    assert_eq!(config.share.base_url, "http://x/y");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = Config::from_file(path).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_wrong_type_is_json_error() {
    let err = Config::from_json(r#"{"run": {"step_millis": "fast"}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}
