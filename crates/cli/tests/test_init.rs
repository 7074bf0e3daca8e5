//! Tests for `unitgate init`

use unitgate_cli::commands::init;
use unitgate_core::config::{UnitgateConfig, CONFIG_FILENAME};

#[test]
fn init_writes_default_config() {
    let dir = tempfile::tempdir().unwrap();
    init::run(dir.path()).unwrap();

    let written = UnitgateConfig::from_file(&dir.path().join(CONFIG_FILENAME)).unwrap();
    let defaults = UnitgateConfig::default();
    assert_eq!(written.backend.url, defaults.backend.url);
    assert_eq!(written.backend.timeout_secs, defaults.backend.timeout_secs);
}

#[test]
fn init_leaves_existing_config_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILENAME);
    std::fs::write(&path, "[backend]\nurl = \"https://units.example\"\n").unwrap();

    init::run(dir.path()).unwrap();

    let kept = UnitgateConfig::from_file(&path).unwrap();
    assert_eq!(kept.backend.url, "https://units.example");
}
