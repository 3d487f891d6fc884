//! Configuration loading tests
//!
//! Tests that configuration loads correctly, provides documented
//! defaults, and round-trips edits through the INI file.

use utter::config::Config;
use utter::speech::Engine;

#[test]
fn test_config_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("utter.cfg");

    let config = Config::load_from(path.clone()).expect("Failed to load config");

    // First load writes the default file
    assert!(path.exists());
    assert!(config.path().to_str().unwrap().contains("utter.cfg"));

    assert_eq!(config.engine().unwrap(), Engine::Gtts);
    assert_eq!(config.language(), "en");
    assert_eq!(config.rate(), 175);
    assert!(config.voice().is_none());
    assert_eq!(config.gtts_host(), "https://translate.google.com");
    assert_eq!(config.gtts_timeout_secs(), 10);
}

#[test]
fn test_config_overrides_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("utter.cfg");

    let mut config = Config::load_from(path.clone()).unwrap();
    config.set("speech", "engine", "native");
    config.set("speech", "voice", "en-gb");
    config.set("gtts", "timeout_secs", "30");
    config.save().unwrap();

    let reloaded = Config::load_from(path).unwrap();
    assert_eq!(reloaded.engine().unwrap(), Engine::Native);
    assert_eq!(reloaded.voice().as_deref(), Some("en-gb"));
    assert_eq!(reloaded.gtts_timeout_secs(), 30);
}

#[test]
fn test_missing_keys_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("utter.cfg");

    // A config file that only sets the language
    std::fs::write(&path, "[speech]\nlanguage = fr\n").unwrap();

    let config = Config::load_from(path).unwrap();
    assert_eq!(config.language(), "fr");
    assert_eq!(config.engine().unwrap(), Engine::Gtts);
    assert_eq!(config.rate(), 175);
    assert_eq!(config.gtts_host(), "https://translate.google.com");
}

#[test]
fn test_unrecognized_engine_in_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("utter.cfg");

    std::fs::write(&path, "[speech]\nengine = sapi\n").unwrap();

    let config = Config::load_from(path).unwrap();
    assert!(config.engine().is_err());
}
