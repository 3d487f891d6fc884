//! Configuration management

use crate::speech::Engine;
use crate::{Result, UtterError};
use ini::Ini;
use log::{debug, info};
use std::path::PathBuf;

/// Application configuration
///
/// Persistent defaults for the speech engine, language, rate and voice,
/// plus settings for the cloud endpoint. Command line flags override
/// anything set here.
pub struct Config {
    /// INI configuration storage
    ini: Ini,

    /// Config file path (~/.utter.cfg)
    path: PathBuf,
}

impl Config {
    /// Load configuration from disk or create default
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from an explicit path (used by tests)
    pub fn load_from(path: PathBuf) -> Result<Self> {
        debug!("Loading config from {:?}", path);

        let ini = if path.exists() {
            Ini::load_from_file(&path)
                .map_err(|e| UtterError::Config(format!("Failed to load config: {}", e)))?
        } else {
            info!("Config file not found, creating default");
            let default = Self::default_config();
            default
                .write_to_file(&path)
                .map_err(|e| UtterError::Config(format!("Failed to write config: {}", e)))?;
            default
        };

        Ok(Self { ini, path })
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        debug!("Saving config to {:?}", self.path);
        self.ini
            .write_to_file(&self.path)
            .map_err(|e| UtterError::Config(format!("Failed to save config: {}", e)))
    }

    /// Get config file path (~/.utter.cfg)
    ///
    /// This is where the default engine, language and rate persist
    /// between sessions
    fn config_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".utter.cfg")
    }

    /// Expose the config file path for display
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Create default configuration
    fn default_config() -> Ini {
        let mut ini = Ini::new();

        ini.with_section(Some("speech"))
            .set("engine", "gtts")
            .set("language", "en")
            .set("rate", "175");

        ini.with_section(Some("gtts"))
            .set("host", "https://translate.google.com")
            .set("timeout_secs", "10");

        ini
    }

    /// Get a string value from config
    pub fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        self.ini
            .get_from(Some(section), key)
            .unwrap_or(default)
            .to_string()
    }

    /// Get an integer value from config
    pub fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Set a value in config
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.ini.with_section(Some(section)).set(key, value);
    }

    // Speech configuration getters

    /// Default engine when none is given on the command line
    ///
    /// An unrecognized name in the config file is an error rather than a
    /// silent fallback, so a typo never switches engines unnoticed.
    pub fn engine(&self) -> Result<Engine> {
        self.get_string("speech", "engine", "gtts").parse()
    }

    /// Default language code passed through to the engine
    pub fn language(&self) -> String {
        self.get_string("speech", "language", "en")
    }

    /// Default speech rate in words per minute
    pub fn rate(&self) -> u16 {
        self.get_int("speech", "rate", 175)
            .try_into()
            .unwrap_or(175)
    }

    /// Preferred voice name, if any
    pub fn voice(&self) -> Option<String> {
        self.ini
            .get_from(Some("speech"), "voice")
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string())
    }

    // Cloud endpoint configuration getters

    /// Host serving the translate_tts endpoint
    pub fn gtts_host(&self) -> String {
        self.get_string("gtts", "host", "https://translate.google.com")
    }

    /// HTTP request timeout in seconds
    pub fn gtts_timeout_secs(&self) -> u64 {
        self.get_int("gtts", "timeout_secs", 10)
            .try_into()
            .unwrap_or(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path().join("utter.cfg")).unwrap();

        assert_eq!(config.engine().unwrap(), Engine::Gtts);
        assert_eq!(config.language(), "en");
        assert_eq!(config.rate(), 175);
        assert_eq!(config.voice(), None);
        assert_eq!(config.gtts_host(), "https://translate.google.com");
        assert_eq!(config.gtts_timeout_secs(), 10);
    }

    #[test]
    fn test_config_set_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("utter.cfg");

        let mut config = Config::load_from(path.clone()).unwrap();
        config.set("speech", "engine", "native");
        config.set("speech", "language", "tr");
        config.set("speech", "rate", "200");
        config.save().unwrap();

        let reloaded = Config::load_from(path).unwrap();
        assert_eq!(reloaded.engine().unwrap(), Engine::Native);
        assert_eq!(reloaded.language(), "tr");
        assert_eq!(reloaded.rate(), 200);
    }

    #[test]
    fn test_invalid_engine_in_config_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("utter.cfg");

        let mut config = Config::load_from(path).unwrap();
        config.set("speech", "engine", "festival");
        assert!(config.engine().is_err());
    }

    #[test]
    fn test_garbage_rate_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("utter.cfg");

        let mut config = Config::load_from(path).unwrap();
        config.set("speech", "rate", "not-a-number");
        assert_eq!(config.rate(), 175);
    }
}
