use std::path::{Path, PathBuf};

use crossterm::event::KeyCode;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub general: GeneralConfig,
    pub keybinds: KeybindsConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// WebSocket endpoint of the telemetry producer.
    pub url: String,
    /// Delay before a reconnect attempt after the feed drops.
    pub reconnect_ms: u64,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        ConnectionConfig {
            url: "ws://127.0.0.1:5000/ws".to_string(),
            reconnect_ms: 3000,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub theme: String,
    /// Housekeeping tick (status message expiry), not a data refresh; the
    /// producer controls the update cadence.
    pub tick_ms: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            theme: "dark".to_string(),
            tick_ms: 1000,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct KeybindsConfig {
    pub quit: String,
    pub help: String,
    pub cycle_theme: String,
}

impl Default for KeybindsConfig {
    fn default() -> Self {
        KeybindsConfig {
            quit: "q".to_string(),
            help: "?".to_string(),
            cycle_theme: "t".to_string(),
        }
    }
}

pub fn parse_key(s: &str) -> Option<KeyCode> {
    match s {
        "Enter" => Some(KeyCode::Enter),
        "Escape" | "Esc" => Some(KeyCode::Esc),
        "Tab" => Some(KeyCode::Tab),
        "Space" => Some(KeyCode::Char(' ')),
        _ => {
            let mut chars = s.chars();
            let first = chars.next()?;
            if chars.next().is_none() {
                Some(KeyCode::Char(first))
            } else {
                None
            }
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("pulsedash").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.connection.url, "ws://127.0.0.1:5000/ws");
        assert_eq!(config.connection.reconnect_ms, 3000);
        assert_eq!(config.general.theme, "dark");
        assert_eq!(config.general.tick_ms, 1000);
        assert_eq!(config.keybinds.quit, "q");
    }

    #[test]
    fn parse_partial_toml() {
        let toml_str = r#"
[connection]
url = "ws://10.0.0.4:9000/ws"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.connection.url, "ws://10.0.0.4:9000/ws");
        // Other fields should be defaults
        assert_eq!(config.connection.reconnect_ms, 3000);
        assert_eq!(config.general.theme, "dark");
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r#"
[connection]
url = "ws://monitor.local:5000/ws"
reconnect_ms = 500

[general]
theme = "light"
tick_ms = 250

[keybinds]
quit = "x"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.connection.reconnect_ms, 500);
        assert_eq!(config.general.theme, "light");
        assert_eq!(config.general.tick_ms, 250);
        assert_eq!(config.keybinds.quit, "x");
        assert_eq!(config.keybinds.help, "?");
    }

    #[test]
    fn missing_file_returns_default() {
        let config = load_config_from_path(Path::new("/nonexistent/path/config.toml"));
        assert_eq!(config.connection.reconnect_ms, 3000);
    }

    #[test]
    fn invalid_toml_returns_default() {
        let temp = std::env::temp_dir().join("pulsedash_test_invalid.toml");
        std::fs::write(&temp, "this is not valid toml {{{{").unwrap();
        let config = load_config_from_path(&temp);
        assert_eq!(config.general.theme, "dark");
        let _ = std::fs::remove_file(&temp);
    }

    #[test]
    fn parse_key_handles_named_and_single_chars() {
        assert_eq!(parse_key("q"), Some(KeyCode::Char('q')));
        assert_eq!(parse_key("Enter"), Some(KeyCode::Enter));
        assert_eq!(parse_key("Space"), Some(KeyCode::Char(' ')));
        assert_eq!(parse_key("Ctrl+Q"), None);
    }
}
