//! Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Configuration for whim
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default option labels (2-8 entries)
    pub options: Option<Vec<String>>,
    /// Default option count when no labels are configured (2-8)
    pub count: Option<usize>,
    /// Animation frames per spin
    pub frame_count: Option<usize>,
    /// Delay between animation frames, in milliseconds
    pub frame_delay_ms: Option<u64>,
    /// Color theme (dark, light)
    pub theme: Option<String>,
    /// Whether to play the spin sound (requires the `sound` build feature)
    pub sound: Option<bool>,
    /// Path to the spin sound clip (wav or ogg)
    pub sound_file: Option<String>,
}

impl Config {
    /// Get the config directory
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("whim")
    }

    /// Get the config file path
    pub fn config_path() -> PathBuf {
        // Check for WHIM_CONFIG_PATH env var first
        if let Ok(path) = std::env::var("WHIM_CONFIG_PATH") {
            return PathBuf::from(path);
        }
        Self::config_dir().join("config.toml")
    }

    /// Load config from file
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Save config to file
    pub fn save(&self) -> std::io::Result<()> {
        let path = Self::config_path();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = toml::to_string_pretty(self).map_err(std::io::Error::other)?;
        fs::write(path, content)
    }

    /// Create a default config file if it doesn't exist
    pub fn init() -> std::io::Result<PathBuf> {
        let path = Self::config_path();
        if path.exists() {
            return Ok(path);
        }

        let default_config = Config {
            options: None,
            count: Some(4),
            frame_count: Some(whim_core::DEFAULT_FRAME_COUNT),
            frame_delay_ms: Some(whim_core::DEFAULT_FRAME_DELAY.as_millis() as u64),
            theme: Some("dark".to_string()),
            sound: Some(true),
            sound_file: None,
        };

        default_config.save()?;
        Ok(path)
    }
}

/// Generate example config content
pub fn example_config() -> &'static str {
    r#"# whim configuration file
# Place at ~/.config/whim/config.toml (Linux/Mac) or %APPDATA%\whim\config.toml (Windows)

# Default option labels (2-8 entries); overrides `count`
# options = ["pizza", "sushi", "tacos"]

# Default option count when no labels are configured (2-8)
count = 4

# Animation frames per spin
frame_count = 160

# Delay between animation frames, in milliseconds
frame_delay_ms = 50

# Color theme (dark, light)
theme = "dark"

# Whether to play the spin sound (requires a build with the `sound` feature)
sound = true

# Path to the spin sound clip (wav or ogg)
# sound_file = "~/.config/whim/spin.wav"
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_config_parses() {
        let config: Config = toml::from_str(example_config()).unwrap();
        assert_eq!(config.count, Some(4));
        assert_eq!(config.frame_count, Some(160));
        assert_eq!(config.frame_delay_ms, Some(50));
        assert_eq!(config.theme.as_deref(), Some("dark"));
        assert_eq!(config.sound, Some(true));
        assert_eq!(config.options, None);
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.options.is_none());
        assert!(config.count.is_none());
        assert!(config.sound_file.is_none());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config: Config = toml::from_str("someday = \"maybe\"\ncount = 6\n").unwrap();
        assert_eq!(config.count, Some(6));
    }
}
