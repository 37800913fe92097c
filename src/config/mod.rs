use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Host-surface preferences. The core never reads these; they only shape how
/// reports are rendered and where exports may go.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// "long" renders totals as `8h 30m`, "short" as `08:30`.
    #[serde(default = "default_summary_style")]
    pub summary_style: String,

    /// Shown in place of the empty label group.
    #[serde(default = "default_empty_label")]
    pub empty_label_placeholder: String,

    /// Character used for horizontal rules in CLI output.
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_summary_style() -> String {
    "long".to_string()
}
fn default_empty_label() -> String {
    "(empty)".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            summary_style: default_summary_style(),
            empty_label_placeholder: default_empty_label(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("tttt")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".tttt")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tttt.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("failed to parse {}: {e}", path.display())))
        } else {
            Ok(Config::default())
        }
    }

    /// Whether totals should render in the short `HH:MM` form.
    pub fn short_totals(&self) -> bool {
        self.summary_style.eq_ignore_ascii_case("short")
    }

    /// Report config fields that would fall back to defaults.
    pub fn check(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !matches!(self.summary_style.as_str(), "long" | "short") {
            missing.push("summary_style (expected 'long' or 'short')");
        }
        if self.separator_char.chars().count() != 1 {
            missing.push("separator_char (expected a single character)");
        }
        missing
    }

    /// Write a fresh default config file, creating the directory if needed.
    pub fn init_all() -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();
        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| AppError::Config(format!("failed to serialize defaults: {e}")))?;

        let path = Self::config_file();
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = Config::default();
        assert!(cfg.check().is_empty());
        assert!(!cfg.short_totals());
    }

    #[test]
    fn check_flags_bad_fields() {
        let cfg = Config {
            summary_style: "wide".into(),
            separator_char: "--".into(),
            ..Config::default()
        };
        assert_eq!(cfg.check().len(), 2);
    }

    #[test]
    fn yaml_round_trips() {
        let yaml = "summary_style: short\n";
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(cfg.short_totals());
        assert_eq!(cfg.empty_label_placeholder, "(empty)");
    }
}
