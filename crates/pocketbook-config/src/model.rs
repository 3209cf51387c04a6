use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "pocketbook";

/// Stores user-configurable preferences for the tracker shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Directory holding the persisted records. Defaults to the platform data dir.
    pub data_dir: Option<PathBuf>,
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default = "Config::default_log_filter")]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            currency_symbol: Self::default_currency_symbol(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            log_filter: Self::default_log_filter(),
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "$".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn default_log_filter() -> String {
        "pocketbook=info".into()
    }

    /// Platform base directory for pocketbook files.
    pub fn default_base_dir() -> PathBuf {
        dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
    }

    /// Directory for the records, relative to `base` unless configured explicitly.
    pub fn resolve_data_dir(&self, base: &Path) -> PathBuf {
        match &self.data_dir {
            Some(path) => path.clone(),
            None => base.join("data"),
        }
    }
}
