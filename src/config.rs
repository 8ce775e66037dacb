use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_DIR: &str = "termfolio";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme_name")]
    pub theme: String,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub menu: MenuConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            session: SessionConfig::default(),
            menu: MenuConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

/// How the welcome screen hands over to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WelcomeExit {
    /// Only after `welcome_timeout_ms`.
    Timeout,
    /// Only on a keypress.
    AnyKey,
    /// Whichever comes first.
    #[default]
    Either,
}

impl WelcomeExit {
    pub fn on_timeout(self) -> bool {
        matches!(self, WelcomeExit::Timeout | WelcomeExit::Either)
    }

    pub fn on_key(self) -> bool {
        matches!(self, WelcomeExit::AnyKey | WelcomeExit::Either)
    }
}

/// Boot, banner and welcome timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_boot_interval")]
    pub boot_interval_ms: u64,

    #[serde(default = "default_banner_timeout")]
    pub banner_timeout_ms: u64,

    #[serde(default = "default_welcome_timeout")]
    pub welcome_timeout_ms: u64,

    #[serde(default)]
    pub welcome_exit: WelcomeExit,

    /// Ask for a name after the banner. When off, every session is a guest.
    #[serde(default = "default_true")]
    pub capture_name: bool,
}

fn default_boot_interval() -> u64 {
    600
}

fn default_banner_timeout() -> u64 {
    3000
}

fn default_welcome_timeout() -> u64 {
    2500
}

fn default_true() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            boot_interval_ms: default_boot_interval(),
            banner_timeout_ms: default_banner_timeout(),
            welcome_timeout_ms: default_welcome_timeout(),
            welcome_exit: WelcomeExit::default(),
            capture_name: true,
        }
    }
}

impl SessionConfig {
    pub fn boot_interval(&self) -> Duration {
        Duration::from_millis(self.boot_interval_ms)
    }

    pub fn banner_timeout(&self) -> Duration {
        Duration::from_millis(self.banner_timeout_ms)
    }

    pub fn welcome_timeout(&self) -> Duration {
        Duration::from_millis(self.welcome_timeout_ms)
    }
}

/// Non-interactive display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Time each section stays up when cycling without a terminal.
    #[serde(default = "default_display_cycle")]
    pub display_cycle_ms: u64,

    /// Full passes over all sections before exiting. 0 (the default) cycles
    /// forever.
    #[serde(default = "default_display_passes")]
    pub display_passes: u32,
}

fn default_display_cycle() -> u64 {
    5000
}

fn default_display_passes() -> u32 {
    0
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            display_cycle_ms: default_display_cycle(),
            display_passes: default_display_passes(),
        }
    }
}

impl MenuConfig {
    pub fn display_cycle(&self) -> Duration {
        Duration::from_millis(self.display_cycle_ms)
    }
}

/// Visitor database settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Database file. Defaults to `{data_dir}/termfolio/visitors.db`.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Refuse to run without a working store instead of degrading.
    #[serde(default)]
    pub required: bool,
}

impl StorageConfig {
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(default_db_path)
    }
}

fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
        .join("visitors.db")
}

impl Config {
    /// `{config_dir}/termfolio/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.json"))
    }

    /// Directory searched for user theme files.
    pub fn themes_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("themes"))
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(format!("{}: {e}", path.as_ref().display())))?;

        let config: Config =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load `explicit` if given (it must exist), otherwise the default path
    /// if a file is there, otherwise built-in defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::info!("Loading config from {:?}", path);
                Self::load_from_file(path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = self.to_json()?;
        std::fs::write(path.as_ref(), contents).map_err(|e| ConfigError::IoError(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let intervals = [
            ("session.boot_interval_ms", self.session.boot_interval_ms),
            ("session.banner_timeout_ms", self.session.banner_timeout_ms),
            ("session.welcome_timeout_ms", self.session.welcome_timeout_ms),
            ("menu.display_cycle_ms", self.menu.display_cycle_ms),
        ];
        for (name, value) in intervals {
            if value == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be greater than 0"
                )));
            }
        }

        if self.theme.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "theme cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
