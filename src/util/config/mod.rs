//! Pascal lattice configuration
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high → low):
//! 1. CLI arguments
//! 2. Environment variables (PASCAL_LATTICE_*)
//! 3. User-level (~/.config/pascal-lattice/config.toml)
//! 4. Default values
//! ```
//!
//! # Usage
//!
//! ```rust
//! use pascal_lattice::util::config::GenerateConfig;
//!
//! let config: GenerateConfig = toml::from_str("depth = 5").unwrap();
//! assert_eq!(config.depth, 5);
//! assert_eq!(config.max_value, 3);
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::lattice::{LayoutConfig, Mode};

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "PASCAL_LATTICE_";

/// Parameters of one generate action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Number of rows
    #[serde(default = "default_depth")]
    pub depth: usize,
    /// Upper bound (inclusive) for generated values
    #[serde(default = "default_max_value")]
    pub max_value: i64,
    /// Maximize or minimize the path sum
    #[serde(default)]
    pub mode: Mode,
    /// Consult the memo table during evaluation
    #[serde(default = "default_persist_memo")]
    pub persist_memo: bool,
    /// RNG seed for reproducible values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Deepest lattice that may be evaluated without memoization
    #[serde(default = "default_max_recompute_depth")]
    pub max_recompute_depth: usize,
    /// Canvas geometry
    #[serde(default)]
    pub layout: LayoutConfig,
}

fn default_depth() -> usize {
    3
}

fn default_max_value() -> i64 {
    3
}

fn default_persist_memo() -> bool {
    true
}

fn default_max_recompute_depth() -> usize {
    20
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            max_value: 3,
            mode: Mode::Maximize,
            persist_memo: true,
            seed: None,
            max_recompute_depth: 20,
            layout: LayoutConfig::default(),
        }
    }
}

impl GenerateConfig {
    /// Apply `PASCAL_LATTICE_*` environment variables on top of this config.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides_from<F>(
        &mut self,
        lookup: F,
    ) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        override_from(&lookup, "DEPTH", &mut self.depth)?;
        override_from(&lookup, "MAX_VALUE", &mut self.max_value)?;
        override_from(&lookup, "MODE", &mut self.mode)?;
        override_from(&lookup, "PERSIST_MEMO", &mut self.persist_memo)?;
        override_from(&lookup, "MAX_RECOMPUTE_DEPTH", &mut self.max_recompute_depth)?;

        let mut seed: Option<u64> = None;
        override_from(&lookup, "SEED", &mut seed)?;
        if let Some(seed) = seed {
            self.seed = Some(seed);
        }
        Ok(())
    }
}

fn override_from<F, T>(
    lookup: &F,
    key: &str,
    target: &mut T,
) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: ParseOverride,
{
    let var = format!("{}{}", ENV_PREFIX, key);
    if let Some(raw) = lookup(&var) {
        *target = T::parse_override(raw.trim()).ok_or(ConfigError::EnvError { var, value: raw })?;
    }
    Ok(())
}

trait ParseOverride: Sized {
    fn parse_override(raw: &str) -> Option<Self>;
}

macro_rules! parse_via_from_str {
    ($($ty:ty),*) => {
        $(impl ParseOverride for $ty {
            fn parse_override(raw: &str) -> Option<Self> {
                <$ty as FromStr>::from_str(raw).ok()
            }
        })*
    };
}

parse_via_from_str!(usize, i64, bool, Mode);

impl ParseOverride for Option<u64> {
    fn parse_override(raw: &str) -> Option<Self> {
        raw.parse().ok().map(Some)
    }
}

/// Get the user config directory
pub fn get_config_dir() -> Option<PathBuf> {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config).join("pascal-lattice"));
    }

    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".config").join("pascal-lattice"));
    }

    if let Ok(appdata) = std::env::var("APPDATA") {
        return Some(PathBuf::from(appdata).join("pascal-lattice"));
    }

    None
}

/// Get the user config file path (~/.config/pascal-lattice/config.toml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Load configuration from an explicit file
pub fn load_config_from(path: &Path) -> Result<GenerateConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::IoError)?;
    toml::from_str(&content).map_err(ConfigError::ParseError)
}

/// Load user-level configuration
/// Returns default config if file doesn't exist
pub fn load_user_config() -> Result<GenerateConfig, ConfigError> {
    match get_config_path() {
        Some(path) if path.exists() => load_config_from(&path),
        _ => Ok(GenerateConfig::default()),
    }
}

/// Save configuration to an explicit file, creating parent directories
pub fn save_config_to(
    config: &GenerateConfig,
    path: &Path,
) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(ConfigError::IoError)?;
        }
    }

    let content = toml::to_string_pretty(config).map_err(ConfigError::SerializeError)?;
    fs::write(path, content).map_err(ConfigError::IoError)
}

/// Save user-level configuration
pub fn save_user_config(config: &GenerateConfig) -> Result<(), ConfigError> {
    let path = get_config_path().ok_or(ConfigError::NoConfigDir)?;
    save_config_to(config, &path)
}

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(toml::de::Error),
    SerializeError(toml::ser::Error),
    EnvError { var: String, value: String },
    NoConfigDir,
}

impl std::fmt::Display for ConfigError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Config parse error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Config serialize error: {}", e),
            ConfigError::EnvError { var, value } => {
                write!(f, "Invalid value '{}' for {}", value, var)
            }
            ConfigError::NoConfigDir => write!(f, "Cannot determine config directory"),
        }
    }
}

impl std::error::Error for ConfigError {}
