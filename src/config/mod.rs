//! Configuration module for the prefix heap crate.
//!
//! Settings are layered: built-in defaults, then an optional file (TOML,
//! JSON or YAML), then environment variables carrying a prefix. The merged
//! result is validated before use.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use config::{Config, Environment, File, FileFormat};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::data_structures::lanai_trie::LanaiTrie;
use crate::data_structures::molokai_heap::MolokaiHeap;
use crate::error::config::ConfigError;
use crate::error::PrefixHeapResult;

pub mod heap;
pub mod trie;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default configuration location
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "PREFIX_HEAP";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix trie settings
    pub trie: trie::TrieSettings,

    /// Binary heap settings
    pub heap: heap::HeapSettings,

    /// Log configuration
    pub log: LogConfig,
}

impl AppConfig {
    /// Builds an empty trie from the trie settings.
    pub fn build_trie(&self) -> LanaiTrie {
        LanaiTrie::with_config(self.trie.to_trie_config())
    }

    /// Builds an empty heap from the heap settings.
    pub fn build_heap<T: Ord>(&self) -> MolokaiHeap<T> {
        MolokaiHeap::with_config(self.heap.to_heap_config())
    }

    /// Serializes the configuration in the format matching `path`'s
    /// extension.
    pub fn render_for(&self, path: &Path) -> ConfigResult<String> {
        match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| ConfigError::SerializeError(e.to_string())),
            ConfigFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| ConfigError::SerializeError(e.to_string())),
            ConfigFormat::Yaml => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.trie.validate()?;
        self.heap.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: true,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(ConfigError::invalid(
                "log.level",
                format!("unknown log level '{other}'"),
            )),
        }
    }
}

/// File formats understood by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.json`
    Json,
    /// `.yaml` / `.yml`
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    fn file_format(self) -> FileFormat {
        match self {
            Self::Toml => FileFormat::Toml,
            Self::Json => FileFormat::Json,
            Self::Yaml => FileFormat::Yaml,
        }
    }
}

/// Configuration loader.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from defaults, the file and environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(AppConfig)` if the configuration was loaded and validated
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<AppConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&AppConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = ConfigFormat::from_path(path)?;
            builder = builder.add_source(File::from(path.as_path()).format(format.file_format()));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        app_config.validate()?;
        tracing::debug!(path = ?self.config_path, "configuration loaded");

        Ok(app_config)
    }
}

/// Writes the default configuration to `output`, in the format picked by
/// its extension, creating parent directories as needed.
///
/// An existing file is only replaced when `force` is set.
pub fn write_default_config(output: &Path, force: bool) -> PrefixHeapResult<()> {
    if output.exists() && !force {
        return Err(ConfigError::AlreadyExists(output.to_path_buf()).into());
    }

    let rendered = AppConfig::default().render_for(output)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, rendered)?;

    tracing::info!(path = ?output, "default configuration written");
    Ok(())
}

/// Global configuration.
static GLOBAL_CONFIG: OnceCell<Arc<AppConfig>> = OnceCell::new();

/// Loads the configuration at [`DEFAULT_CONFIG_PATH`] and installs it
/// globally.
///
/// A missing file is not an error: the defaults (plus environment
/// overrides) are used instead.
pub fn init_default_config() -> ConfigResult<()> {
    let loader = ConfigLoader::new(Some(DEFAULT_CONFIG_PATH), ENV_PREFIX);

    let config = match loader.load() {
        Ok(config) => config,
        Err(ConfigError::FileNotFound(_)) => {
            tracing::warn!(
                "Default configuration file not found at: {}",
                DEFAULT_CONFIG_PATH
            );
            ConfigLoader::new(None::<&Path>, ENV_PREFIX).load()?
        }
        Err(e) => return Err(e),
    };

    init_global_config(config);
    Ok(())
}

/// Initialize the global configuration.
///
/// Later calls are ignored with a warning.
pub fn init_global_config(config: AppConfig) {
    if GLOBAL_CONFIG.set(Arc::new(config)).is_err() {
        tracing::warn!("Global configuration was already initialized, ignoring new configuration");
    }
}

/// Get the global configuration, if it has been initialized.
pub fn get_global_config() -> Option<Arc<AppConfig>> {
    GLOBAL_CONFIG.get().cloned()
}
