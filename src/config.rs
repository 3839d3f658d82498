use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GiftlogError, Result};

/// Directory holding settings and the streamer registry.
const CONFIG_DIR: &str = "config";
/// Settings filename inside `config/`.
const SETTINGS_FILE: &str = "settings.toml";
/// Default registry filename inside `config/`.
const REGISTRY_FILE: &str = "streamers.json";
/// Default placeholder-name prefix for newly registered streamers.
const DEFAULT_NAME_PREFIX: &str = "主播_";

/// Project-level configuration resolved from an installation root.
#[derive(Debug, Clone)]
pub struct Config {
    /// Installation root everything else is relative to.
    pub project_root: PathBuf,
    /// Path to the `config/` directory.
    pub config_dir: PathBuf,
    /// Path to `config/settings.toml`.
    pub settings_path: PathBuf,
    /// Default scan root, `data/streamers/`.
    pub data_dir: PathBuf,
    /// Path to `output/`.
    pub output_dir: PathBuf,
    /// Path to `logs/`.
    pub logs_dir: PathBuf,
    /// User settings loaded from settings.toml.
    pub settings: UserSettings,
}

/// User-configurable settings from config/settings.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Directory walk configuration.
    pub scan: ScanSettings,
    /// Registry configuration.
    pub registry: RegistrySettings,
}

/// Directory walk settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    /// Follow symbolic links while walking.
    pub follow_links: bool,
    /// Maximum walk depth (unset = unlimited).
    pub max_depth: Option<usize>,
}

/// Registry settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrySettings {
    /// Registry filename inside `config/`.
    pub file_name: String,
    /// Prefix of the placeholder display name.
    pub name_prefix: String,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            file_name: REGISTRY_FILE.into(),
            name_prefix: DEFAULT_NAME_PREFIX.into(),
        }
    }
}

impl Config {
    /// Create config for a given installation root.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let config_dir = project_root.join(CONFIG_DIR);
        let settings_path = config_dir.join(SETTINGS_FILE);
        let data_dir = project_root.join("data").join("streamers");
        let output_dir = project_root.join("output");
        let logs_dir = project_root.join("logs");

        let settings = Self::load_settings(&settings_path).unwrap_or_default();

        Self {
            project_root,
            config_dir,
            settings_path,
            data_dir,
            output_dir,
            logs_dir,
            settings,
        }
    }

    /// Create config from the current working directory.
    pub fn from_cwd() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| GiftlogError::Config(format!("cannot get cwd: {e}")))?;
        Ok(Self::new(cwd))
    }

    fn load_settings(settings_path: &Path) -> Option<UserSettings> {
        if !settings_path.exists() {
            return None;
        }
        let content = std::fs::read_to_string(settings_path).ok()?;
        match toml::from_str(&content) {
            Ok(settings) => Some(settings),
            Err(e) => {
                tracing::warn!(path = %settings_path.display(), "ignoring invalid settings: {e}");
                None
            }
        }
    }

    /// Save current settings to settings.toml.
    pub fn save_settings(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        let content = toml::to_string_pretty(&self.settings)
            .map_err(|e| GiftlogError::Config(format!("failed to serialize settings: {e}")))?;
        std::fs::write(&self.settings_path, content)?;
        Ok(())
    }

    /// Path of the registry backing store.
    #[must_use]
    pub fn registry_path(&self) -> PathBuf {
        self.config_dir.join(&self.settings.registry.file_name)
    }

    /// Create the installation layout, returning the directories that did
    /// not exist before.
    pub fn ensure_layout(&self) -> Result<Vec<PathBuf>> {
        let mut created = Vec::new();
        for dir in [
            &self.config_dir,
            &self.data_dir,
            &self.output_dir,
            &self.logs_dir,
        ] {
            if dir.is_dir() {
                continue;
            }
            std::fs::create_dir_all(dir)?;
            tracing::info!(dir = %dir.display(), "created directory");
            created.push(dir.clone());
        }
        Ok(created)
    }
}
