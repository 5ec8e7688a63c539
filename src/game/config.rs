//! Game configuration.
//!
//! `GameConfig` is read from a TOML file and then adjusted from the
//! environment:
//!
//! ```toml
//! store_path = "/home/ash/.local/share/smash-or-pass/session.json"
//! fixtures_dir = "fixtures/pokemon"
//! confirm_restart = true
//! resume_session = true
//! ```
//!
//! Every field is optional; missing fields take their `Default` value.
//!
//! ## Environment
//!
//! - `SMASH_OR_PASS_STORE`: overrides `store_path`
//! - `SMASH_OR_PASS_FIXTURES`: overrides `fixtures_dir`

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::pokemon::StaticProvider;
use crate::store::{FileStore, MemoryStore, Store};

/// Environment variable overriding `store_path`.
pub const STORE_ENV: &str = "SMASH_OR_PASS_STORE";

/// Environment variable overriding `fixtures_dir`.
pub const FIXTURES_ENV: &str = "SMASH_OR_PASS_FIXTURES";

/// Settings for one game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Session file. `None` keeps the session in memory only.
    pub store_path: Option<PathBuf>,

    /// Directory of `<id>.json` records for offline play.
    pub fixtures_dir: Option<PathBuf>,

    /// Ask before wiping progress on restart.
    pub confirm_restart: bool,

    /// Continue after the last decision of a previous session.
    ///
    /// When false, `start()` begins at the first ID even if a pointer is
    /// stored. Recorded decisions are kept either way.
    pub resume_session: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            store_path: None,
            fixtures_dir: None,
            confirm_restart: true,
            resume_session: true,
        }
    }
}

impl GameConfig {
    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist the session to `path`.
    #[must_use]
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = Some(path.into());
        self
    }

    /// Load offline records from `dir`.
    #[must_use]
    pub fn with_fixtures_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fixtures_dir = Some(dir.into());
        self
    }

    /// Set whether restart asks for confirmation.
    #[must_use]
    pub fn with_confirm_restart(mut self, confirm: bool) -> Self {
        self.confirm_restart = confirm;
        self
    }

    /// Set whether `start()` resumes from the stored pointer.
    #[must_use]
    pub fn with_resume_session(mut self, resume: bool) -> Self {
        self.resume_session = resume;
        self
    }

    /// Parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| GameError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml(&contents)
            .map_err(|e| GameError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Parse config from TOML text.
    pub fn from_toml(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| GameError::Config(format!("failed to render config: {e}")))
    }

    /// Load `path` and apply environment overrides, falling back to defaults.
    ///
    /// A missing file is not worth a warning; a present but unreadable one is.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let mut config = if path.exists() {
            match Self::load(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("config load failed, using defaults: {e}");
                    Self::default()
                }
            }
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        config
    }

    /// Apply `SMASH_OR_PASS_*` variables from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|name| std::env::var(name).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// Blank values are ignored.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(raw) = lookup(STORE_ENV) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                self.store_path = Some(PathBuf::from(trimmed));
            }
        }

        if let Some(raw) = lookup(FIXTURES_ENV) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                self.fixtures_dir = Some(PathBuf::from(trimmed));
            }
        }
    }

    /// Open the configured session store.
    pub fn open_store(&self) -> Result<Box<dyn Store>> {
        match &self.store_path {
            Some(path) => Ok(Box::new(FileStore::open(path.clone())?)),
            None => Ok(Box::new(MemoryStore::new())),
        }
    }

    /// Load the configured offline records.
    ///
    /// Without `fixtures_dir` there is nothing to load and the provider is
    /// empty.
    pub fn open_fixtures(&self) -> Result<StaticProvider> {
        match &self.fixtures_dir {
            Some(dir) => Ok(StaticProvider::from_json_dir(dir)?),
            None => Ok(StaticProvider::new()),
        }
    }
}
