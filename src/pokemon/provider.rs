//! Record providers.
//!
//! The game never talks to the network itself. It asks a `PokemonProvider`
//! for the record behind an ID; a web frontend backs that with the public
//! REST API, while `StaticProvider` serves records from memory or from a
//! directory of saved API responses.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::record::Record;
use crate::core::PokemonId;

/// Errors a provider can report.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ProviderError {
    #[error("pokemon {id} is unavailable: {reason}")]
    Unavailable { id: PokemonId, reason: String },

    #[error("record for pokemon {id} is malformed: {source}")]
    Malformed {
        id: PokemonId,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to load records from {path}: {reason}")]
    Fixtures { path: PathBuf, reason: String },
}

/// Source of Pokémon records, keyed by ID.
pub trait PokemonProvider {
    /// Fetch the record for `id`.
    fn fetch(&self, id: PokemonId) -> Result<Record, ProviderError>;
}

impl<F> PokemonProvider for F
where
    F: Fn(PokemonId) -> Result<Record, ProviderError>,
{
    fn fetch(&self, id: PokemonId) -> Result<Record, ProviderError> {
        self(id)
    }
}

/// Provider backed by an in-memory table of records.
///
/// ## Example
///
/// ```
/// use smash_or_pass::core::PokemonId;
/// use smash_or_pass::pokemon::{PokemonProvider, Record, StaticProvider};
///
/// let mut provider = StaticProvider::new();
/// provider.insert(PokemonId::new(1), Record::new("bulbasaur", ["grass", "poison"]));
///
/// let record = provider.fetch(PokemonId::new(1)).unwrap();
/// assert_eq!(record.display_name(), "BULBASAUR");
/// assert!(provider.fetch(PokemonId::new(2)).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticProvider {
    records: FxHashMap<PokemonId, Record>,
}

impl StaticProvider {
    /// Create an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the record for `id`.
    pub fn insert(&mut self, id: PokemonId, record: Record) {
        self.records.insert(id, record);
    }

    /// Add a record from a raw API response.
    pub fn insert_json(&mut self, id: PokemonId, json: &str) -> Result<(), ProviderError> {
        let record = Record::from_json(json).map_err(|source| ProviderError::Malformed { id, source })?;
        self.insert(id, record);
        Ok(())
    }

    /// Load every `<id>.json` file in `dir`.
    ///
    /// Files whose stem is not a number are skipped.
    pub fn from_json_dir(dir: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let dir = dir.as_ref();
        let fixtures_error = |reason: String| ProviderError::Fixtures {
            path: dir.to_path_buf(),
            reason,
        };

        let mut provider = Self::new();
        let entries = fs::read_dir(dir).map_err(|e| fixtures_error(e.to_string()))?;
        for entry in entries {
            let path = entry.map_err(|e| fixtures_error(e.to_string()))?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| s.parse::<u32>().ok())
                .map(PokemonId::new)
            else {
                tracing::debug!(path = %path.display(), "skipping non-numeric record file");
                continue;
            };
            let contents = fs::read_to_string(&path)
                .map_err(|e| fixtures_error(format!("{}: {e}", path.display())))?;
            provider.insert_json(id, &contents)?;
        }

        tracing::info!(dir = %dir.display(), records = provider.len(), "loaded pokemon records");
        Ok(provider)
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no records are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check if a record exists for `id`.
    #[must_use]
    pub fn contains(&self, id: PokemonId) -> bool {
        self.records.contains_key(&id)
    }
}

impl PokemonProvider for StaticProvider {
    fn fetch(&self, id: PokemonId) -> Result<Record, ProviderError> {
        self.records
            .get(&id)
            .cloned()
            .ok_or_else(|| ProviderError::Unavailable {
                id,
                reason: "no record".to_string(),
            })
    }
}
