//! The fixed set of persisted keys.
//!
//! Every value the session writes lives under one of these keys. The string
//! forms match the layout the web page keeps in browser storage, so a
//! session exported from there can be loaded directly.

use crate::core::{Appraisal, TypeName};

/// Prefix shared by all per-type counter keys.
pub const COUNTER_PREFIX: &str = "counter:";

/// A persisted key and, implicitly, the schema of its value.
///
/// | Key | Value |
/// |-----|-------|
/// | `LastPokemonId` | `PokemonId` |
/// | `SmashedIds` / `PassedIds` | `Vec<PokemonId>` |
/// | `DecisionIds` | `Vec<PokemonId>` |
/// | `Appraisals` | `Vec<Appraisal>` |
/// | `ListOfTypes` | `Vec<TypeList>` |
/// | `Counter` | `u32` |
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StoreKey {
    LastPokemonId,
    SmashedIds,
    PassedIds,
    /// ID of every decision, index-aligned with `Appraisals`.
    DecisionIds,
    Appraisals,
    ListOfTypes,
    Counter(Appraisal, TypeName),
}

impl StoreKey {
    /// The ID collection for an outcome.
    #[must_use]
    pub fn ids_for(appraisal: Appraisal) -> Self {
        match appraisal {
            Appraisal::Smashed => StoreKey::SmashedIds,
            Appraisal::Passed => StoreKey::PassedIds,
        }
    }

    /// Counter key for one `(appraisal, type)` pair.
    #[must_use]
    pub fn counter(appraisal: Appraisal, type_name: &TypeName) -> Self {
        StoreKey::Counter(appraisal, type_name.clone())
    }

    /// The raw storage key.
    #[must_use]
    pub fn as_key(&self) -> String {
        match self {
            StoreKey::LastPokemonId => "lastPokemonId".to_string(),
            StoreKey::SmashedIds => "smashedIDs".to_string(),
            StoreKey::PassedIds => "passedIDs".to_string(),
            StoreKey::DecisionIds => "decisionIDs".to_string(),
            StoreKey::Appraisals => "appraisals".to_string(),
            StoreKey::ListOfTypes => "listOfTypes".to_string(),
            StoreKey::Counter(appraisal, type_name) => {
                format!("{COUNTER_PREFIX}{}:{}", appraisal.label(), type_name)
            }
        }
    }

    /// Parse a raw storage key. Unknown keys yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "lastPokemonId" => Some(StoreKey::LastPokemonId),
            "smashedIDs" => Some(StoreKey::SmashedIds),
            "passedIDs" => Some(StoreKey::PassedIds),
            "decisionIDs" => Some(StoreKey::DecisionIds),
            "appraisals" => Some(StoreKey::Appraisals),
            "listOfTypes" => Some(StoreKey::ListOfTypes),
            _ => {
                let rest = raw.strip_prefix(COUNTER_PREFIX)?;
                let (label, type_name) = rest.split_once(':')?;
                let appraisal = Appraisal::from_label(label)?;
                if type_name.is_empty() {
                    return None;
                }
                Some(StoreKey::Counter(appraisal, TypeName::from(type_name)))
            }
        }
    }
}

impl std::fmt::Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_key())
    }
}
