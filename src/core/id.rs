//! Pokémon identifiers.
//!
//! Every card shown in the game is addressed by a `PokemonId`, the numeric
//! key the external Pokémon API uses for its records.
//!
//! ## Persisted Form
//!
//! IDs serialize as plain JSON numbers. Sessions written by older page
//! builds stored them as numeric strings (`"42"`), so deserialization
//! accepts both forms.
//!
//! ```
//! use smash_or_pass::core::PokemonId;
//!
//! let from_number: PokemonId = serde_json::from_str("42").unwrap();
//! let from_string: PokemonId = serde_json::from_str("\"42\"").unwrap();
//!
//! assert_eq!(from_number, from_string);
//! assert_eq!(serde_json::to_string(&from_number).unwrap(), "42");
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a Pokémon record in the external ID space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PokemonId(pub u32);

impl PokemonId {
    /// Create a new Pokémon ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for PokemonId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PokemonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u32),
    Text(String),
}

impl<'de> Deserialize<'de> for PokemonId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawId::deserialize(deserializer)? {
            RawId::Number(id) => Ok(Self(id)),
            RawId::Text(text) => text
                .trim()
                .parse::<u32>()
                .map(Self)
                .map_err(|_| serde::de::Error::custom(format!("invalid pokemon id {text:?}"))),
        }
    }
}
