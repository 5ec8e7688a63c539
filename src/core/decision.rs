//! Decision vocabulary: appraisals, type lists, decision records.
//!
//! A decision is what the player does with one card: smash it or pass on
//! it. Every decision is captured as a `DecisionRecord`, which is the unit
//! the session ledger appends and the unit undo pops.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

use super::id::PokemonId;

/// The label attached to a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appraisal {
    /// The player accepted the Pokémon.
    Smashed,
    /// The player rejected the Pokémon.
    Passed,
}

impl Appraisal {
    /// Both appraisals, in display order.
    pub const ALL: [Appraisal; 2] = [Appraisal::Smashed, Appraisal::Passed];

    /// Label used in persisted keys and values.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Appraisal::Smashed => "smashed",
            Appraisal::Passed => "passed",
        }
    }

    /// Parse a persisted label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "smashed" => Some(Appraisal::Smashed),
            "passed" => Some(Appraisal::Passed),
            _ => None,
        }
    }
}

impl std::fmt::Display for Appraisal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Elemental type name as reported by the provider (`"grass"`, `"fire"`).
///
/// Names are kept verbatim; unknown types are carried through untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(pub String);

impl TypeName {
    /// Create a type name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the raw name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered types of one Pokémon. Primary type first.
///
/// Pokémon carry one or two types, so the list lives inline.
/// Persisted as a single comma-joined string (`"grass,poison"`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TypeList(SmallVec<[TypeName; 2]>);

impl TypeList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a type.
    pub fn push(&mut self, name: TypeName) {
        self.0.push(name);
    }

    /// The primary type, if any.
    #[must_use]
    pub fn primary(&self) -> Option<&TypeName> {
        self.0.first()
    }

    /// Number of types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the types in order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeName> {
        self.0.iter()
    }

    /// Comma-joined persisted form.
    #[must_use]
    pub fn joined(&self) -> String {
        self.0
            .iter()
            .map(TypeName::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Parse the comma-joined form. Blank segments are dropped.
    #[must_use]
    pub fn parse_joined(joined: &str) -> Self {
        joined
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(TypeName::from)
            .collect()
    }
}

impl FromIterator<TypeName> for TypeList {
    fn from_iter<I: IntoIterator<Item = TypeName>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for TypeList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(TypeName::from).collect()
    }
}

impl Serialize for TypeList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.joined())
    }
}

impl<'de> Deserialize<'de> for TypeList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let joined = String::deserialize(deserializer)?;
        Ok(Self::parse_joined(&joined))
    }
}

/// One smash-or-pass decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// The Pokémon that was judged.
    pub id: PokemonId,

    /// What the player decided.
    pub appraisal: Appraisal,

    /// The judged Pokémon's types, primary first.
    pub types: TypeList,
}

impl DecisionRecord {
    /// Create a new decision record.
    ///
    /// ```
    /// use smash_or_pass::core::{Appraisal, DecisionRecord, PokemonId};
    ///
    /// let decision = DecisionRecord::new(PokemonId::new(1), Appraisal::Smashed, ["grass", "poison"]);
    /// assert_eq!(decision.types.joined(), "grass,poison");
    /// ```
    pub fn new<'a>(
        id: PokemonId,
        appraisal: Appraisal,
        types: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            id,
            appraisal,
            types: types.into_iter().collect(),
        }
    }

    /// Create a record from an already built type list.
    #[must_use]
    pub fn with_types(id: PokemonId, appraisal: Appraisal, types: TypeList) -> Self {
        Self { id, appraisal, types }
    }
}
