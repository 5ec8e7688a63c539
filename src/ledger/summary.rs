//! Results summary shown to the player.

use serde::{Deserialize, Serialize};

use crate::core::{Appraisal, PokemonId, TypeName};

/// Smash and pass counts for one elemental type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeTally {
    pub type_name: TypeName,
    pub smashed: u32,
    pub passed: u32,
}

impl TypeTally {
    /// Count for one appraisal.
    #[must_use]
    pub fn get(&self, appraisal: Appraisal) -> u32 {
        match appraisal {
            Appraisal::Smashed => self.smashed,
            Appraisal::Passed => self.passed,
        }
    }

    /// Total decisions involving this type.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.smashed + self.passed
    }
}

/// Accepted and rejected Pokémon, plus the per-type tally.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsSummary {
    /// Smashed IDs in decision order.
    pub smashed: Vec<PokemonId>,

    /// Passed IDs in decision order.
    pub passed: Vec<PokemonId>,

    /// Non-zero tallies, sorted by type name.
    pub by_type: Vec<TypeTally>,
}

impl ResultsSummary {
    #[must_use]
    pub fn smashed_count(&self) -> usize {
        self.smashed.len()
    }

    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.passed.len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.smashed_count() + self.passed_count()
    }

    /// Tally for one type, if it was ever counted.
    #[must_use]
    pub fn tally_for(&self, type_name: &TypeName) -> Option<&TypeTally> {
        self.by_type.iter().find(|t| &t.type_name == type_name)
    }

    /// The type smashed most often. Ties go to the alphabetically first.
    #[must_use]
    pub fn favourite_type(&self) -> Option<&TypeName> {
        self.by_type
            .iter()
            .filter(|t| t.smashed > 0)
            .max_by(|a, b| a.smashed.cmp(&b.smashed).then_with(|| b.type_name.cmp(&a.type_name)))
            .map(|t| &t.type_name)
    }

    /// One-line summary for the results panel.
    #[must_use]
    pub fn text(&self) -> String {
        format!(
            "You smashed {} and passed {} Pokémon",
            self.smashed_count(),
            self.passed_count()
        )
    }
}

impl std::fmt::Display for ResultsSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}
