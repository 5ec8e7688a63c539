//! Core vocabulary: Pokémon IDs, appraisals, type lists, decision records.
//!
//! Everything else in the crate speaks in these types.

pub mod id;
pub mod decision;

pub use id::PokemonId;
pub use decision::{Appraisal, DecisionRecord, TypeList, TypeName};
