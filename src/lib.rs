//! # smash-or-pass
//!
//! Engine for a swipe game over Pokémon: each card is smashed (kept) or
//! passed (rejected), and the session survives restarts.
//!
//! ## Design Principles
//!
//! 1. **Collaborators behind traits**: records come from a
//!    `PokemonProvider`, frames go to a `UIRenderer`, cues go to a
//!    `FeedbackSink`. The engine itself does no I/O beyond its `Store`.
//!
//! 2. **Fetch before mutate**: an action that fails to load its target
//!    record changes nothing.
//!
//! 3. **Atomic bookkeeping**: a decision touches several store keys; they
//!    are written as one batch or not at all.
//!
//! ## Modules
//!
//! - `core`: Pokémon IDs, appraisals, type lists, decision records
//! - `sequence`: forward and backward walk over the ID space, with its gap
//! - `store`: persisted key-value storage (memory and file backed)
//! - `ledger`: decision history, per-type counters, undo, results
//! - `pokemon`: typed records, providers, per-type card styling
//! - `game`: the controller, its collaborator traits, configuration
//! - `error`: crate error type

pub mod core;
pub mod error;
pub mod game;
pub mod ledger;
pub mod pokemon;
pub mod sequence;
pub mod store;

// Re-export commonly used types
pub use crate::core::{Appraisal, DecisionRecord, PokemonId, TypeList, TypeName};

pub use crate::error::{Direction, GameError, Result};

pub use crate::sequence::IdSequencer;

pub use crate::store::{FileStore, MemoryStore, Store, StoreError, StoreExt, StoreKey, WriteBatch};

pub use crate::ledger::{ResultsSummary, SessionLedger, TypeTally};

pub use crate::pokemon::{PokemonProvider, ProviderError, Record, StaticProvider};

pub use crate::game::{
    Confirmation, FeedbackCue, FeedbackSink, Frame, GameConfig, GameController, Silent, UIRenderer,
};
