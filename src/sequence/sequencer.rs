//! Stepping through the Pokémon ID space.
//!
//! The external ID space is contiguous from `FIRST` to `NUMBER_BEFORE_JUMP`,
//! then has a hole, then resumes at `NUMBER_AFTER_JUMP` (alternate forms)
//! and runs to `LAST`. Stepping forward from `NUMBER_BEFORE_JUMP` adds
//! `EMPTY_RANGE`; stepping back from `NUMBER_AFTER_JUMP` subtracts it.
//!
//! ```
//! use smash_or_pass::core::PokemonId;
//! use smash_or_pass::sequence::IdSequencer;
//!
//! let mut seq = IdSequencer::new(Some(PokemonId::new(904)));
//! assert_eq!(seq.next(), Some(PokemonId::new(905)));
//! assert_eq!(seq.next(), Some(PokemonId::new(10001)));
//! assert_eq!(seq.previous(), Some(PokemonId::new(905)));
//! ```

use crate::core::PokemonId;

/// First valid Pokémon ID.
pub const FIRST: u32 = 1;

/// Last valid Pokémon ID.
pub const LAST: u32 = 10249;

/// Width of the jump across the hole.
pub const EMPTY_RANGE: u32 = 9096;

/// Last ID before the hole.
pub const NUMBER_BEFORE_JUMP: u32 = 905;

/// First ID after the hole.
pub const NUMBER_AFTER_JUMP: u32 = 10001;

/// The ID that follows `id`, or `None` at or past `LAST`.
#[must_use]
pub fn successor(id: PokemonId) -> Option<PokemonId> {
    if id.0 >= LAST {
        return None;
    }
    let addend = if id.0 == NUMBER_BEFORE_JUMP { EMPTY_RANGE } else { 1 };
    Some(PokemonId(id.0 + addend))
}

/// The ID that precedes `id`, or `None` at or before `FIRST`.
#[must_use]
pub fn predecessor(id: PokemonId) -> Option<PokemonId> {
    if id.0 <= FIRST {
        return None;
    }
    let subtrahend = if id.0 == NUMBER_AFTER_JUMP { EMPTY_RANGE } else { 1 };
    Some(PokemonId(id.0 - subtrahend))
}

/// Whether `id` falls in the hole no walk ever produces.
#[must_use]
pub fn is_in_gap(id: PokemonId) -> bool {
    id.0 > NUMBER_BEFORE_JUMP && id.0 < NUMBER_AFTER_JUMP
}

/// Stateful cursor over the ID space.
///
/// Invariant: `FIRST <= current <= LAST`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdSequencer {
    current: PokemonId,
}

impl Default for IdSequencer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl IdSequencer {
    /// Create a sequencer at `initial`, or at `FIRST` when none is given.
    ///
    /// Out-of-range starting points are clamped into `[FIRST, LAST]`.
    #[must_use]
    pub fn new(initial: Option<PokemonId>) -> Self {
        let start = initial.map_or(FIRST, |id| id.0.clamp(FIRST, LAST));
        Self {
            current: PokemonId(start),
        }
    }

    /// The ID the cursor points at.
    #[must_use]
    pub fn current(&self) -> PokemonId {
        self.current
    }

    /// Advance and return the new ID, or `None` once `LAST` is reached.
    pub fn next(&mut self) -> Option<PokemonId> {
        let next = successor(self.current)?;
        self.current = next;
        Some(next)
    }

    /// Retreat and return the new ID, or `None` at `FIRST`.
    pub fn previous(&mut self) -> Option<PokemonId> {
        let previous = predecessor(self.current)?;
        self.current = previous;
        Some(previous)
    }

    /// What `next()` would return, without moving.
    #[must_use]
    pub fn peek_next(&self) -> Option<PokemonId> {
        successor(self.current)
    }

    /// What `previous()` would return, without moving.
    #[must_use]
    pub fn peek_previous(&self) -> Option<PokemonId> {
        predecessor(self.current)
    }

    /// Move back to `FIRST`.
    pub fn restart(&mut self) {
        self.current = PokemonId(FIRST);
    }

    /// Check if the cursor is at the end of the sequence.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.current.0 >= LAST
    }
}
