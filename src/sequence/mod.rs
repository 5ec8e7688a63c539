//! ID sequencing: which Pokémon comes next, which came before.
//!
//! The sequencer is pure with respect to the rest of the crate. It owns a
//! single cursor and knows about the one hole in the external ID space.

pub mod sequencer;

pub use sequencer::{
    is_in_gap, predecessor, successor, IdSequencer, EMPTY_RANGE, FIRST, LAST, NUMBER_AFTER_JUMP,
    NUMBER_BEFORE_JUMP,
};
