//! Pokémon records: typed shape, providers, card styling.
//!
//! - `record`: the typed record with fallbacks for missing fields
//! - `provider`: the `PokemonProvider` seam and an offline implementation
//! - `style`: CSS class and card color per elemental type

pub mod record;
pub mod provider;
pub mod style;

pub use record::{MoveSlot, NamedResource, OtherSprites, Record, SpriteSet, Sprites, TypeSlot};
pub use provider::{PokemonProvider, ProviderError, StaticProvider};
pub use style::{card_color, css_class, KnownType};
