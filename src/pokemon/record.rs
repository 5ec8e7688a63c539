//! Typed Pokémon record.
//!
//! Mirrors the subset of the PokeAPI `pokemon` resource the game shows.
//! Every field is optional on the wire: a missing or `null` field decodes
//! to its empty value instead of failing, and the accessors below turn the
//! nested shape into the strings the card displays.
//!
//! ```
//! use smash_or_pass::pokemon::Record;
//!
//! let record = Record::from_json(r#"{
//!     "name": "bulbasaur",
//!     "types": [{"slot": 1, "type": {"name": "grass"}}, {"slot": 2, "type": {"name": "poison"}}],
//!     "moves": [{"move": {"name": "razor-wind"}}],
//!     "sprites": {"other": {"dream_world": {"front_default": null},
//!                           "official-artwork": {"front_default": "https://img/1.png"}}}
//! }"#).unwrap();
//!
//! assert_eq!(record.display_name(), "BULBASAUR");
//! assert_eq!(record.types_text().as_deref(), Some("grass, poison"));
//! assert_eq!(record.image(), Some("https://img/1.png"));
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::{PokemonId, TypeList, TypeName};

/// Decode `null` the same way as a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A `{ "name": ... }` reference to another API resource.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
}

/// One entry of the `types` array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: Option<u8>,

    #[serde(rename = "type", default)]
    pub kind: Option<NamedResource>,
}

/// One entry of the `moves` array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move", default)]
    pub kind: Option<NamedResource>,
}

/// A sprite variant with a front image.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSet {
    #[serde(default)]
    pub front_default: Option<String>,
}

/// Alternative artwork under `sprites.other`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(default)]
    pub dream_world: Option<SpriteSet>,

    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<SpriteSet>,
}

/// The `sprites` object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,

    #[serde(default)]
    pub other: Option<OtherSprites>,
}

/// A Pokémon as served by the provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: Option<PokemonId>,

    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    #[serde(default, deserialize_with = "nullable")]
    pub types: Vec<TypeSlot>,

    #[serde(default, deserialize_with = "nullable")]
    pub moves: Vec<MoveSlot>,

    #[serde(default, deserialize_with = "nullable")]
    pub sprites: Sprites,
}

impl Record {
    /// Create a minimal record, mostly for fixtures.
    pub fn new<'a>(name: impl Into<String>, types: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            name: name.into(),
            types: types
                .into_iter()
                .enumerate()
                .map(|(i, t)| TypeSlot {
                    slot: u8::try_from(i + 1).ok(),
                    kind: Some(NamedResource { name: t.to_string() }),
                })
                .collect(),
            ..Self::default()
        }
    }

    /// Attach move names.
    #[must_use]
    pub fn with_moves<'a>(mut self, moves: impl IntoIterator<Item = &'a str>) -> Self {
        self.moves = moves
            .into_iter()
            .map(|m| MoveSlot {
                kind: Some(NamedResource { name: m.to_string() }),
            })
            .collect();
        self
    }

    /// Attach the official artwork URL.
    #[must_use]
    pub fn with_artwork(mut self, url: impl Into<String>) -> Self {
        let other = self.sprites.other.get_or_insert_with(OtherSprites::default);
        other.official_artwork = Some(SpriteSet {
            front_default: Some(url.into()),
        });
        self
    }

    /// Parse a PokeAPI JSON document.
    ///
    /// Fails only when the document is not a JSON object of the expected
    /// shape; absent fields are fine.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Upper-cased name for the card title.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name.to_uppercase()
    }

    /// Type names in slot order, skipping empty entries.
    #[must_use]
    pub fn type_list(&self) -> TypeList {
        self.types
            .iter()
            .filter_map(|slot| slot.kind.as_ref())
            .filter(|kind| !kind.name.is_empty())
            .map(|kind| TypeName::new(kind.name.clone()))
            .collect()
    }

    /// Primary type, if the record has any.
    #[must_use]
    pub fn primary_type(&self) -> Option<TypeName> {
        self.type_list().primary().cloned()
    }

    /// `"grass"` or `"grass, poison"`. At most two types are shown.
    #[must_use]
    pub fn types_text(&self) -> Option<String> {
        let types = self.type_list();
        let shown: Vec<&str> = types.iter().take(2).map(TypeName::as_str).collect();
        if shown.is_empty() {
            None
        } else {
            Some(shown.join(", "))
        }
    }

    /// Move names in order, skipping empty entries.
    pub fn move_names(&self) -> impl Iterator<Item = &str> {
        self.moves
            .iter()
            .filter_map(|slot| slot.kind.as_ref())
            .map(|kind| kind.name.as_str())
            .filter(|name| !name.is_empty())
    }

    /// Blurb listing up to three moves, or `None` for a moveless record.
    #[must_use]
    pub fn moves_text(&self) -> Option<String> {
        let moves: Vec<&str> = self.move_names().take(3).collect();
        let listed = match moves.as_slice() {
            [] => return None,
            [only] => (*only).to_string(),
            [first, second] => format!("{first}, and {second}"),
            [first, second, third, ..] => format!("{first}, {second}, and {third}"),
        };
        Some(format!("Some of my moves are: {listed}"))
    }

    /// Best available image: dream world, then official artwork, then the
    /// default front sprite.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        let other = self.sprites.other.as_ref();
        let dream_world = other
            .and_then(|o| o.dream_world.as_ref())
            .and_then(|s| s.front_default.as_deref());
        let artwork = other
            .and_then(|o| o.official_artwork.as_ref())
            .and_then(|s| s.front_default.as_deref());

        dream_world
            .or(artwork)
            .or(self.sprites.front_default.as_deref())
    }
}
