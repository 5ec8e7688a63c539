//! Card styling per elemental type.

use crate::core::TypeName;

/// The eighteen elemental types the card has styling for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KnownType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl KnownType {
    pub const ALL: [KnownType; 18] = [
        KnownType::Normal,
        KnownType::Fire,
        KnownType::Water,
        KnownType::Electric,
        KnownType::Grass,
        KnownType::Ice,
        KnownType::Fighting,
        KnownType::Poison,
        KnownType::Ground,
        KnownType::Flying,
        KnownType::Psychic,
        KnownType::Bug,
        KnownType::Rock,
        KnownType::Ghost,
        KnownType::Dragon,
        KnownType::Dark,
        KnownType::Steel,
        KnownType::Fairy,
    ];

    /// The provider's name for this type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            KnownType::Normal => "normal",
            KnownType::Fire => "fire",
            KnownType::Water => "water",
            KnownType::Electric => "electric",
            KnownType::Grass => "grass",
            KnownType::Ice => "ice",
            KnownType::Fighting => "fighting",
            KnownType::Poison => "poison",
            KnownType::Ground => "ground",
            KnownType::Flying => "flying",
            KnownType::Psychic => "psychic",
            KnownType::Bug => "bug",
            KnownType::Rock => "rock",
            KnownType::Ghost => "ghost",
            KnownType::Dragon => "dragon",
            KnownType::Dark => "dark",
            KnownType::Steel => "steel",
            KnownType::Fairy => "fairy",
        }
    }

    /// Look up a type by provider name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// CSS class applied to the card container.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            KnownType::Normal => "normal-class",
            KnownType::Fire => "fire-class",
            KnownType::Water => "water-class",
            KnownType::Electric => "electric-class",
            KnownType::Grass => "grass-class",
            KnownType::Ice => "ice-class",
            KnownType::Fighting => "fighting-class",
            KnownType::Poison => "poison-class",
            KnownType::Ground => "ground-class",
            KnownType::Flying => "flying-class",
            KnownType::Psychic => "psychic-class",
            KnownType::Bug => "bug-class",
            KnownType::Rock => "rock-class",
            KnownType::Ghost => "ghost-class",
            KnownType::Dragon => "dragon-class",
            KnownType::Dark => "dark-class",
            KnownType::Steel => "steel-class",
            KnownType::Fairy => "fairy-class",
        }
    }

    /// Card background color.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            KnownType::Normal => "#A8A77A",
            KnownType::Fire => "#EE8130",
            KnownType::Water => "#6390F0",
            KnownType::Electric => "#F7D02C",
            KnownType::Grass => "#7AC74C",
            KnownType::Ice => "#96D9D6",
            KnownType::Fighting => "#C22E28",
            KnownType::Poison => "#A33EA1",
            KnownType::Ground => "#E2BFC5",
            KnownType::Flying => "#A98FF3",
            KnownType::Psychic => "#F95587",
            KnownType::Bug => "#A6B91A",
            KnownType::Rock => "#B6A136",
            KnownType::Ghost => "#735797",
            KnownType::Dragon => "#6F35FC",
            KnownType::Dark => "#705746",
            KnownType::Steel => "#B7B7CE",
            KnownType::Fairy => "#D685AD",
        }
    }
}

/// CSS class for a type name. Unknown types get no class.
#[must_use]
pub fn css_class(type_name: &TypeName) -> Option<&'static str> {
    KnownType::from_name(type_name.as_str()).map(KnownType::css_class)
}

/// Card color for a type name. Unknown types get no color.
#[must_use]
pub fn card_color(type_name: &TypeName) -> Option<&'static str> {
    KnownType::from_name(type_name.as_str()).map(KnownType::color)
}
