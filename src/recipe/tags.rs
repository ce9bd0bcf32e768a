use crate::error::ParseTagError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Generates a closed tag enumeration with a sentinel member, display labels,
/// lenient parsing and label-based serde support.
macro_rules! tag_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $err:ident, sentinel = $sentinel:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every member in picker order, sentinel first.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The human-readable label shown in pickers.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Returns `true` for the member that means "no filter on this dimension".
            pub fn is_sentinel(self) -> bool {
                self == $name::$sentinel
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$sentinel
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = ParseTagError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize(s);
                $name::ALL
                    .iter()
                    .copied()
                    .find(|tag| normalize(tag.label()) == wanted)
                    .ok_or_else(|| ParseTagError::$err(s.to_string()))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Lowercases and strips separators so "Gluten Free", "gluten-free" and
/// "GlutenFree" all compare equal.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

tag_enum! {
    /// A cuisine. `All` is a wildcard used only in selection criteria.
    pub enum Cuisine: Cuisine, sentinel = All {
        All => "All",
        Italian => "Italian",
        Mexican => "Mexican",
        Indian => "Indian",
        Chinese => "Chinese",
        Japanese => "Japanese",
        French => "French",
        Thai => "Thai",
    }
}

tag_enum! {
    /// A dietary restriction a recipe satisfies.
    pub enum DietaryRestriction: DietaryRestriction, sentinel = None {
        None => "None",
        Vegetarian => "Vegetarian",
        Vegan => "Vegan",
        GlutenFree => "Gluten Free",
    }
}

tag_enum! {
    /// An allergen a recipe contains.
    pub enum Allergen: Allergen, sentinel = None {
        None => "None",
        Peanuts => "Peanuts",
        Dairy => "Dairy",
        Shellfish => "Shellfish",
        Soy => "Soy",
        Eggs => "Eggs",
        Fish => "Fish",
        Wheat => "Wheat",
        TreeNuts => "Tree Nuts",
        Sesame => "Sesame",
        Sulfites => "Sulfites",
    }
}
