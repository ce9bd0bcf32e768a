use super::tags::{Allergen, Cuisine, DietaryRestriction};
use std::collections::BTreeSet;
use std::fmt;

/// Identifier assigned to a recipe when its catalog is loaded.
///
/// Ids are 1-based positions in the catalog and stay stable for as long as the
/// catalog lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecipeId(pub u32);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single immutable catalog entry.
///
/// Recipes are only constructed by a [`Catalog`](crate::catalog::Catalog), which
/// guarantees that the cuisine is never the `All` wildcard and that sentinel
/// members have been stripped from the tag sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    id: RecipeId,
    name: String,
    cuisine: Cuisine,
    calories: u32,
    dietary_restrictions: BTreeSet<DietaryRestriction>,
    allergens: BTreeSet<Allergen>,
    image: String,
}

impl Recipe {
    pub(crate) fn new(
        id: RecipeId,
        name: String,
        cuisine: Cuisine,
        calories: u32,
        dietary_restrictions: impl IntoIterator<Item = DietaryRestriction>,
        allergens: impl IntoIterator<Item = Allergen>,
        image: String,
    ) -> Self {
        Self {
            id,
            name,
            cuisine,
            calories,
            dietary_restrictions: dietary_restrictions
                .into_iter()
                .filter(|r| !r.is_sentinel())
                .collect(),
            allergens: allergens.into_iter().filter(|a| !a.is_sentinel()).collect(),
            image,
        }
    }

    pub fn id(&self) -> RecipeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cuisine(&self) -> Cuisine {
        self.cuisine
    }

    pub fn calories(&self) -> u32 {
        self.calories
    }

    pub fn dietary_restrictions(&self) -> &BTreeSet<DietaryRestriction> {
        &self.dietary_restrictions
    }

    pub fn allergens(&self) -> &BTreeSet<Allergen> {
        &self.allergens
    }

    /// Opaque reference to the display asset for this recipe.
    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn satisfies(&self, restriction: DietaryRestriction) -> bool {
        self.dietary_restrictions.contains(&restriction)
    }

    pub fn contains_allergen(&self, allergen: Allergen) -> bool {
        self.allergens.contains(&allergen)
    }
}
