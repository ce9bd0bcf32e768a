use crate::recipe::{Allergen, Cuisine, DietaryRestriction, Recipe};
use std::fmt;

/// The filter parameters for one selection request.
///
/// Every field has a sentinel meaning "no filter on this dimension":
/// `Cuisine::All`, `0` calories, `DietaryRestriction::None` and
/// `Allergen::None`. The default value uses all four sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionCriteria {
    pub cuisine: Cuisine,
    /// Calorie ceiling, inclusive. `0` means no ceiling.
    pub max_calories: u32,
    pub dietary_restriction: DietaryRestriction,
    pub allergy_to_avoid: Allergen,
}

impl SelectionCriteria {
    pub fn new(
        cuisine: Cuisine,
        max_calories: u32,
        dietary_restriction: DietaryRestriction,
        allergy_to_avoid: Allergen,
    ) -> Self {
        Self {
            cuisine,
            max_calories,
            dietary_restriction,
            allergy_to_avoid,
        }
    }

    /// Returns `true` when the recipe passes all four clauses.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        (self.cuisine == Cuisine::All || recipe.cuisine() == self.cuisine)
            && (self.max_calories == 0 || recipe.calories() <= self.max_calories)
            && (self.dietary_restriction.is_sentinel()
                || recipe.satisfies(self.dietary_restriction))
            && (self.allergy_to_avoid.is_sentinel()
                || !recipe.contains_allergen(self.allergy_to_avoid))
    }

    /// Returns `true` if no clause filters anything.
    pub fn is_unfiltered(&self) -> bool {
        self.cuisine.is_sentinel()
            && self.max_calories == 0
            && self.dietary_restriction.is_sentinel()
            && self.allergy_to_avoid.is_sentinel()
    }
}

impl fmt::Display for SelectionCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cuisine={}", self.cuisine)?;
        if self.max_calories == 0 {
            write!(f, " calories=any")?;
        } else {
            write!(f, " calories<={}", self.max_calories)?;
        }
        write!(
            f,
            " diet={} avoid={}",
            self.dietary_restriction, self.allergy_to_avoid
        )
    }
}
