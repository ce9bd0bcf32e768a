use crate::recipe::Recipe;
use itertools::Itertools;
use std::fmt::Display;

/// Shown in place of a result list when nothing matched.
pub const EMPTY_STATE: &str = "No recipes match your preferences.";

/// Formats recipes and result lists into human-readable text.
pub struct RecipeFormatter;

impl RecipeFormatter {
    /// One line per recipe, e.g. `Miso Soup (Japanese, 150 kcal)`.
    pub fn summary(recipe: &Recipe) -> String {
        format!(
            "{} ({}, {} kcal)",
            recipe.name(),
            recipe.cuisine(),
            recipe.calories()
        )
    }

    /// The numbered result list under a heading, or the empty-state message.
    pub fn result_list(heading: &str, recipes: &[&Recipe]) -> String {
        let mut out = format!("{}\n", heading);
        if recipes.is_empty() {
            out.push_str(&format!("  {}\n", EMPTY_STATE));
            return out;
        }
        for (position, recipe) in recipes.iter().enumerate() {
            out.push_str(&format!(
                "  {}. {} [{}]\n",
                position + 1,
                Self::summary(recipe),
                recipe.id()
            ));
        }
        out
    }

    /// The detail view of a single recipe.
    pub fn detail(recipe: &Recipe) -> String {
        format!(
            "{}\n  Id:          {}\n  Cuisine:     {}\n  Calories:    {} kcal\n  Dietary:     {}\n  Allergens:   {}\n  Image:       {}\n",
            recipe.name(),
            recipe.id(),
            recipe.cuisine(),
            recipe.calories(),
            Self::format_tags(recipe.dietary_restrictions()),
            Self::format_tags(recipe.allergens()),
            recipe.image()
        )
    }

    /// Joins tag labels with commas; an empty set reads "None".
    fn format_tags<'a, T, I>(tags: I) -> String
    where
        T: Display + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let joined = tags.into_iter().join(", ");
        if joined.is_empty() {
            "None".to_string()
        } else {
            joined
        }
    }
}
