//! Common test utilities for building criteria, catalogs and random sources.
use rand::SeedableRng;
use rand::rngs::StdRng;
use recipe_roulette::prelude::*;

/// A deterministic random source.
#[allow(dead_code)]
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Shorthand for building criteria in tests.
#[allow(dead_code)]
pub fn criteria(
    cuisine: Cuisine,
    max_calories: u32,
    dietary_restriction: DietaryRestriction,
    allergy_to_avoid: Allergen,
) -> SelectionCriteria {
    SelectionCriteria::new(cuisine, max_calories, dietary_restriction, allergy_to_avoid)
}

/// Every recipe in the catalog that passes the criteria, in catalog order.
#[allow(dead_code)]
pub fn filtered<'a>(catalog: &'a Catalog, criteria: &SelectionCriteria) -> Vec<&'a Recipe> {
    catalog
        .all()
        .iter()
        .filter(|r| criteria.matches(r))
        .collect()
}

/// Sorted recipe names, for order-insensitive comparisons.
#[allow(dead_code)]
pub fn sorted_names(recipes: &[&Recipe]) -> Vec<String> {
    let mut names: Vec<String> = recipes.iter().map(|r| r.name().to_string()).collect();
    names.sort();
    names
}

/// A tiny catalog covering every filter dimension.
///
/// - `Tofu Bowl`: Japanese, 400 kcal, vegan, contains soy
/// - `Pesto Pasta`: Italian, 650 kcal, vegetarian, contains tree nuts and dairy
/// - `Rice Noodles`: Thai, 300 kcal, gluten free and vegan
/// - `Shrimp Tacos`: Mexican, 500 kcal, contains shellfish
#[allow(dead_code)]
pub fn small_catalog() -> Catalog {
    Catalog::from_records(vec![
        RecipeRecord::new("Tofu Bowl", Cuisine::Japanese, 400)
            .with_restrictions(&[DietaryRestriction::Vegan])
            .with_allergens(&[Allergen::Soy])
            .with_image("tofu_bowl"),
        RecipeRecord::new("Pesto Pasta", Cuisine::Italian, 650)
            .with_restrictions(&[DietaryRestriction::Vegetarian])
            .with_allergens(&[Allergen::TreeNuts, Allergen::Dairy])
            .with_image("pesto_pasta"),
        RecipeRecord::new("Rice Noodles", Cuisine::Thai, 300)
            .with_restrictions(&[DietaryRestriction::GlutenFree, DietaryRestriction::Vegan])
            .with_image("rice_noodles"),
        RecipeRecord::new("Shrimp Tacos", Cuisine::Mexican, 500)
            .with_allergens(&[Allergen::Shellfish])
            .with_image("shrimp_tacos"),
    ])
    .expect("small catalog is valid")
}

#[allow(dead_code)]
pub const SMALL_CATALOG_JSON: &str = r#"{
    "recipes": [
        {
            "name": "Pho",
            "cuisine": "Thai",
            "calories": 500,
            "image": "pho"
        },
        {
            "name": "Almond Cake",
            "cuisine": "French",
            "calories": 450,
            "dietary_restrictions": ["Vegetarian", "Gluten Free"],
            "allergens": ["Tree Nuts", "Eggs"],
            "image": "almond_cake"
        },
        {
            "name": "Dal",
            "cuisine": "indian",
            "calories": 350,
            "dietary_restrictions": ["None", "Vegan"],
            "allergens": ["None"]
        }
    ]
}"#;
