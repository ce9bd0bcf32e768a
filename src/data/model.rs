use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::recipe::{Allergen, Cuisine, DietaryRestriction, IntoCatalog, Recipe};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A recipe as it appears in a catalog file, before ids are assigned.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecipeRecord {
    pub name: String,
    pub cuisine: Cuisine,
    pub calories: u32,
    #[serde(default)]
    pub dietary_restrictions: Vec<DietaryRestriction>,
    #[serde(default)]
    pub allergens: Vec<Allergen>,
    #[serde(default)]
    pub image: String,
}

impl RecipeRecord {
    pub fn new(name: impl Into<String>, cuisine: Cuisine, calories: u32) -> Self {
        Self {
            name: name.into(),
            cuisine,
            calories,
            dietary_restrictions: Vec::new(),
            allergens: Vec::new(),
            image: String::new(),
        }
    }

    pub fn with_restrictions(mut self, restrictions: &[DietaryRestriction]) -> Self {
        self.dietary_restrictions = restrictions.to_vec();
        self
    }

    pub fn with_allergens(mut self, allergens: &[Allergen]) -> Self {
        self.allergens = allergens.to_vec();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

impl From<&Recipe> for RecipeRecord {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name().to_string(),
            cuisine: recipe.cuisine(),
            calories: recipe.calories(),
            dietary_restrictions: recipe.dietary_restrictions().iter().copied().collect(),
            allergens: recipe.allergens().iter().copied().collect(),
            image: recipe.image().to_string(),
        }
    }
}

/// The on-disk catalog format: `{ "recipes": [ ... ] }`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CatalogDocument {
    pub recipes: Vec<RecipeRecord>,
}

impl CatalogDocument {
    /// Parse a catalog document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog document from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<&Catalog> for CatalogDocument {
    fn from(catalog: &Catalog) -> Self {
        Self {
            recipes: catalog.all().iter().map(RecipeRecord::from).collect(),
        }
    }
}

impl IntoCatalog for CatalogDocument {
    fn into_records(self) -> Result<Vec<RecipeRecord>, CatalogError> {
        Ok(self.recipes)
    }
}
