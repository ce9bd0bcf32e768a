use crate::data::{CatalogDocument, RecipeRecord};
use crate::error::CatalogError;
use crate::recipe::{Cuisine, IntoCatalog, Recipe, RecipeId};
use ahash::AHashMap;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};

mod builtin;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog::assemble(builtin::records()));

/// An immutable, ordered collection of recipes.
///
/// A catalog is built once and never mutated afterwards. Each recipe receives a
/// [`RecipeId`] equal to its 1-based position, so ids are unique and stable for
/// the lifetime of the catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// The sample catalog embedded in the crate.
    ///
    /// Initialized on first access and shared for the rest of the process.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Builds a catalog from plain records, validating each one.
    ///
    /// Records must have a non-empty name and a concrete cuisine; the `All`
    /// wildcard is rejected. Duplicate names are allowed.
    pub fn from_records(records: Vec<RecipeRecord>) -> Result<Self, CatalogError> {
        for (index, record) in records.iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            if record.cuisine == Cuisine::All {
                return Err(CatalogError::WildcardCuisine {
                    name: record.name.clone(),
                });
            }
        }
        let catalog = Self::assemble(records);
        info!(recipes = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Builds a catalog from any custom format implementing [`IntoCatalog`].
    pub fn from_source(source: impl IntoCatalog) -> Result<Self, CatalogError> {
        Self::from_records(source.into_records()?)
    }

    /// Parses a catalog from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::from_source(CatalogDocument::from_json(json)?)
    }

    /// Loads a catalog from a JSON file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading catalog file");
        Self::from_source(CatalogDocument::from_file(path)?)
    }

    /// Assigns ids in order. Callers are responsible for validation.
    fn assemble(records: Vec<RecipeRecord>) -> Self {
        let recipes = records
            .into_iter()
            .zip(1u32..)
            .map(|(record, id)| {
                Recipe::new(
                    RecipeId(id),
                    record.name,
                    record.cuisine,
                    record.calories,
                    record.dietary_restrictions,
                    record.allergens,
                    record.image,
                )
            })
            .collect();
        Self { recipes }
    }

    /// The full recipe list in catalog order.
    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        let index = usize::try_from(id.0).ok()?.checked_sub(1)?;
        self.recipes.get(index)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Number of recipes per cuisine. Cuisines without recipes are absent.
    pub fn cuisine_counts(&self) -> AHashMap<Cuisine, usize> {
        let mut counts = AHashMap::new();
        for recipe in &self.recipes {
            *counts.entry(recipe.cuisine()).or_insert(0) += 1;
        }
        counts
    }
}
