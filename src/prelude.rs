//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! recipe_roulette crate. Import this module to get access to the core
//! functionality without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use recipe_roulette::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let catalog = Catalog::from_file("path/to/catalog.json")?;
//!
//! let mut form = CriteriaForm::new();
//! form.cuisine = Cuisine::Japanese;
//! form.set_calories(400);
//!
//! let mut selector = Selector::builder().seed(42).build();
//! for recipe in selector.select(catalog.all(), &form.submit()) {
//!     println!("{}", RecipeFormatter::summary(recipe));
//! }
//! # Ok(())
//! # }
//! ```

// Catalog and records
pub use crate::catalog::Catalog;
pub use crate::data::{CatalogDocument, RecipeRecord};

// Recipe model
pub use crate::recipe::{Allergen, Cuisine, DietaryRestriction, IntoCatalog, Recipe, RecipeId};

// Selection
pub use crate::selector::{DEFAULT_SAMPLE_SIZE, SelectionCriteria, Selector, select};

// Presentation state and formatting
pub use crate::ui::{CriteriaForm, RouletteSession};
pub use crate::view::RecipeFormatter;

// Error types
pub use crate::error::{CatalogError, ParseTagError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
