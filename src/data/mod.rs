mod model;

pub use model::{CatalogDocument, RecipeRecord};
