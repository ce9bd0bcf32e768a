use thiserror::Error;

/// Errors that can occur while loading or building a recipe catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Could not read catalog file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Recipe '{name}' uses the wildcard cuisine 'All', which is not a real cuisine")]
    WildcardCuisine { name: String },

    #[error("Recipe at position {index} has an empty name")]
    EmptyName { index: usize },

    #[error("Invalid custom catalog data: {0}")]
    Conversion(String),
}

/// Errors that can occur when parsing a tag label such as a cuisine or allergen.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseTagError {
    #[error("Unknown cuisine '{0}'")]
    Cuisine(String),

    #[error("Unknown dietary restriction '{0}'")]
    DietaryRestriction(String),

    #[error("Unknown allergen '{0}'")]
    Allergen(String),
}
