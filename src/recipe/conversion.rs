use crate::data::RecipeRecord;
use crate::error::CatalogError;

/// A trait for custom data models that can be converted into catalog records.
///
/// This is the extension point for feeding recipes from your own format into a
/// [`Catalog`](crate::catalog::Catalog). Implement it on your own structs and
/// pass the result to [`Catalog::from_source`](crate::catalog::Catalog::from_source).
///
/// # Example
///
/// ```rust
/// use recipe_roulette::prelude::*;
///
/// struct MenuLine {
///     dish: String,
///     kcal: u32,
/// }
///
/// struct ThaiMenu(Vec<MenuLine>);
///
/// impl IntoCatalog for ThaiMenu {
///     fn into_records(self) -> std::result::Result<Vec<RecipeRecord>, CatalogError> {
///         Ok(self
///             .0
///             .into_iter()
///             .map(|line| RecipeRecord::new(line.dish, Cuisine::Thai, line.kcal))
///             .collect())
///     }
/// }
///
/// let menu = ThaiMenu(vec![MenuLine { dish: "Green Curry".to_string(), kcal: 550 }]);
/// let catalog = Catalog::from_source(menu).unwrap();
/// assert_eq!(catalog.len(), 1);
/// ```
pub trait IntoCatalog {
    /// Consumes the object and converts it into plain recipe records.
    fn into_records(self) -> Result<Vec<RecipeRecord>, CatalogError>;
}

impl IntoCatalog for Vec<RecipeRecord> {
    fn into_records(self) -> Result<Vec<RecipeRecord>, CatalogError> {
        Ok(self)
    }
}
