mod formatter;

pub use formatter::{EMPTY_STATE, RecipeFormatter};
