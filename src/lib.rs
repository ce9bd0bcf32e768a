//! # Recipe Roulette - Preference-Driven Recipe Selection
//!
//! **Recipe Roulette** picks a handful of recipes from a fixed catalog that match
//! a user's preferences: cuisine, calorie ceiling, dietary restriction and an
//! allergen to avoid. Matching recipes are sampled at random, so asking again
//! ("re-rolling") usually yields a different set.
//!
//! ## Core Workflow
//!
//! 1.  **Load a Catalog**: Use the embedded sample with `Catalog::builtin()`, or load
//!     your own with `Catalog::from_file` / `Catalog::from_source`.
//! 2.  **Collect Preferences**: Fill a `CriteriaForm` and `submit()` it to obtain an
//!     immutable `SelectionCriteria`.
//! 3.  **Select**: Call `select` with a random source, or build a reusable `Selector`
//!     with `Selector::builder()`.
//! 4.  **Present**: Keep a `RouletteSession` for re-rolls and detail lookups, and render
//!     text with `RecipeFormatter`.
//!
//! Every criteria field has a sentinel (`Cuisine::All`, `0` calories,
//! `DietaryRestriction::None`, `Allergen::None`) that disables filtering on that
//! dimension. An empty result is a normal outcome, not an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use recipe_roulette::prelude::*;
//!
//! let catalog = Catalog::builtin();
//!
//! let mut form = CriteriaForm::new();
//! form.name = "Sam".to_string();
//! form.cuisine = Cuisine::Chinese;
//! form.allergy = Allergen::Peanuts;
//!
//! let selector = Selector::builder().limit(5).seed(2024).build();
//! let mut session = RouletteSession::new(catalog, &form, selector);
//!
//! let picks = session.roll();
//! assert_eq!(picks.len(), 5);
//! assert!(picks.iter().all(|r| !r.name().starts_with("Kung Pao")));
//!
//! println!("{}", RecipeFormatter::result_list(&session.greeting(), session.results()));
//! if let Some(first) = session.detail(0) {
//!     println!("{}", RecipeFormatter::detail(first));
//! }
//! ```

pub mod catalog;
pub mod data;
pub mod error;
pub mod prelude;
pub mod recipe;
pub mod selector;
pub mod ui;
pub mod view;
