use super::form::CriteriaForm;
use crate::catalog::Catalog;
use crate::recipe::{Recipe, RecipeId};
use crate::selector::{SelectionCriteria, Selector};
use tracing::info;

/// The result-list screen: one submitted criteria, re-rolled on demand.
///
/// The session borrows the catalog for its whole lifetime, so the recipes it
/// hands out are plain references into the catalog.
#[derive(Debug)]
pub struct RouletteSession<'c> {
    catalog: &'c Catalog,
    name: String,
    criteria: SelectionCriteria,
    selector: Selector,
    results: Vec<&'c Recipe>,
    rolls: usize,
}

impl<'c> RouletteSession<'c> {
    /// Starts a session from a submitted form. No selection is made until
    /// [`roll`](Self::roll) is called.
    pub fn new(catalog: &'c Catalog, form: &CriteriaForm, selector: Selector) -> Self {
        Self {
            catalog,
            name: form.name.trim().to_string(),
            criteria: form.submit(),
            selector,
            results: Vec::new(),
            rolls: 0,
        }
    }

    /// Draws a fresh sample with the retained criteria and replaces the
    /// current results.
    pub fn roll(&mut self) -> &[&'c Recipe] {
        self.results = self.selector.select(self.catalog.all(), &self.criteria);
        self.rolls += 1;
        info!(roll = self.rolls, results = self.results.len(), "recipes drawn");
        &self.results
    }

    pub fn results(&self) -> &[&'c Recipe] {
        &self.results
    }

    pub fn criteria(&self) -> &SelectionCriteria {
        &self.criteria
    }

    /// Number of selections made so far.
    pub fn rolls(&self) -> usize {
        self.rolls
    }

    pub fn greeting(&self) -> String {
        if self.name.is_empty() {
            "Here are Your Options!".to_string()
        } else {
            format!("Here are Your Options, {}!", self.name)
        }
    }

    /// The recipe at a 0-based position of the current result list.
    pub fn detail(&self, position: usize) -> Option<&'c Recipe> {
        self.results.get(position).copied()
    }

    /// Looks a recipe up in the whole catalog, independent of the current sample.
    pub fn detail_by_id(&self, id: RecipeId) -> Option<&'c Recipe> {
        self.catalog.get(id)
    }
}
