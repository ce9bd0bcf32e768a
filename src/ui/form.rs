use crate::recipe::{Allergen, Cuisine, DietaryRestriction};
use crate::selector::SelectionCriteria;
use tracing::warn;

/// Upper bound of the calorie stepper.
pub const MAX_CALORIES: u32 = 5000;
/// Increment of the calorie stepper.
pub const CALORIE_STEP: u32 = 100;

/// Mutable state of the preferences form.
///
/// The form is the only place where criteria are edited. Calling
/// [`submit`](CriteriaForm::submit) takes an immutable snapshot that is handed
/// to the selector, so nothing mutable crosses that boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaForm {
    pub name: String,
    pub cuisine: Cuisine,
    calories: u32,
    pub dietary_restriction: DietaryRestriction,
    pub allergy: Allergen,
}

impl CriteriaForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current calorie ceiling. `0` means no ceiling.
    pub fn calories(&self) -> u32 {
        self.calories
    }

    /// Sets the calorie ceiling, clamped to `[0, MAX_CALORIES]` and rounded
    /// down to a multiple of `CALORIE_STEP`. The ceiling never ends up above
    /// the requested value.
    pub fn set_calories(&mut self, calories: u32) {
        let clamped = calories.min(MAX_CALORIES);
        let snapped = clamped / CALORIE_STEP * CALORIE_STEP;
        if snapped != calories {
            warn!(requested = calories, applied = snapped, "calorie value adjusted to stepper range");
        }
        self.calories = snapped;
    }

    pub fn increment_calories(&mut self) {
        self.calories = (self.calories + CALORIE_STEP).min(MAX_CALORIES);
    }

    pub fn decrement_calories(&mut self) {
        self.calories = self.calories.saturating_sub(CALORIE_STEP);
    }

    /// Snapshots the form into the criteria consumed by the selector.
    pub fn submit(&self) -> SelectionCriteria {
        SelectionCriteria::new(
            self.cuisine,
            self.calories,
            self.dietary_restriction,
            self.allergy,
        )
    }
}
