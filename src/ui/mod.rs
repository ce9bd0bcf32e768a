//! Presentation-side state: the preferences form and the result-list session.

mod form;
mod session;

pub use form::{CALORIE_STEP, CriteriaForm, MAX_CALORIES};
pub use session::RouletteSession;
