//! # Model Events
//!
//! Events emitted by the lifecycle controller when its state changes.
//! The presentation layer reacts to these instead of polling every field.

use crate::predictor::models::FeatureField;

/// Events emitted when controller-owned models change
#[derive(Debug, Clone, PartialEq)]
pub enum ModelEvent {
    /// One form field was replaced
    FieldUpdated { field: FeatureField, value: String },

    /// All form fields went back to their defaults
    FormReset,

    /// The country list was replaced by a fresh load
    CountriesLoaded { count: usize },

    /// Loading the country list failed; the list was left as it was
    CountriesLoadFailed { message: String },

    /// A prediction request was sent and the outcome is now pending
    PredictionStarted,

    /// The pending request returned a value
    PredictionSucceeded { value: f64 },

    /// The pending request failed
    PredictionFailed { message: String },
}

impl ModelEvent {
    /// Whether the event changed the result panel
    pub fn affects_outcome(&self) -> bool {
        matches!(
            self,
            ModelEvent::PredictionStarted
                | ModelEvent::PredictionSucceeded { .. }
                | ModelEvent::PredictionFailed { .. }
        )
    }
}
