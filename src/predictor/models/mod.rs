//! # Models
//!
//! Plain data owned by the lifecycle controller. No I/O happens here.

pub mod country_list;
pub mod feature_form;
pub mod request_outcome;

pub use country_list::CountryList;
pub use feature_form::{FeatureField, FeatureForm, Gender, ModelKind};
pub use request_outcome::RequestOutcome;
