//! # Predictor Module
//!
//! The request-lifecycle core: form state, reference data, the prediction
//! client and the controller that ties them together.
//!
//! ```text
//! ┌─────────────────────┐   owns   ┌───────────────────────────┐
//! │ LifecycleController ├─────────▶│ FeatureForm, CountryList, │
//! │                     │          │ RequestOutcome            │
//! │                     │  calls   ├───────────────────────────┤
//! │                     ├─────────▶│ ReferenceDataLoader,      │
//! │                     │          │ PredictionClient          │
//! └──────────┬──────────┘          └───────────────────────────┘
//!            │ ModelEvent
//!            ▼
//!     presentation (views)
//! ```

pub mod controllers;
pub mod error;
pub mod events;
pub mod models;
pub mod services;
pub mod views;

pub use controllers::LifecycleController;
pub use error::{PredictionError, ReferenceDataError, SubmitRejection, ValidationError};
pub use events::{EventBus, ModelEvent, SimpleEventBus};
pub use models::{CountryList, FeatureField, FeatureForm, Gender, ModelKind, RequestOutcome};
pub use services::{ApiClient, ConnectionProfile, PredictionClient, ReferenceDataLoader};
