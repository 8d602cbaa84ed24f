//! # Services Layer
//!
//! Network collaborators used by the lifecycle controller. Each service
//! owns a clone of the shared `ApiClient` so it can be moved into a
//! spawned task.

pub mod countries;
pub mod http;
pub mod prediction;

pub use countries::ReferenceDataLoader;
pub use http::{ApiClient, ConnectionProfile};
pub use prediction::PredictionClient;
