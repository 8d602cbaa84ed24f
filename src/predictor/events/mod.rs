//! # Events Module
//!
//! Controller events and the bus that carries them to the presentation layer.

pub mod event_bus;
pub mod model_events;

pub use event_bus::{EventBus, ModelEventHandler, SimpleEventBus};
pub use model_events::ModelEvent;
