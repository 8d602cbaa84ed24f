//! # Event Bus
//!
//! Fans lifecycle controller events (form edits, country list loads,
//! prediction progress) out to whatever displays the form and the outcome.
//! Handlers run synchronously on the controller's task, in subscription order.

use super::model_events::ModelEvent;

/// Callback run for every published controller event
pub type ModelEventHandler = Box<dyn Fn(&ModelEvent) + Send + Sync>;

/// Receives events from a `LifecycleController` and hands them to display subscribers
pub trait EventBus: Send + Sync {
    fn publish_model_event(&mut self, event: ModelEvent);

    fn subscribe_to_model_events(&mut self, handler: ModelEventHandler);
}

/// In-process bus holding a list of display callbacks
pub struct SimpleEventBus {
    model_handlers: Vec<ModelEventHandler>,
}

impl SimpleEventBus {
    pub fn new() -> Self {
        Self {
            model_handlers: Vec::new(),
        }
    }
}

impl Default for SimpleEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus for SimpleEventBus {
    fn publish_model_event(&mut self, event: ModelEvent) {
        for handler in &self.model_handlers {
            handler(&event);
        }
    }

    fn subscribe_to_model_events(&mut self, handler: ModelEventHandler) {
        self.model_handlers.push(handler);
    }
}
