//! Request outcome model
//!
//! A single tagged value for the result panel. Success and error can never
//! be active together because they are variants of one enum.

/// State of the most recent prediction request
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestOutcome {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A request is in flight
    Pending,
    /// Last request returned a prediction, stored unrounded
    Succeeded(f64),
    /// Last request failed with this message
    Failed(String),
}

impl RequestOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestOutcome::Pending)
    }

    /// Whether a request has finished and its result is on display
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestOutcome::Succeeded(_) | RequestOutcome::Failed(_))
    }

    pub fn prediction(&self) -> Option<f64> {
        match self {
            RequestOutcome::Succeeded(value) => Some(*value),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestOutcome::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Short label for logs and status lines
    pub fn label(&self) -> &'static str {
        match self {
            RequestOutcome::Idle => "idle",
            RequestOutcome::Pending => "pending",
            RequestOutcome::Succeeded(_) => "succeeded",
            RequestOutcome::Failed(_) => "failed",
        }
    }
}
