//! # Outcome View
//!
//! Text rendering of the controller state for the command-line front end.
//! Rounding happens here, never in the controller.

use crate::predictor::controllers::LifecycleController;
use crate::predictor::models::RequestOutcome;
use anyhow::Result;
use std::io::Write;

/// Round half away from zero to two decimals
pub fn format_prediction(value: f64) -> String {
    format!("{:.2}", (value * 100.0).round() / 100.0)
}

/// Label of the submit trigger, which is disabled while pending
pub fn submit_label(outcome: &RequestOutcome) -> &'static str {
    if outcome.is_pending() {
        "Predicting..."
    } else {
        "Predict"
    }
}

/// Text for the result panel; `None` when nothing should be shown
pub fn render_outcome(outcome: &RequestOutcome) -> Option<String> {
    match outcome {
        RequestOutcome::Idle | RequestOutcome::Pending => None,
        RequestOutcome::Succeeded(value) => Some(format!(
            "Predicted life expectancy: {} years",
            format_prediction(*value)
        )),
        RequestOutcome::Failed(message) => Some(format!("Error: {message}")),
    }
}

/// Trait for rendering controller state
pub trait ViewRenderer {
    /// Render the result panel
    fn render_outcome(&mut self, controller: &LifecycleController) -> Result<()>;

    /// Render the selectable countries, one per line
    fn render_countries(&mut self, controller: &LifecycleController) -> Result<()>;
}

/// Renders to any writer, usually stdout
pub struct TextRenderer<W: Write> {
    writer: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ViewRenderer for TextRenderer<W> {
    fn render_outcome(&mut self, controller: &LifecycleController) -> Result<()> {
        if let Some(text) = render_outcome(controller.outcome()) {
            writeln!(self.writer, "{text}")?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn render_countries(&mut self, controller: &LifecycleController) -> Result<()> {
        for country in controller.countries().iter() {
            writeln!(self.writer, "{country}")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
