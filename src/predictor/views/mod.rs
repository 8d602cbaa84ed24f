//! # Views
//!
//! Presentation helpers for the command-line front end.

pub mod outcome_view;

pub use outcome_view::{format_prediction, render_outcome, submit_label, TextRenderer, ViewRenderer};
