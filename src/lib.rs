//! # Lifeline - Life Expectancy Prediction Client
//!
//! Collects demographic and economic feature values, submits them to a
//! remote prediction service and reports the returned estimate.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    Events    ┌─────────────────────┐   Updates   ┌─────────┐
//! │    View     │◄─────────────│ LifecycleController │◄────────────│ Models  │
//! │             │              │                     │             │         │
//! │ - Outcome   │              │ - Submission        │             │ - Form  │
//! │ - Countries │              │ - Request state     │             │ - State │
//! └─────────────┘              └──────────┬──────────┘             └─────────┘
//!                                         │ HTTP
//!                                         ▼
//!                              ┌─────────────────────┐
//!                              │      Services       │
//!                              │ - GET /countries    │
//!                              │ - POST /predict     │
//!                              └─────────────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod logging;
pub mod predictor;

// Re-export main types for easy access
pub use predictor::*;
