//! # Controllers
//!
//! Orchestration of models and services.

pub mod lifecycle_controller;

pub use lifecycle_controller::LifecycleController;
