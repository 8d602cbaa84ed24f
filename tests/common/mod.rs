//! Common test utilities and infrastructure
//!
//! This module provides shared functionality for integration tests including:
//! - Cucumber world implementation
//! - Mock prediction service helpers

pub mod world;

#[allow(unused_imports)]
pub use world::LifelineWorld;
