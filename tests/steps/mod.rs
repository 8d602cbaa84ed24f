//! Step definitions grouped by area

pub mod countries;
pub mod prediction;
