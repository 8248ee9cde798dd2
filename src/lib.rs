//! Strategy checklist scoring service: weighted trade-entry checklists with
//! a 100-point validation target, live scoring, and letter grading.

pub mod config;
pub mod error;
pub mod strategies;
pub mod telemetry;
