//! Overnight stop planner.
//!
//! Plans where to spend each night of a multi-day trip along a fixed route,
//! keeping every day's travel under a limit while making the worst hotel on
//! the trip as good as possible.

pub mod domain;
pub mod loader;
pub mod planner;
pub mod report;
pub mod web;
