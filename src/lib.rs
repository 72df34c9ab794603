//! Single-reservoir water-supply evaluator.
//!
//! [`simulation::simulate`] runs the mass balance for a release schedule and
//! [`objectives::score`] reduces the trajectory to the two competing
//! objectives. [`policy`] generates candidate schedules and [`api`] exposes
//! all of it over HTTP.

pub mod api;
pub mod config;
pub mod domain;
pub mod objectives;
pub mod policy;
pub mod simulation;
pub mod telemetry;
