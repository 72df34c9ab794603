//! # Reservoir Simulation Module
//!
//! Mass-balance simulation of a single supply reservoir driven by an external
//! release schedule.
//!
//! ## Step order
//!
//! Each step applies, in order:
//!
//! 1. **Evaporation**: the scenario value, capped at the water present
//!    (`storage + inflow`).
//! 2. **Environmental flow**: `min_env_flow`, reduced only when the remaining
//!    water cannot cover it.
//! 3. **Supply**: the requested release, capped at what is left after the
//!    environmental flow.
//! 4. **Spill**: whatever would push storage above capacity.
//!
//! The environmental flow therefore has priority over supply under scarcity:
//! supply is cut to zero before the compensation flow is touched.
//!
//! ## Usage
//!
//! ```rust
//! use reservoir_ops::domain::{OperatingParams, ReleaseSchedule, Scenario};
//! use reservoir_ops::simulation::simulate;
//!
//! let scenario = Scenario::new(vec![15.0, 17.0], vec![1.0, 1.0], vec![13.0, 13.0]);
//! let params = OperatingParams::new(150.0, 80.0, 2.0, 30.0);
//! let schedule = ReleaseSchedule::new(scenario.demand.clone());
//!
//! let trajectory = simulate(&scenario, &params, &schedule).unwrap();
//! assert_eq!(trajectory.storage, vec![80.0, 79.0, 80.0]);
//! ```

pub mod error;
pub mod reservoir;

pub use error::SimulationError;
pub use reservoir::{simulate, step, StepOutcome};
