//! Objective functions scoring a simulated trajectory.
//!
//! Both objectives are minimised. They pull in opposite directions: releasing
//! more water lowers the supply deficit but drains storage below the floor.

pub mod evaluation;
pub mod scores;

pub use evaluation::{evaluate, Evaluation, EvaluationError};
pub use scores::{
    score, total_squared_deficit, total_storage_violation, ObjectiveError, ObjectiveScores,
};
