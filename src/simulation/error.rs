use thiserror::Error;

/// Rejections raised before a simulation runs. No partial trajectory is ever
/// produced alongside one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("length mismatch: {series} has {actual} steps, expected {expected}")]
    LengthMismatch {
        series: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{field}[{index}] must be non-negative, got {value}")]
    NegativeValue {
        field: &'static str,
        index: usize,
        value: f64,
    },

    #[error("{field}[{index}] is not a finite number")]
    NonFinite { field: &'static str, index: usize },

    #[error("parameter {name} must be a non-negative finite number, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("parameter {name} must lie in [{min}, {max}], got {value}")]
    ParameterOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("initial storage {initial} exceeds capacity {capacity}")]
    InitialStorageAboveCapacity { initial: f64, capacity: f64 },

    #[error("inflow[{index}] = {inflow} plus capacity {capacity} overflows f64")]
    VolumeOverflow {
        index: usize,
        inflow: f64,
        capacity: f64,
    },
}
