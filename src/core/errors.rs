use thiserror::Error;

use super::types::Tick;

/// Errors raised by the car wash simulation.
///
/// Parameter problems are reported when a component or engine is built,
/// never from inside the tick loop.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("No observations recorded; average is undefined")]
    NoObservations,

    #[error("Simulation already finished after {ticks} ticks")]
    SimulationComplete { ticks: Tick },

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}

impl SimError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        SimError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
