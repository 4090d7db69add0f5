use serde::{Deserialize, Serialize};

use super::execution::config::SimulationParams;

/// One simulated second.
pub type Tick = u64;

/// Result of a single simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Number of cars that started washing during the run
    pub served_count: usize,
    /// Mean wait in ticks, `None` when no car was served
    pub average_wait: Option<f64>,
}

impl RunOutcome {
    /// Bundle this outcome with the parameters that produced it.
    pub fn report(&self, params: &SimulationParams) -> RunReport {
        RunReport {
            simulation_ticks: params.simulation_ticks,
            arrival_probability: params.arrival_probability,
            served_count: self.served_count,
            average_wait: self.average_wait,
        }
    }
}

impl From<RunOutcome> for (usize, Option<f64>) {
    fn from(outcome: RunOutcome) -> Self {
        (outcome.served_count, outcome.average_wait)
    }
}

/// The values a reporting layer needs to describe one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub simulation_ticks: Tick,
    pub arrival_probability: f64,
    pub served_count: usize,
    pub average_wait: Option<f64>,
}
