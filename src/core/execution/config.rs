//! Configuration for car wash simulation runs
//!
//! `SimulationParams` describes one run of the car wash. `SimulationConfig`
//! controls how a Monte Carlo batch of such runs is executed.

use serde::{Deserialize, Serialize};

use crate::core::errors::SimError;
use crate::core::types::Tick;

pub const DEFAULT_PROBABILITY: f64 = 0.004;
pub const DEFAULT_SIMULATION_TICKS: Tick = 6000;
pub const DEFAULT_WASH_TIME: Tick = 150;
pub const DEFAULT_NUMBER_OF_RUNS: usize = 10_000;

/// Parameters of a single car wash run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Chance that a car arrives during any given tick, in [0, 1]
    pub arrival_probability: f64,
    /// Number of ticks the run lasts
    pub simulation_ticks: Tick,
    /// Ticks needed to wash one car
    pub wash_time: Tick,
}

impl SimulationParams {
    pub fn new(arrival_probability: f64, simulation_ticks: Tick, wash_time: Tick) -> Self {
        Self {
            arrival_probability,
            simulation_ticks,
            wash_time,
        }
    }

    pub fn with_arrival_probability(mut self, probability: f64) -> Self {
        self.arrival_probability = probability;
        self
    }

    pub fn with_simulation_ticks(mut self, ticks: Tick) -> Self {
        self.simulation_ticks = ticks;
        self
    }

    pub fn with_wash_time(mut self, wash_time: Tick) -> Self {
        self.wash_time = wash_time;
        self
    }

    /// Reject parameters no run can be built from
    pub fn validate(&self) -> Result<(), SimError> {
        if !(0.0..=1.0).contains(&self.arrival_probability) {
            return Err(SimError::invalid(
                "arrival_probability",
                format!("{} is not within [0, 1]", self.arrival_probability),
            ));
        }
        if self.simulation_ticks == 0 {
            return Err(SimError::invalid("simulation_ticks", "must be at least one tick"));
        }
        if self.wash_time == 0 {
            return Err(SimError::invalid("wash_time", "must be at least one tick"));
        }
        Ok(())
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            arrival_probability: DEFAULT_PROBABILITY,
            simulation_ticks: DEFAULT_SIMULATION_TICKS,
            wash_time: DEFAULT_WASH_TIME,
        }
    }
}

/// Enumeration of supported concurrency modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConcurrencyMode {
    /// Runs execute one after another on the calling thread
    #[default]
    Sequential,
    /// Runs are spread over a Rayon thread pool
    Rayon,
}

/// Configuration for a Monte Carlo batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// How many independent runs make up the batch
    pub number_of_runs: usize,
    /// The concurrency mode to use for execution
    pub concurrency_mode: ConcurrencyMode,
    /// The size of the thread pool for parallel execution.
    /// Only relevant when concurrency_mode is Rayon; `None` uses the global pool
    pub thread_pool_size: Option<usize>,
    /// Base seed; run `i` is seeded with `seed + i`. `None` draws one from entropy
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Default configuration: 10,000 sequential runs, entropy seeded
    pub fn new() -> Self {
        Self {
            number_of_runs: DEFAULT_NUMBER_OF_RUNS,
            concurrency_mode: ConcurrencyMode::default(),
            thread_pool_size: None,
            seed: None,
        }
    }

    pub fn with_runs(mut self, runs: usize) -> Self {
        self.number_of_runs = runs;
        self
    }

    pub fn with_concurrency(mut self, mode: ConcurrencyMode) -> Self {
        self.concurrency_mode = mode;
        self
    }

    /// # Note
    /// This setting only affects execution when concurrency_mode is Rayon
    pub fn with_thread_pool_size(mut self, size: usize) -> Self {
        self.thread_pool_size = Some(size);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.number_of_runs == 0 {
            return Err(SimError::invalid("number_of_runs", "must be at least one run"));
        }
        if self.thread_pool_size == Some(0) {
            return Err(SimError::invalid("thread_pool_size", "must be at least one thread"));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}
