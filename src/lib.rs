pub mod core;

// Re-export commonly used types
pub use crate::core::errors::SimError;
pub use crate::core::execution::{
    run_batch, simulate, simulate_with_rng, BatchOutcome, BatchSummary, ConcurrencyMode,
    MonteCarloDriver, SimulationConfig, SimulationEngine, SimulationParams,
};
pub use crate::core::types::{RunOutcome, RunReport, Tick};
