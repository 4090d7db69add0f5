pub mod config;
pub mod monte_carlo;
pub mod simulation_engine;

// Re-export commonly used types
pub use config::{ConcurrencyMode, SimulationConfig, SimulationParams};
pub use monte_carlo::{run_batch, BatchOutcome, BatchSummary, MonteCarloDriver};
pub use simulation_engine::{simulate, simulate_with_rng, SimulationEngine};
