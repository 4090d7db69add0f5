use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::config::{ConcurrencyMode, SimulationConfig, SimulationParams};
use super::simulation_engine::SimulationEngine;
use crate::core::errors::SimError;
use crate::core::types::{RunOutcome, Tick};

/// Counts and average waits of every run in a batch.
///
/// `counts[i]` and `averages[i]` always come from the same run `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub batch_id: Uuid,
    /// Seed of run 0; run `i` used `seed_base + i`
    pub seed_base: u64,
    pub counts: Vec<usize>,
    pub averages: Vec<Option<f64>>,
}

/// Aggregate view over a batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub runs: usize,
    pub mean_served: f64,
    pub min_served: usize,
    pub max_served: usize,
    /// Mean of the per-run average waits, over runs that served at least one car
    pub mean_average_wait: Option<f64>,
    /// Runs that served nobody
    pub runs_without_service: usize,
}

impl BatchOutcome {
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Outcome of run `index`
    pub fn run(&self, index: usize) -> Option<RunOutcome> {
        Some(RunOutcome {
            served_count: *self.counts.get(index)?,
            average_wait: *self.averages.get(index)?,
        })
    }

    /// Averages with runs that served nobody mapped to NaN, for plotting
    pub fn averages_or_nan(&self) -> Vec<f64> {
        self.averages.iter().map(|a| a.unwrap_or(f64::NAN)).collect()
    }

    pub fn summary(&self) -> BatchSummary {
        let runs = self.counts.len();
        let mean_served = if runs == 0 {
            0.0
        } else {
            self.counts.iter().sum::<usize>() as f64 / runs as f64
        };

        let observed: Vec<f64> = self.averages.iter().flatten().copied().collect();
        let mean_average_wait = if observed.is_empty() {
            None
        } else {
            Some(observed.iter().sum::<f64>() / observed.len() as f64)
        };

        BatchSummary {
            runs,
            mean_served,
            min_served: self.counts.iter().copied().min().unwrap_or(0),
            max_served: self.counts.iter().copied().max().unwrap_or(0),
            mean_average_wait,
            runs_without_service: runs - observed.len(),
        }
    }
}

/// Repeats independent car wash runs with fixed parameters.
pub struct MonteCarloDriver {
    params: SimulationParams,
    config: SimulationConfig,
}

impl MonteCarloDriver {
    pub fn new(params: SimulationParams, config: SimulationConfig) -> Result<Self, SimError> {
        params.validate()?;
        config.validate()?;
        Ok(Self { params, config })
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Execute the whole batch
    pub fn run(&self) -> Result<BatchOutcome, SimError> {
        let batch_id = Uuid::new_v4();
        let seed_base = self.config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let runs = self.config.number_of_runs;

        info!(
            "[Batch {}] Starting {} runs ({:?}, seed base {})",
            batch_id, runs, self.config.concurrency_mode, seed_base
        );

        let outcomes: Vec<RunOutcome> = match self.config.concurrency_mode {
            ConcurrencyMode::Sequential => (0..runs)
                .map(|i| self.run_single(seed_base, i))
                .collect::<Result<_, _>>()?,
            ConcurrencyMode::Rayon => self.run_parallel(seed_base)?,
        };

        let (counts, averages): (Vec<usize>, Vec<Option<f64>>) = outcomes
            .into_iter()
            .map(|o| (o.served_count, o.average_wait))
            .unzip();

        let outcome = BatchOutcome {
            batch_id,
            seed_base,
            counts,
            averages,
        };
        let summary = outcome.summary();
        info!(
            "[Batch {}] Finished: mean served {:.2}, mean average wait {:?}, {} run(s) served nobody",
            batch_id, summary.mean_served, summary.mean_average_wait, summary.runs_without_service
        );
        Ok(outcome)
    }

    fn run_parallel(&self, seed_base: u64) -> Result<Vec<RunOutcome>, SimError> {
        let runs = self.config.number_of_runs;
        // Indexed parallel collect keeps run i in slot i
        let batch = || {
            (0..runs)
                .into_par_iter()
                .map(|i| self.run_single(seed_base, i))
                .collect::<Result<Vec<_>, _>>()
        };

        match self.config.thread_pool_size {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| SimError::ThreadPool(e.to_string()))?;
                debug!("Running batch on dedicated pool of {} threads", threads);
                pool.install(batch)
            }
            None => batch(),
        }
    }

    fn run_single(&self, seed_base: u64, index: usize) -> Result<RunOutcome, SimError> {
        let rng = StdRng::seed_from_u64(run_seed(seed_base, index));
        Ok(SimulationEngine::new(&self.params, rng)?.run())
    }
}

/// Seed of run `index` within a batch seeded with `seed_base`
pub fn run_seed(seed_base: u64, index: usize) -> u64 {
    seed_base.wrapping_add(index as u64)
}

/// Run `number_of_runs` independent simulations sequentially with an
/// entropy-drawn seed base
pub fn run_batch(
    number_of_runs: usize,
    arrival_probability: f64,
    simulation_ticks: Tick,
    wash_time: Tick,
) -> Result<BatchOutcome, SimError> {
    let params = SimulationParams::new(arrival_probability, simulation_ticks, wash_time);
    let config = SimulationConfig::new().with_runs(number_of_runs);
    MonteCarloDriver::new(params, config)?.run()
}
