use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::components::{ArrivalGenerator, AverageTracker, Cycle, React, WaitQueue, Washer};
use crate::core::errors::SimError;
use crate::core::execution::config::SimulationParams;
use crate::core::types::{RunOutcome, Tick};

/// Drives one car wash run, tick by tick.
///
/// Each tick runs three steps in a fixed order: the arrival generator may
/// add a car to the rear of the queue, an idle washer takes the car at the
/// front, and finally the washer's countdown advances. A car that arrives
/// while the washer is idle and the queue is empty is therefore washed in
/// the same tick with a wait of zero.
pub struct SimulationEngine<R> {
    washer: Washer,
    arrivals: ArrivalGenerator<R>,
    waits: AverageTracker,
    queue: WaitQueue,
    current_cycle: Tick,
    max_cycles: Tick,
}

impl<R: Rng> SimulationEngine<R> {
    /// Build a fresh engine; `rng` feeds the arrival generator
    pub fn new(params: &SimulationParams, rng: R) -> Result<Self, SimError> {
        params.validate()?;

        Ok(Self {
            washer: Washer::new(params.wash_time)?,
            arrivals: ArrivalGenerator::new(params.arrival_probability, rng)?,
            waits: AverageTracker::new(),
            queue: WaitQueue::new(),
            current_cycle: 0,
            max_cycles: params.simulation_ticks,
        })
    }

    /// Run every remaining tick and report the outcome
    pub fn run(mut self) -> RunOutcome {
        while !self.is_complete() {
            self.process_tick();
        }

        // Cars still in line or in the washer when time runs out are not
        // counted; the run ends without draining.
        if !self.queue.is_empty() || self.washer.is_busy() {
            debug!(
                "Run ended with {} car(s) waiting and washer {}",
                self.queue.len(),
                if self.washer.is_busy() { "busy" } else { "idle" }
            );
        }

        let outcome = self.outcome();
        debug!(
            "Run complete after {} ticks: served {} with average wait {:?}",
            self.current_cycle, outcome.served_count, outcome.average_wait
        );
        outcome
    }

    /// Process one tick
    pub fn step(&mut self) -> Result<(), SimError> {
        if self.is_complete() {
            return Err(SimError::SimulationComplete {
                ticks: self.max_cycles,
            });
        }
        self.process_tick();
        Ok(())
    }

    fn process_tick(&mut self) {
        let tick = self.current_cycle;

        if let Some(timestamp) = self.arrivals.react(tick) {
            trace!("Tick {}: car arrived", tick);
            self.queue.enqueue(timestamp);
        }

        if !self.washer.is_busy() {
            if let Some(timestamp) = self.queue.dequeue() {
                let wait = tick - timestamp;
                trace!("Tick {}: washing car that waited {} ticks", tick, wait);
                self.waits.next_value(wait as f64);
                self.washer.start_washing();
            }
        }

        if self.washer.cycle().is_some() {
            trace!("Tick {}: wash finished", tick);
        }

        self.current_cycle += 1;
    }

    /// Outcome so far. `average_wait` is `None` until a car has been served.
    pub fn outcome(&self) -> RunOutcome {
        RunOutcome {
            served_count: self.waits.number_of_values(),
            average_wait: self.waits.average().ok(),
        }
    }

    /// Number of ticks processed so far
    pub fn current_cycle(&self) -> Tick {
        self.current_cycle
    }

    pub fn is_complete(&self) -> bool {
        self.current_cycle >= self.max_cycles
    }

    /// Cars waiting in line right now
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn washer(&self) -> &Washer {
        &self.washer
    }
}

/// Run one simulation with an entropy-seeded random source
pub fn simulate(
    arrival_probability: f64,
    simulation_ticks: Tick,
    wash_time: Tick,
) -> Result<RunOutcome, SimError> {
    let params = SimulationParams::new(arrival_probability, simulation_ticks, wash_time);
    simulate_with_rng(&params, StdRng::from_entropy())
}

/// Run one simulation drawing arrivals from `rng`
pub fn simulate_with_rng<R: Rng>(params: &SimulationParams, rng: R) -> Result<RunOutcome, SimError> {
    Ok(SimulationEngine::new(params, rng)?.run())
}
