use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::traits::React;
use crate::core::errors::SimError;
use crate::core::types::Tick;

/// Arrival probability used when none is given.
pub const DEFAULT_ARRIVAL_PROBABILITY: f64 = 0.5;

/// Decides, once per tick, whether a new car joins the rear of the queue.
///
/// Every query takes one uniform draw `u` from `[0, 1)` and reports an
/// arrival when `u < probability`. The comparison is strict, so a
/// probability of `0.0` never produces an arrival and `1.0` always does.
#[derive(Debug, Clone)]
pub struct ArrivalGenerator<R> {
    probability: f64,
    unit: Uniform<f64>,
    rng: R,
}

impl<R: Rng> ArrivalGenerator<R> {
    pub fn new(probability: f64, rng: R) -> Result<Self, SimError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(SimError::invalid(
                "arrival_probability",
                format!("{} is not within [0, 1]", probability),
            ));
        }
        Ok(Self {
            probability,
            unit: Uniform::new(0.0, 1.0),
            rng,
        })
    }

    pub fn with_default_probability(rng: R) -> Self {
        Self {
            probability: DEFAULT_ARRIVAL_PROBABILITY,
            unit: Uniform::new(0.0, 1.0),
            rng,
        }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Returns `true` with probability `probability`
    pub fn query(&mut self) -> bool {
        self.unit.sample(&mut self.rng) < self.probability
    }
}

impl<R: Rng> React<Tick> for ArrivalGenerator<R> {
    type Output = Tick;

    /// Timestamp of the car arriving at `tick`, if any
    fn react(&mut self, tick: Tick) -> Option<Self::Output> {
        self.query().then_some(tick)
    }
}
