use crate::core::errors::SimError;

/// Running mean over a stream of values.
///
/// Keeps the exact sum and the number of values seen, and divides only when
/// asked for the average.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AverageTracker {
    sum: f64,
    count: usize,
}

impl AverageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` to the running total
    pub fn next_value(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// Mean of every value received so far.
    ///
    /// Fails with [`SimError::NoObservations`] before the first value.
    pub fn average(&self) -> Result<f64, SimError> {
        if self.count == 0 {
            return Err(SimError::NoObservations);
        }
        Ok(self.sum / self.count as f64)
    }

    pub fn number_of_values(&self) -> usize {
        self.count
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_new_tracker_is_empty() {
        let tracker = AverageTracker::new();
        assert_eq!(tracker.number_of_values(), 0);
        assert_eq!(tracker.sum(), 0.0);
        assert_eq!(tracker.average(), Err(SimError::NoObservations));
    }

    #[test]
    fn test_small_sequence() {
        let mut tracker = AverageTracker::new();
        for v in [234.0, 234.0, 908.0, 279.0] {
            tracker.next_value(v);
        }
        assert_eq!(tracker.number_of_values(), 4);
        assert_eq!(tracker.average().unwrap(), 413.75);
    }

    #[test]
    fn test_matches_independent_mean() {
        let mut rng = StdRng::seed_from_u64(2024);
        let values: Vec<f64> = (0..1000).map(|_| rng.gen::<f64>()).collect();

        let mut tracker = AverageTracker::new();
        let mut expected_sum = 0.0;
        for &v in &values {
            tracker.next_value(v);
            expected_sum += v;
        }

        assert_eq!(tracker.number_of_values(), values.len());
        assert_eq!(tracker.sum(), expected_sum);
        assert_eq!(tracker.average().unwrap(), expected_sum / values.len() as f64);
    }
}
