// Tests for SimulationEngine functionality
#[cfg(test)]
mod tests {
    use crate::core::errors::SimError;
    use crate::core::execution::config::SimulationParams;
    use crate::core::execution::simulation_engine::{simulate, simulate_with_rng, SimulationEngine};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_no_arrivals_serves_nobody() {
        let params = SimulationParams::new(0.0, 100, 10);
        let outcome = simulate_with_rng(&params, rng(1)).unwrap();

        assert_eq!(outcome.served_count, 0);
        assert_eq!(outcome.average_wait, None);
    }

    #[test]
    fn test_single_tick_arrival_served_immediately() {
        let params = SimulationParams::new(1.0, 1, 100);
        let outcome = simulate_with_rng(&params, rng(1)).unwrap();

        assert_eq!(outcome.served_count, 1);
        assert_eq!(outcome.average_wait, Some(0.0));
    }

    #[test]
    fn test_saturated_queue_waits() {
        // A car every tick, three ticks per wash: cars 0, 1, 2 start at
        // ticks 0, 3, 6 with waits 0, 2, 4.
        let params = SimulationParams::new(1.0, 7, 3);
        let mut engine = SimulationEngine::new(&params, rng(5)).unwrap();

        engine.step().unwrap();
        assert_eq!(engine.queue_len(), 0);
        assert!(engine.washer().is_busy());
        assert_eq!(engine.washer().time_until_done(), 2);

        engine.step().unwrap();
        engine.step().unwrap();
        assert_eq!(engine.queue_len(), 2);
        assert!(!engine.washer().is_busy());
        assert_eq!(engine.outcome().served_count, 1);

        let outcome = engine.run();
        assert_eq!(outcome.served_count, 3);
        assert_eq!(outcome.average_wait, Some(2.0));
    }

    #[test]
    fn test_unserved_cars_are_dropped_at_end() {
        let params = SimulationParams::new(1.0, 7, 3);
        let mut engine = SimulationEngine::new(&params, rng(5)).unwrap();
        while !engine.is_complete() {
            engine.step().unwrap();
        }

        // Cars 3..=6 are still waiting and car 2 is mid-wash
        assert_eq!(engine.queue_len(), 4);
        assert!(engine.washer().is_busy());
        assert_eq!(engine.outcome().served_count, 3);
    }

    #[test]
    fn test_step_past_end_fails() {
        let params = SimulationParams::new(0.5, 2, 1);
        let mut engine = SimulationEngine::new(&params, rng(9)).unwrap();

        assert!(engine.step().is_ok());
        assert!(engine.step().is_ok());
        assert_eq!(engine.current_cycle(), 2);
        assert!(engine.is_complete());
        assert_eq!(engine.step(), Err(SimError::SimulationComplete { ticks: 2 }));
    }

    #[test]
    fn test_invalid_params_rejected_at_construction() {
        for params in [
            SimulationParams::new(1.2, 100, 10),
            SimulationParams::new(0.5, 0, 10),
            SimulationParams::new(0.5, 100, 0),
        ] {
            let result = SimulationEngine::new(&params, rng(1));
            assert!(matches!(result, Err(SimError::InvalidParameter { .. })));
        }

        assert!(simulate(-0.1, 10, 10).is_err());
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let params = SimulationParams::new(0.004, 6000, 150);
        for seed in [0, 17, 123_456] {
            let a = simulate_with_rng(&params, rng(seed)).unwrap();
            let b = simulate_with_rng(&params, rng(seed)).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_served_count_bounded_by_capacity() {
        // At most one car starts every `wash_time` ticks
        let params = SimulationParams::new(0.5, 1000, 10);
        for seed in 0..20 {
            let outcome = simulate_with_rng(&params, rng(seed)).unwrap();
            assert!(outcome.served_count <= 100);
            assert!(outcome.served_count > 0);
            assert!(outcome.average_wait.unwrap() >= 0.0);
        }
    }

    #[test]
    fn test_report_carries_inputs() {
        let params = SimulationParams::new(1.0, 1, 100);
        let report = simulate_with_rng(&params, rng(1)).unwrap().report(&params);

        assert_eq!(report.simulation_ticks, 1);
        assert_eq!(report.arrival_probability, 1.0);
        assert_eq!(report.served_count, 1);
        assert_eq!(report.average_wait, Some(0.0));
    }
}
