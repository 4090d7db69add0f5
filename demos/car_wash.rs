use carwash::{ConcurrencyMode, MonteCarloDriver, SimulationConfig, SimulationParams};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .init();

    let params = SimulationParams::default();

    let single = carwash::simulate(
        params.arrival_probability,
        params.simulation_ticks,
        params.wash_time,
    )?;
    log::info!("Single run: {:?}", single.report(&params));

    let config = SimulationConfig::new().with_concurrency(ConcurrencyMode::Rayon);
    let batch = MonteCarloDriver::new(params, config)?.run()?;
    log::info!("Batch summary: {:?}", batch.summary());

    Ok(())
}
