use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let record_path = std::env::args().nth(1);
    let mut controller = lyapunov_explorer::CliController::from_record_path(record_path)?;

    controller.generate()?;
    controller.log_summary();

    Ok(())
}
