use clap::Parser;
use dataset_convert::utils::logger;
use dataset_convert::{default_jobs, program_dir, run, CliConfig, RunMonitor};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting dataset-convert");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let base_dir = match program_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::error!("❌ Could not locate program directory: {}", e);
            eprintln!("✗ Error: could not locate program directory: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Resolving datasets in {}", base_dir.display());

    let mut monitor = RunMonitor::new(config.monitor);
    if monitor.is_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }

    let summary = run(&default_jobs(&base_dir), &mut monitor);

    std::process::exit(summary.exit_code());
}
