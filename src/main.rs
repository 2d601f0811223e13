use clap::Parser;
use ride_report::utils::{logger, validation::Validate};
use ride_report::{CliConfig, CsvPipeline, LocalStorage, ReportEngine};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting ride-report CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(".".to_string());
    let pipeline = CsvPipeline::new(storage, config);
    let engine = ReportEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            println!("Report saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Report run failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
