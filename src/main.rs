use clap::Parser;
use dti_calc::utils::{logger, validation::Validate};
use dti_calc::{AnyRenderer, CalculatorSession, CliConfig, DtiEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting dti-calc");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let session = CalculatorSession::from_provider(&config);
    let engine = DtiEngine::new(AnyRenderer::for_format(config.format, config.gauge_width));

    match engine.run(session) {
        Ok((_, report)) => {
            print!("{}", report);
            if !report.ends_with('\n') {
                println!();
            }
        }
        Err(e) => {
            tracing::error!(
                "Calculation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
