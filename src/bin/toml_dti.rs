use anyhow::Context;
use clap::Parser;
use dti_calc::core::report::FINANCIAL_TIPS;
use dti_calc::core::InputProvider;
use dti_calc::utils::format::format_currency;
use dti_calc::utils::{logger, validation::parse_amount, validation::Validate};
use dti_calc::{AnyRenderer, CalculatorSession, DtiEngine, OutputFormat, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-dti")]
#[command(about = "Run a DTI calculation described by a TOML profile")]
struct Args {
    /// Path to TOML profile
    #[arg(short, long, default_value = "dti-profile.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the output format from the profile
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Show what would be calculated without calculating
    #[arg(long)]
    dry_run: bool,

    /// Print the financial tips for every risk band and exit
    #[arg(long)]
    tips: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.tips {
        for tip in FINANCIAL_TIPS.iter() {
            println!("{}", tip.heading);
            println!("  {}", tip.advice);
        }
        return Ok(());
    }

    let config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load profile '{}'", args.config))?;

    if args.verbose {
        logger::init_cli_logger(true);
    } else {
        logger::init_with_directive(&config.log_directive());
    }

    tracing::info!("📁 Loaded profile '{}' from {}", config.profile_name(), args.config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Profile validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let format = args.format.unwrap_or_else(|| config.output_format());

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be calculated");
        display_profile_summary(&config, format);
        return Ok(());
    }

    let session = CalculatorSession::from_provider(&config);
    let engine = DtiEngine::new(AnyRenderer::for_format(format, config.gauge_width()));

    match engine.run(session) {
        Ok((_, report)) => {
            print!("{}", report);
            if !report.ends_with('\n') {
                println!();
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
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

fn display_profile_summary(config: &TomlConfig, format: OutputFormat) {
    println!("📋 Profile Summary:");
    println!("  Profile: {}", config.profile_name());
    if let Some(description) = config.profile.as_ref().and_then(|p| p.description.as_deref()) {
        println!("  Description: {}", description);
    }

    println!("  Monthly income: {}", describe_raw(config.income_raw()));

    if config.breakdown_enabled() {
        let session = CalculatorSession::from_provider(config);
        println!("  Breakdown mode: on ({} categories)", session.categories().len());
        for category in session.categories().entries() {
            let label = if category.label.trim().is_empty() {
                "<unnamed>"
            } else {
                category.label.as_str()
            };
            println!("    {} -> {}", label, format_currency(category.amount));
        }
        if let Some(total) = session.monthly_debt_total() {
            println!("  Monthly debts (derived): {}", format_currency(total));
        }
    } else {
        println!("  Monthly debts: {}", describe_raw(config.debts_raw()));
    }

    println!("  Output format: {:?}", format);
    println!("  Gauge width: {}", config.gauge_width());
    println!();
}

fn describe_raw(raw: &str) -> String {
    match parse_amount(raw) {
        Some(value) => format_currency(value),
        None if raw.trim().is_empty() => "<missing>".to_string(),
        None => format!("'{}' (not a number)", raw),
    }
}
