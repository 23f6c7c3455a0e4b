use crate::app::renderers::{OutputFormat, DEFAULT_GAUGE_WIDTH};
use crate::config::GAUGE_WIDTH_RANGE;
use crate::core::{DebtCategory, InputProvider};
use crate::utils::error::{DtiError, Result};
use crate::utils::validation::{validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "dti-calc")]
#[command(about = "Debt-to-income ratio calculator with risk classification")]
pub struct CliConfig {
    /// Gross monthly income, before tax
    #[arg(long, default_value = "")]
    pub income: String,

    /// Sum of all monthly loan payments (ignored with --breakdown)
    #[arg(long, default_value = "")]
    pub debts: String,

    /// Derive monthly debts from the --category entries
    #[arg(long)]
    pub breakdown: bool,

    /// Debt category; without an amount it is seeded from --debts
    #[arg(long = "category", value_name = "LABEL[=AMOUNT]", value_parser = DebtCategory::parse_arg)]
    pub categories: Vec<DebtCategory>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Width of the text gauge in cells
    #[arg(long, default_value_t = DEFAULT_GAUGE_WIDTH)]
    pub gauge_width: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub log_json: bool,
}

impl InputProvider for CliConfig {
    fn income_raw(&self) -> &str {
        &self.income
    }

    fn debts_raw(&self) -> &str {
        &self.debts
    }

    fn categories(&self) -> &[DebtCategory] {
        &self.categories
    }

    fn breakdown_enabled(&self) -> bool {
        self.breakdown
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if !self.categories.is_empty() && !self.breakdown {
            return Err(DtiError::ConfigError {
                message: "--category has no effect without --breakdown".to_string(),
            });
        }
        validate_range(
            "gauge_width",
            self.gauge_width,
            GAUGE_WIDTH_RANGE.0,
            GAUGE_WIDTH_RANGE.1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let config = CliConfig::parse_from([
            "dti-calc",
            "--income",
            "500000",
            "--breakdown",
            "--category",
            "Mortgage=100000",
            "--category",
            "Consumer=50000",
            "--format",
            "json",
        ]);

        assert_eq!(config.income_raw(), "500000");
        assert!(config.breakdown_enabled());
        assert_eq!(config.categories().len(), 2);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.gauge_width, DEFAULT_GAUGE_WIDTH);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_malformed_category() {
        let parsed = CliConfig::try_parse_from(["dti-calc", "--category", "Card=oops"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_categories_require_breakdown() {
        let config = CliConfig::parse_from(["dti-calc", "--category", "Card=10"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_gauge_width_bounds() {
        let config = CliConfig::parse_from(["dti-calc", "--gauge-width", "5"]);
        assert!(config.validate().is_err());
    }
}
