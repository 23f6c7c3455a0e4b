use crate::app::renderers::{OutputFormat, DEFAULT_GAUGE_WIDTH};
use crate::config::GAUGE_WIDTH_RANGE;
use crate::core::{DebtCategory, InputProvider};
use crate::utils::error::{DtiError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Calculation profile loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub profile: Option<ProfileConfig>,
    pub calculation: CalculationConfig,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationConfig {
    /// Kept as text so it goes through the same validation as typed input.
    #[serde(default, deserialize_with = "raw_amount")]
    pub monthly_income: String,
    #[serde(default, deserialize_with = "raw_amount")]
    pub monthly_debts: String,
    #[serde(default)]
    pub breakdown: bool,
    #[serde(default)]
    pub categories: Vec<DebtCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub gauge_width: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Text(String),
    Integer(i64),
    Float(f64),
}

// Accepts `monthly_income = 500000` as well as `monthly_income = "500000"`.
fn raw_amount<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawAmount::deserialize(deserializer)? {
        RawAmount::Text(text) => text,
        RawAmount::Integer(value) => value.to_string(),
        RawAmount::Float(value) => value.to_string(),
    })
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DtiError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DtiError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DtiError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                tracing::warn!("Environment variable {} is not set", var_name);
                format!("${{{}}}", var_name)
            })
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if !self.calculation.categories.is_empty() && !self.calculation.breakdown {
            return Err(DtiError::ConfigError {
                message: "calculation.categories has no effect without calculation.breakdown = true"
                    .to_string(),
            });
        }

        if let Some(profile) = &self.profile {
            validate_non_empty_string("profile.name", &profile.name)?;
        }

        if let Some(width) = self.output.as_ref().and_then(|o| o.gauge_width) {
            validate_range(
                "output.gauge_width",
                width,
                GAUGE_WIDTH_RANGE.0,
                GAUGE_WIDTH_RANGE.1,
            )?;
        }

        if let Some(level) = self.logging.as_ref().and_then(|l| l.level.as_deref()) {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }

    pub fn profile_name(&self) -> &str {
        self.profile
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or("default")
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.format)
            .unwrap_or_default()
    }

    pub fn gauge_width(&self) -> usize {
        self.output
            .as_ref()
            .and_then(|o| o.gauge_width)
            .unwrap_or(DEFAULT_GAUGE_WIDTH)
    }

    /// `tracing` filter directive for the configured level.
    pub fn log_directive(&self) -> String {
        let level = self
            .logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or("info");
        format!("dti_calc={}", level)
    }
}

impl InputProvider for TomlConfig {
    fn income_raw(&self) -> &str {
        &self.calculation.monthly_income
    }

    fn debts_raw(&self) -> &str {
        &self.calculation.monthly_debts
    }

    fn categories(&self) -> &[DebtCategory] {
        &self.calculation.categories
    }

    fn breakdown_enabled(&self) -> bool {
        self.calculation.breakdown
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
