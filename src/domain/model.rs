use serde::{Deserialize, Serialize};
use std::fmt;

/// One itemized monthly payment (mortgage, car loan, credit card...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DebtCategory {
    #[serde(default, rename = "type", alias = "label")]
    pub label: String,
    #[serde(default)]
    pub amount: f64,
}

impl DebtCategory {
    pub fn new(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }

    /// Parses the `LABEL[=AMOUNT]` form used on the command line.
    ///
    /// A missing amount leaves the category at zero so it can be seeded later.
    pub fn parse_arg(arg: &str) -> std::result::Result<Self, String> {
        match arg.split_once('=') {
            None => Ok(Self::new(arg.trim(), 0.0)),
            Some((label, raw_amount)) => {
                let amount = crate::utils::validation::parse_amount(raw_amount)
                    .filter(|amount| *amount >= 0.0)
                    .ok_or_else(|| {
                        format!(
                            "invalid amount '{}' for category '{}': expected a non-negative number",
                            raw_amount.trim(),
                            label.trim()
                        )
                    })?;
                Ok(Self::new(label.trim(), amount))
            }
        }
    }
}

/// Income and debt figures that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub monthly_income: f64,
    pub monthly_debt_total: f64,
    /// Empty unless breakdown mode was active.
    pub debt_categories: Vec<DebtCategory>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one calculation. Every field is reconstructible from the inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DtiResult {
    /// Ratio in percent, rounded to one decimal place.
    pub percentage: f64,
    pub risk_level: RiskLevel,
    pub income: f64,
    pub debts: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debt_categories: Option<Vec<DebtCategory>>,
}
