use crate::core::{DtiResult, RiskLevel, ValidatedInput};

/// Upper bound (inclusive) of the low-risk band, in percent.
pub const LOW_RISK_MAX: f64 = 20.0;
/// Upper bound (inclusive) of the moderate-risk band, in percent.
pub const MODERATE_RISK_MAX: f64 = 35.0;

/// Debt-to-income ratio in percent, unrounded.
///
/// Non-positive income yields `0` instead of dividing, so the function is total.
pub fn calculate_dti(income: f64, debts: f64) -> f64 {
    if income <= 0.0 {
        return 0.0;
    }
    (debts / income) * 100.0
}

/// `round(x * 10) / 10` with halves rounded away from zero.
pub fn round_percentage(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn classify_risk(percentage: f64) -> RiskLevel {
    if percentage <= LOW_RISK_MAX {
        RiskLevel::Low
    } else if percentage <= MODERATE_RISK_MAX {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    }
}

/// Builds the result record. The risk tier is taken from the rounded ratio.
pub fn calculate(input: &ValidatedInput) -> DtiResult {
    let percentage = round_percentage(calculate_dti(input.monthly_income, input.monthly_debt_total));
    let risk_level = classify_risk(percentage);

    tracing::debug!(
        percentage,
        risk = %risk_level,
        categories = input.debt_categories.len(),
        "DTI calculated"
    );

    DtiResult {
        percentage,
        risk_level,
        income: input.monthly_income,
        debts: input.monthly_debt_total,
        debt_categories: if input.debt_categories.is_empty() {
            None
        } else {
            Some(input.debt_categories.clone())
        },
    }
}
