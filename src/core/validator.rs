use crate::core::calculator::calculate_dti;
use crate::core::{DebtCategory, ValidatedInput};
use crate::utils::error::ValidationError;
use crate::utils::validation::parse_amount;

/// Checks raw form input and converts it to numbers.
///
/// Rules run in order (income, debts, category names) and the first failure is
/// returned. In breakdown mode the debt total is the sum of the category
/// amounts and `debts_raw` is ignored, since it may be stale; every amount
/// must then be finite and non-negative on its own.
pub fn validate(
    income_raw: &str,
    debts_raw: &str,
    categories: &[DebtCategory],
    breakdown_enabled: bool,
) -> Result<ValidatedInput, ValidationError> {
    let monthly_income = parse_amount(income_raw)
        .filter(|income| *income > 0.0)
        .ok_or(ValidationError::InvalidIncome)?;

    let debts = if breakdown_enabled {
        if categories
            .iter()
            .any(|category| !category.amount.is_finite() || category.amount < 0.0)
        {
            return Err(ValidationError::InvalidDebts);
        }
        Some(categories.iter().map(|category| category.amount).sum::<f64>())
            .filter(|total| total.is_finite())
    } else {
        parse_amount(debts_raw)
    };
    let monthly_debt_total = debts
        .filter(|debts| *debts >= 0.0)
        .ok_or(ValidationError::InvalidDebts)?;

    // An income this small against these debts overflows the ratio.
    if !(calculate_dti(monthly_income, monthly_debt_total) * 10.0).is_finite() {
        return Err(ValidationError::InvalidIncome);
    }

    if !breakdown_enabled {
        return Ok(ValidatedInput {
            monthly_income,
            monthly_debt_total,
            debt_categories: Vec::new(),
        });
    }

    if let Some(index) = categories
        .iter()
        .position(|category| category.label.trim().is_empty())
    {
        return Err(ValidationError::IncompleteCategory { index });
    }

    Ok(ValidatedInput {
        monthly_income,
        monthly_debt_total,
        debt_categories: categories.to_vec(),
    })
}
