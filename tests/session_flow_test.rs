use dti_calc::{CalculatorSession, DebtCategory, RiskLevel, SessionAction, ValidationError};

#[test]
fn test_breakdown_editing_flow() {
    // Flat figures first, then switch to itemized debts and edit them.
    let session = CalculatorSession::new()
        .apply(SessionAction::SetIncome("500000".to_string()))
        .apply(SessionAction::SetDebts("100000".to_string()))
        .apply(SessionAction::AddCategory)
        .apply(SessionAction::AddCategory)
        .apply(SessionAction::AddCategory)
        .apply(SessionAction::SetBreakdown(true));

    assert_eq!(session.monthly_debt_total(), Some(99999.0));

    let session = session
        .apply(SessionAction::UpdateCategoryLabel {
            index: 0,
            label: "Mortgage".to_string(),
        })
        .apply(SessionAction::UpdateCategoryLabel {
            index: 1,
            label: "Car".to_string(),
        })
        .apply(SessionAction::Submit);

    assert_eq!(
        session.error(),
        Some(&ValidationError::IncompleteCategory { index: 2 })
    );
    assert!(session.result().is_none());

    let session = session
        .apply(SessionAction::RemoveCategory(2))
        .apply(SessionAction::UpdateCategoryAmount {
            index: 1,
            raw: "1000".to_string(),
        })
        .apply(SessionAction::Submit);

    let result = session.result().unwrap();
    assert_eq!(result.debts, 34333.0);
    assert_eq!(result.percentage, 6.9);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(
        result.debt_categories.as_deref(),
        Some(
            &[
                DebtCategory::new("Mortgage", 33333.0),
                DebtCategory::new("Car", 1000.0)
            ][..]
        )
    );
}

#[test]
fn test_new_calculation_replaces_previous_result() {
    let session = CalculatorSession::new()
        .apply(SessionAction::SetIncome("500000".to_string()))
        .apply(SessionAction::SetDebts("150000".to_string()))
        .apply(SessionAction::Submit);
    assert_eq!(session.result().unwrap().risk_level, RiskLevel::Moderate);

    let session = session
        .apply(SessionAction::SetDebts("600000".to_string()))
        .apply(SessionAction::Submit);
    let result = session.result().unwrap();
    assert_eq!(result.percentage, 120.0);
    assert_eq!(result.risk_level, RiskLevel::High);
}

#[test]
fn test_seeding_skipped_once_amounts_entered() {
    let session = CalculatorSession::new()
        .apply(SessionAction::SetDebts("90000".to_string()))
        .apply(SessionAction::InsertCategory(DebtCategory::new("Card", 0.0)))
        .apply(SessionAction::InsertCategory(DebtCategory::new("Loan", 12000.0)))
        .apply(SessionAction::SetBreakdown(true));

    assert_eq!(session.monthly_debt_total(), Some(12000.0));
}

#[test]
fn test_transitions_do_not_touch_other_fields() {
    let before = CalculatorSession::new()
        .apply(SessionAction::SetIncome("500000".to_string()))
        .apply(SessionAction::AddCategory);
    let after = before
        .clone()
        .apply(SessionAction::UpdateCategoryAmount {
            index: 7,
            raw: "10".to_string(),
        });

    assert_eq!(before, after);
}
