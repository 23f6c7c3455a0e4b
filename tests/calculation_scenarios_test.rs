use dti_calc::core::ResultRenderer;
use dti_calc::{
    calculate, calculate_dti, validate, AnyRenderer, CalculatorSession, DebtCategory, DtiEngine,
    DtiError, OutputFormat, RiskLevel, SessionAction, ValidationError,
};

fn session(income: &str, debts: &str) -> CalculatorSession {
    CalculatorSession::new()
        .apply(SessionAction::SetIncome(income.to_string()))
        .apply(SessionAction::SetDebts(debts.to_string()))
}

#[test]
fn test_moderate_household() {
    let validated = validate("500000", "150000", &[], false).unwrap();
    let result = calculate(&validated);

    assert_eq!(result.percentage, 30.0);
    assert_eq!(result.risk_level, RiskLevel::Moderate);
}

#[test]
fn test_debts_above_income() {
    let validated = validate("500000", "600000", &[], false).unwrap();
    let result = calculate(&validated);

    assert_eq!(result.percentage, 120.0);
    assert_eq!(result.risk_level, RiskLevel::High);
}

#[test]
fn test_validation_failures() {
    assert_eq!(
        validate("", "1000", &[], false).unwrap_err(),
        ValidationError::InvalidIncome
    );
    assert_eq!(
        validate("500000", "-1", &[], false).unwrap_err(),
        ValidationError::InvalidDebts
    );
    assert_eq!(
        validate("500000", "150000", &[DebtCategory::new("", 100.0)], true).unwrap_err(),
        ValidationError::IncompleteCategory { index: 0 }
    );
}

#[test]
fn test_rounding_to_one_decimal() {
    let validated = validate("1000000", "333333", &[], false).unwrap();
    assert_eq!(calculate(&validated).percentage, 33.3);
    assert!((calculate_dti(1000000.0, 333333.0) - 33.3333).abs() < 1e-9);
}

#[test]
fn test_engine_renders_json() {
    let engine = DtiEngine::new(AnyRenderer::for_format(OutputFormat::Json, 20));
    let (session, json) = engine.run(session("500000", "150000")).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["result"]["percentage"], 30.0);
    assert_eq!(value["result"]["riskLevel"], "moderate");
    assert_eq!(session.result().unwrap().risk_level, RiskLevel::Moderate);
}

#[test]
fn test_engine_reports_validation_error() {
    let engine = DtiEngine::new(AnyRenderer::for_format(OutputFormat::Text, 20));
    let err = engine.run(session("abc", "150000")).unwrap_err();

    assert!(matches!(
        err,
        DtiError::Validation(ValidationError::InvalidIncome)
    ));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_engine_renders_breakdown_csv() {
    let engine = DtiEngine::new(AnyRenderer::for_format(OutputFormat::Csv, 20));
    let input = session("500000", "")
        .apply(SessionAction::InsertCategory(DebtCategory::new("Mortgage", 100000.0)))
        .apply(SessionAction::InsertCategory(DebtCategory::new("Consumer", 50000.0)))
        .apply(SessionAction::SetBreakdown(true));

    let (_, csv) = engine.run(input).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "Mortgage,100000,66.7,30.0,moderate");
    assert_eq!(lines[2], "Consumer,50000,33.3,30.0,moderate");
}

#[test]
fn test_text_renderer_through_any_renderer() {
    let validated = validate("500000", "50000", &[], false).unwrap();
    let result = calculate(&validated);
    let text = AnyRenderer::for_format(OutputFormat::Text, 10)
        .render(&result)
        .unwrap();

    assert!(text.contains("DTI ratio: 10.0%"));
    assert!(text.contains("Low risk"));
    assert!(text.contains("[█░░░░░░░░░]"));
}
