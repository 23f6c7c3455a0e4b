//! Calculator screen state.
//!
//! A [`CalculatorSession`] holds everything a front end shows: the raw income and
//! debt fields, the category list, the breakdown flag, the last error and the
//! last result. Every user action is a [`SessionAction`] applied with
//! [`CalculatorSession::apply`], which consumes the snapshot and returns the
//! next one. The aggregate debt is never stored; it is derived on demand by
//! [`CalculatorSession::monthly_debt_total`].

use crate::core::calculator;
use crate::core::categories::CategoryList;
use crate::core::validator::validate;
use crate::core::{DebtCategory, DtiResult, InputProvider};
use crate::utils::error::ValidationError;
use crate::utils::validation::parse_amount;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    SetIncome(String),
    SetDebts(String),
    SetBreakdown(bool),
    AddCategory,
    InsertCategory(DebtCategory),
    RemoveCategory(usize),
    UpdateCategoryLabel { index: usize, label: String },
    UpdateCategoryAmount { index: usize, raw: String },
    Submit,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorSession {
    income: String,
    debts: String,
    categories: CategoryList,
    breakdown_enabled: bool,
    error: Option<ValidationError>,
    result: Option<DtiResult>,
}

impl CalculatorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replays a provider's fields as user actions, ending with the breakdown toggle.
    pub fn from_provider<P: InputProvider + ?Sized>(provider: &P) -> Self {
        let mut session = Self::new()
            .apply(SessionAction::SetIncome(provider.income_raw().to_string()))
            .apply(SessionAction::SetDebts(provider.debts_raw().to_string()));
        for category in provider.categories() {
            session = session.apply(SessionAction::InsertCategory(category.clone()));
        }
        session.apply(SessionAction::SetBreakdown(provider.breakdown_enabled()))
    }

    pub fn apply(mut self, action: SessionAction) -> Self {
        match action {
            SessionAction::SetIncome(raw) => self.income = raw,
            SessionAction::SetDebts(raw) => self.debts = raw,
            SessionAction::SetBreakdown(enabled) => return self.set_breakdown(enabled),
            SessionAction::AddCategory => self.categories.add(),
            SessionAction::InsertCategory(category) => self.categories.push(category),
            SessionAction::RemoveCategory(index) => {
                // The last visible category cannot be removed while breakdown is on.
                if !(self.breakdown_enabled && self.categories.len() <= 1) {
                    self.categories.remove(index);
                }
            }
            SessionAction::UpdateCategoryLabel { index, label } => {
                self.categories.update_label(index, &label);
            }
            SessionAction::UpdateCategoryAmount { index, raw } => {
                self.categories.update_amount(index, &raw);
            }
            SessionAction::Submit => return self.submit(),
        }
        self
    }

    fn set_breakdown(mut self, enabled: bool) -> Self {
        if enabled && !self.breakdown_enabled {
            if self.categories.is_empty() {
                self.categories.add();
            }
            if let Some(flat_total) = parse_amount(&self.debts).filter(|total| *total > 0.0) {
                self.categories.seed_evenly(flat_total);
            }
        }
        self.breakdown_enabled = enabled;
        self
    }

    /// Validates the current fields. On success the previous result is replaced
    /// and the error cleared; on failure the error is set and the previous
    /// result is kept on screen.
    fn submit(mut self) -> Self {
        match validate(
            &self.income,
            &self.debts,
            self.categories.entries(),
            self.breakdown_enabled,
        ) {
            Ok(validated) => {
                self.result = Some(calculator::calculate(&validated));
                self.error = None;
            }
            Err(e) => {
                tracing::info!(error = %e, "calculation rejected");
                self.error = Some(e);
            }
        }
        self
    }

    /// Debt figure the form currently stands for: the category sum in breakdown
    /// mode, otherwise the parsed debts field.
    pub fn monthly_debt_total(&self) -> Option<f64> {
        if self.breakdown_enabled {
            Some(self.categories.total())
        } else {
            parse_amount(&self.debts)
        }
    }

    pub fn income(&self) -> &str {
        &self.income
    }

    pub fn debts(&self) -> &str {
        &self.debts
    }

    pub fn categories(&self) -> &CategoryList {
        &self.categories
    }

    pub fn breakdown_enabled(&self) -> bool {
        self.breakdown_enabled
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn result(&self) -> Option<&DtiResult> {
        self.result.as_ref()
    }
}
