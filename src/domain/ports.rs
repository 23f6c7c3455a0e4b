use crate::domain::model::{DebtCategory, DtiResult};
use crate::utils::error::Result;

/// Supplies the raw, still unvalidated form fields of one calculation.
pub trait InputProvider {
    fn income_raw(&self) -> &str;
    fn debts_raw(&self) -> &str;
    fn categories(&self) -> &[DebtCategory];
    fn breakdown_enabled(&self) -> bool;
}

/// Turns a finished calculation into something a person or program can read.
pub trait ResultRenderer {
    fn render(&self, result: &DtiResult) -> Result<String>;
}
