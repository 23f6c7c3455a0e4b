pub mod calculator;
pub mod categories;
pub mod engine;
pub mod report;
pub mod session;
pub mod validator;

pub use crate::domain::model::{DebtCategory, DtiResult, RiskLevel, ValidatedInput};
pub use crate::domain::ports::{InputProvider, ResultRenderer};
pub use crate::utils::error::Result;
