pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::app::renderers::{AnyRenderer, OutputFormat};
pub use crate::core::calculator::{calculate, calculate_dti, classify_risk, round_percentage};
pub use crate::core::categories::CategoryList;
pub use crate::core::engine::DtiEngine;
pub use crate::core::session::{CalculatorSession, SessionAction};
pub use crate::core::validator::validate;
pub use crate::domain::model::{DebtCategory, DtiResult, RiskLevel, ValidatedInput};
pub use crate::utils::error::{DtiError, Result, ValidationError};
