use thiserror::Error;

/// Input rejected before any arithmetic runs. Only the first failing rule is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid monthly income value")]
    InvalidIncome,

    #[error("Please enter a valid monthly debt obligations value")]
    InvalidDebts,

    #[error("Please name every debt category (category #{} has no name)", .index + 1)]
    IncompleteCategory { index: usize },
}

#[derive(Error, Debug)]
pub enum DtiError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Calculation error: {message}")]
    ProcessingError { message: String },

    #[error("Configuration parsing failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DtiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DtiError::Validation(_) => ErrorCategory::Input,
            DtiError::ConfigError { .. }
            | DtiError::ConfigValidationError { .. }
            | DtiError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DtiError::ProcessingError { .. }
            | DtiError::IoError(_)
            | DtiError::SerializationError(_)
            | DtiError::CsvError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the binaries, chosen by severity.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DtiError::Validation(e) => e.to_string(),
            DtiError::ConfigError { message } => format!("Configuration problem: {}", message),
            DtiError::ConfigValidationError { field, message } => {
                format!("Could not read '{}': {}", field, message)
            }
            DtiError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            DtiError::ProcessingError { message } => format!("Calculation failed: {}", message),
            DtiError::IoError(e) => format!("Could not read or write a file: {}", e),
            DtiError::SerializationError(e) => format!("Could not produce JSON output: {}", e),
            DtiError::CsvError(e) => format!("Could not produce CSV output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DtiError::Validation(ValidationError::InvalidIncome) => {
                "Provide a monthly income greater than zero, e.g. --income 500000"
            }
            DtiError::Validation(ValidationError::InvalidDebts) => {
                "Provide monthly debt payments of zero or more, e.g. --debts 150000"
            }
            DtiError::Validation(ValidationError::IncompleteCategory { .. }) => {
                "Give every category a name, e.g. --category Mortgage=100000"
            }
            DtiError::ConfigError { .. }
            | DtiError::ConfigValidationError { .. }
            | DtiError::InvalidConfigValueError { .. } => {
                "Check the profile file against the documented [calculation]/[output]/[logging] tables"
            }
            DtiError::ProcessingError { .. } => "Re-run with --verbose and report the log output",
            DtiError::IoError(_) => "Check that the file exists and is readable",
            DtiError::SerializationError(_) | DtiError::CsvError(_) => {
                "Retry with --format text"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DtiError>;
