use std::fmt;
use thiserror::Error;

/// The form field a value was typed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    LegA,
    LegB,
    MaxSum,
}

impl InputField {
    pub fn is_leg(&self) -> bool {
        matches!(self, Self::LegA | Self::LegB)
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LegA => "a",
            Self::LegB => "b",
            Self::MaxSum => "max_sum",
        })
    }
}

#[derive(Error, Debug)]
pub enum PythagorasError {
    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumber { field: InputField, value: String },

    #[error("Value for {field} must be greater than 0, got {value}")]
    OutOfRange { field: InputField, value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
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
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status for a failed request.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Medium => 2,
            Self::High => 1,
            Self::Critical => 3,
        }
    }
}

impl PythagorasError {
    pub fn invalid_number(field: InputField, value: &str) -> Self {
        Self::InvalidNumber {
            field,
            value: value.to_string(),
        }
    }

    pub fn out_of_range(field: InputField, value: impl ToString) -> Self {
        Self::OutOfRange {
            field,
            value: value.to_string(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidNumber { .. } | Self::OutOfRange { .. } => ErrorCategory::Input,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) | Self::CsvError(_) | Self::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Short message for the person at the keyboard. Input errors use the
    /// tool's fixed UI strings.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidNumber { field, .. } if field.is_leg() => {
                "Bitte Zahlen fuer a und b eingeben.".to_string()
            }
            Self::OutOfRange { field, .. } if field.is_leg() => {
                "a und b muessen groesser als 0 sein.".to_string()
            }
            Self::InvalidNumber { .. } => {
                "Bitte eine ganze Zahl fuer die Max Summe eingeben.".to_string()
            }
            Self::OutOfRange { .. } => "Die Max Summe muss groesser als 0 sein.".to_string(),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            Self::IoError(e) => format!("File operation failed: {}", e),
            Self::CsvError(e) => format!("Could not write table: {}", e),
            Self::SerializationError(e) => format!("Could not serialize output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidNumber { field, .. } if field.is_leg() => {
                "Enter the legs as decimal numbers, e.g. 3 or 2,5"
            }
            Self::InvalidNumber { .. } => "Enter the maximum sum as a whole number, e.g. 100",
            Self::OutOfRange { .. } => "Use a value greater than 0",
            Self::ConfigError { .. } => "Check that the configuration file is valid TOML",
            Self::InvalidConfigValueError { .. } => {
                "Fix the named configuration value or remove it to use the default"
            }
            Self::IoError(_) => "Check that the output directory exists and is writable",
            Self::CsvError(_) | Self::SerializationError(_) => {
                "Try a different output format or run with --verbose for details"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PythagorasError>;
