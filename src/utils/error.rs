use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("{value} is not type float or int")]
    InvalidType {
        value: String,
        type_name: &'static str,
    },

    #[error("Invalid input for '{field}': {value:?} ({reason})")]
    InvalidInputError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Integer overflow in {operation}")]
    Overflow { operation: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 輸入型別錯誤
    Input,
    /// 數值運算錯誤
    Arithmetic,
    Configuration,
    System,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::InvalidType { .. } | CalcError::InvalidInputError { .. } => {
                ErrorCategory::Input
            }
            CalcError::DivisionByZero | CalcError::Overflow { .. } => ErrorCategory::Arithmetic,
            CalcError::ConfigError { .. } | CalcError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            CalcError::IoError(_) | CalcError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Arithmetic => 2,
            ErrorCategory::Configuration | ErrorCategory::System => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::InvalidType { value, type_name } => {
                format!("Operand {} ({}) is not a number", value, type_name)
            }
            CalcError::InvalidInputError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            CalcError::DivisionByZero => "Cannot divide by zero".to_string(),
            CalcError::Overflow { operation } => {
                format!("Integer overflow in {}: the value does not fit in 64 bits", operation)
            }
            CalcError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
