use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Database operation failed: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Date parsing error: {0}")]
    DateParseError(#[from] chrono::ParseError),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Database,
    Validation,
    Io,
}

impl BookingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DatabaseError(_) => ErrorCategory::Database,
            Self::IoError(_) => ErrorCategory::Io,
            Self::DateParseError(_) | Self::ValidationError { .. } => ErrorCategory::Validation,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Database => ErrorSeverity::Critical,
            ErrorCategory::Io => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Validation => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Database => {
                "Check that the database file is writable and the sqlite URL is correct".to_string()
            }
            ErrorCategory::Io => "Check file permissions and available disk space".to_string(),
            ErrorCategory::Configuration => {
                "Review the CLI flags or the TOML configuration file".to_string()
            }
            ErrorCategory::Validation => {
                "Check the request parameters, dates must be YYYY-MM-DD".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::DatabaseError(_) => "The booking database is unavailable".to_string(),
            Self::IoError(_) => "A file operation failed".to_string(),
            Self::DateParseError(_) => "A date was not in YYYY-MM-DD format".to_string(),
            Self::ConfigValidationError { field, .. }
            | Self::InvalidConfigValueError { field, .. }
            | Self::MissingConfigError { field } => {
                format!("The configuration entry '{}' is not usable", field)
            }
            Self::ValidationError { message } => message.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BookingError>;
