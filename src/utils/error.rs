use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No active user for {action}")]
    NoActiveUser { action: String },

    #[error("Invalid menu choice: {input}")]
    InvalidChoice { input: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    System,
    Configuration,
    Session,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PortalError {
    pub fn no_active_user(action: &str) -> Self {
        Self::NoActiveUser {
            action: action.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::System,
            Self::TomlError(_)
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::NoActiveUser { .. } => ErrorCategory::Session,
            Self::InvalidChoice { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoActiveUser { .. } | Self::InvalidChoice { .. } => ErrorSeverity::Low,
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            Self::TomlError(_) => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 可在選單迴圈內回報並繼續的錯誤
    pub fn is_recoverable(&self) -> bool {
        self.severity() == ErrorSeverity::Low
    }

    /// Message printed to the console user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::NoActiveUser { action } => {
                format!("Please register or log in to {}.", action)
            }
            Self::InvalidChoice { .. } => "Invalid choice. Please try again.".to_string(),
            Self::IoError(e) => format!("Console I/O failed: {}", e),
            Self::TomlError(e) => format!("Catalog file is not valid TOML: {}", e),
            Self::ConfigValidationError { field, message } => {
                format!("Catalog configuration problem in {}: {}", field, message)
            }
            Self::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Invalid value '{}' for {}: {}", value, field, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::System => "Check that standard input and output are available",
            ErrorCategory::Configuration => {
                "Fix the catalog file, or run without --catalog to use the built-in services"
            }
            ErrorCategory::Session => "Choose option 1 to register a user first",
            ErrorCategory::Input => "Enter a number between 1 and 6",
        }
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;
