use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuakeMapError {
    #[error("Feed request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Feed returned HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Malformed feature #{index}: {reason}")]
    MalformedFeature { index: usize, reason: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, QuakeMapError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Config,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl QuakeMapError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) | Self::HttpStatus { .. } => ErrorCategory::Network,
            Self::SerializationError(_) | Self::MalformedFeature { .. } => ErrorCategory::Data,
            Self::InvalidConfigValueError { .. } | Self::MissingConfigError { .. } => {
                ErrorCategory::Config
            }
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路問題通常稍後再跑一次就好
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 程序結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ApiError(_) => {
                "Check your network connection and that the feed URL is reachable".to_string()
            }
            Self::HttpStatus { status, .. } if *status >= 500 => {
                "The feed server is having trouble, try again later".to_string()
            }
            Self::HttpStatus { .. } => "Check that --feed-url points at a GeoJSON feed".to_string(),
            Self::SerializationError(_) => {
                "The feed did not return a GeoJSON feature collection".to_string()
            }
            Self::MalformedFeature { .. } => {
                "The feed contains an earthquake without magnitude or coordinates".to_string()
            }
            Self::InvalidConfigValueError { field, .. } | Self::MissingConfigError { field } => {
                format!("Fix the '{}' option and run again", field)
            }
            Self::IoError(_) => "Check that the output path is writable".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not download earthquake data: {}", self),
            ErrorCategory::Data => format!("Earthquake data could not be read: {}", self),
            ErrorCategory::Config => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}
