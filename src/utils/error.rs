use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Could not extract page ID from URL: {url}")]
    PageIdNotFound { url: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FetchError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            FetchError::PageIdNotFound { .. } => {
                "Could not extract page ID from URL".to_string()
            }
            FetchError::ApiError(e) => format!("Error fetching page: {}", e),
            FetchError::IoError(e) => format!("Could not write output file: {}", e),
            FetchError::SerializationError(e) => format!("Could not decode page data: {}", e),
            FetchError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration for {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FetchError::PageIdNotFound { .. } => {
                "Check that the share link contains a 32-character page ID"
            }
            FetchError::ApiError(_) => {
                "Check the network connection and that the page is shared publicly"
            }
            FetchError::IoError(_) => "Check that the output directory is writable",
            FetchError::SerializationError(_) => "The page may not be shared publicly",
            FetchError::InvalidConfigValueError { .. } => "Review the command line arguments",
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
