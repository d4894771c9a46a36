use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Validation errors
    #[error("Search query cannot be empty")]
    EmptyQuery,

    #[error("Invalid limit {limit}: must be at least 1")]
    InvalidLimit { limit: usize },

    // Simulated backend errors
    #[error("Simulated {operation} failed for: {target}")]
    SimulatedFetch { operation: String, target: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a simulated fetch failure for an operation and its target
    pub fn simulated_fetch(operation: impl Into<String>, target: impl Into<String>) -> Self {
        Self::SimulatedFetch {
            operation: operation.into(),
            target: target.into(),
        }
    }

    /// Check if error is caused by caller input rather than a failed fetch
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::EmptyQuery | AppError::InvalidLimit { .. })
    }

    /// Check if error came from the simulated backend
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, AppError::SimulatedFetch { .. })
    }

    /// Short user-facing text for a notice about this error
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::EmptyQuery => "Please enter a search term",
            AppError::InvalidLimit { .. } => "Please choose a limit of at least 1",
            AppError::SimulatedFetch { .. } => "Failed to retrieve external data",
            _ => "Something went wrong",
        }
    }
}
