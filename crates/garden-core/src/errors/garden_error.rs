use super::StorageError;

/// Top-level error for every garden crate.
#[derive(Debug, thiserror::Error)]
pub enum GardenError {
    #[error("plant not found: {id}")]
    PlantNotFound { id: String },

    #[error("invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("recompute scheduler unavailable: {reason}")]
    SchedulerUnavailable { reason: String },
}

impl From<serde_json::Error> for GardenError {
    fn from(e: serde_json::Error) -> Self {
        GardenError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for GardenError {
    fn from(e: toml::de::Error) -> Self {
        GardenError::InvalidConfig {
            reason: e.to_string(),
        }
    }
}

pub type GardenResult<T> = Result<T, GardenError>;
