use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelmapError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingConfigError { field: String },
}

impl RelmapError {
    /// Short message for end users, without the debug detail the log
    /// line already carries.
    pub fn user_friendly_message(&self) -> String {
        match self {
            RelmapError::IoError(e) => format!("Could not read the input file: {}", e),
            RelmapError::TomlError(_) => "The dataset file is not valid TOML".to_string(),
            RelmapError::SerializationError(_) => "Could not serialize the report".to_string(),
            RelmapError::InvalidConfigValueError { field, reason, .. } => {
                format!("The value of '{}' is invalid: {}", field, reason)
            }
            RelmapError::MissingConfigError { field } => {
                format!("The dataset is missing the required field '{}'", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RelmapError>;
