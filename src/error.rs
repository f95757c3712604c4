use thiserror::Error;

/// Why an extraction produced no result. The `Display` text is what the user
/// sees on the error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("Please enter JSON data")]
    MissingInput,
    #[error("Please select a reward type")]
    MissingRewardType,
    #[error("Please select an animal type for {0}")]
    MissingAnimal(String),
    #[error("Unknown reward type: {0}")]
    UnknownRewardType(String),
    #[error("Invalid JSON format: {0}")]
    MalformedJson(String),
    #[error("JSON must contain an \"items\" array")]
    InvalidShape,
    #[error("Could not find all required items. {0}")]
    IncompleteMatch(Shortfall),
    /// Serializing a result failed. Only plain strings are serialized, so
    /// this is not expected in practice.
    #[error("Failed to render output: {0}")]
    Render(String),
}

impl From<serde_json::Error> for ExtractionError {
    fn from(error: serde_json::Error) -> Self {
        ExtractionError::MalformedJson(error.to_string())
    }
}

/// What was left unmatched after a scan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Shortfall {
    #[error("Only found {found} out of {required} {animal} items")]
    Triple {
        found: usize,
        required: usize,
        animal: String,
    },
    #[error("Missing animals: {}", .0.join(", "))]
    Missing(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("{0}")]
    Read(String),
    #[error("{0}")]
    Write(String),
}
