use thiserror::Error;

/// Errors surfaced to callers of the range engine.
///
/// `InvalidHand` and `RangeNotFound` are client input problems; the web layer
/// maps them to 4xx responses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Invalid hand '{token}': {reason}")]
    InvalidHand { token: String, reason: String },

    #[error("Invalid range notation '{notation}': {reason}")]
    InvalidRangeNotation { notation: String, reason: String },

    #[error("No range for {position} / {action} / {stack_depth}")]
    RangeNotFound {
        position: String,
        action: String,
        stack_depth: String,
    },

    #[error("Answer '{0}' is not an action of the active range")]
    UnknownAnswer(String),
}

/// Failures while loading the range document. Recovered inside
/// `RangeRepository::load`, exposed by `RangeRepository::try_load`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read range file")]
    Io(#[from] std::io::Error),

    #[error("Range file is not valid JSON")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected document shape at {path}: {reason}")]
    Shape { path: String, reason: String },
}
