use thiserror::Error;

/// Local input rejection, raised before any network call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter some text to analyze.")]
    Empty,

    #[error(
        "Text must be at least {min} characters long for accurate detection. Need {needed} more characters."
    )]
    TooShort { min: usize, needed: usize },
}

#[derive(Error, Debug)]
pub enum DetectError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Server answered with a failure status; message shown verbatim.
    #[error("{0}")]
    Service(String),

    /// No interpretable response at all.
    #[error("{0}")]
    Transport(String),

    #[error("Invalid response from detection service: {0}")]
    Decode(String),

    #[error("A detection request is already in progress")]
    Busy,

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for DetectError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            DetectError::Decode(err.to_string())
        } else {
            DetectError::Transport(err.to_string())
        }
    }
}

impl DetectError {
    /// Errors produced by the submit lifecycle itself (shown in the error section).
    pub fn is_submit_failure(&self) -> bool {
        matches!(
            self,
            DetectError::Validation(_)
                | DetectError::Service(_)
                | DetectError::Transport(_)
                | DetectError::Decode(_)
        )
    }
}
