use reqwest::StatusCode;
use thiserror::Error;


/// Why an analysis produced no usable scores.
#[derive(Debug, Error)]
pub enum DetectionError {
    #[error("input text is blank")]
    BlankInput,

    #[error("emotion predict request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("emotion predict endpoint returned {0}")]
    Status(StatusCode),

    #[error("invalid emotion predict response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("emotion predict response has no predictions")]
    MissingPrediction,

    #[error("no valid emotion detected")]
    NoEmotionDetected,
}
