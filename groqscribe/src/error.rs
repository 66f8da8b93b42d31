use std::path::PathBuf;

/// All errors that can occur in groqscribe.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("GROQ_API_KEY is not set — export it or add it to a .env file")]
    MissingApiKey,

    #[error("audio file not found: {path}")]
    AudioNotFound { path: PathBuf },

    #[error("transcription service error ({status}): {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
