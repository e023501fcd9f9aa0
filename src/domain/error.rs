use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UrlError {
    #[error("Invalid YouTube URL format: {input}")]
    InvalidUrl { input: String },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("comment request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("comment API rejected the request with status {status}: {message}")]
    Api { status: u16, message: String },
    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("classifier request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("classifier returned status {status}: {message}")]
    Api { status: u16, message: String },
    #[error("classifier response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("classifier returned no labels")]
    EmptyResult,
    #[error("classifier returned unrecognized label {0:?}")]
    UnrecognizedLabel(String),
    #[error("{0}")]
    Other(String),
}

/// Request-level failures surfaced to the HTTP caller.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("No video URL provided")]
    MissingUrl,
    #[error("Could not extract video ID: {0}")]
    InvalidUrl(#[from] UrlError),
    #[error("Failed to fetch comments: {0}")]
    Fetch(#[from] FetchError),
    #[error("No comments found or unable to fetch comments")]
    NoComments,
}
