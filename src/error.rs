use reqwest::StatusCode;

/// Why a single upload did not produce a result.
///
/// Every variant ends only the upload it belongs to; nothing is retried.
#[derive(thiserror::Error, Debug)]
pub enum UploadError {
    #[error("cannot read file content: {0}")]
    Read(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upload status is not success, but {0}")]
    Status(StatusCode),

    #[error("failed to deserialize upload response: {0}")]
    Decode(#[from] serde_json::Error),
}
