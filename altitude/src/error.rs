use slope::AltitudeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid application id")]
    InvalidAppId,

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed response, {0}")]
    Json(#[from] serde_json::Error),

    #[error("no altitude data found")]
    NoDataFound,
}

impl From<ClientError> for AltitudeError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::NoDataFound => AltitudeError::NoDataFound,
            other => AltitudeError::Unavailable(other.to_string()),
        }
    }
}
