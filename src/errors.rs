use reqwest::{StatusCode, blocking::Response};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Hunter API error: {status} - {message}")]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub(crate) fn from_response(resp: Response) -> Self {
        let status = resp.status();
        let text = resp
            .text()
            .unwrap_or_else(|e| format!("unable to read response body: {e}"));

        Self {
            status,
            message: extract_message(&text),
        }
    }

    /// HTTP status returned by the API.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Message extracted from the error body, or the body itself.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Pulls a readable message out of an error body.
///
/// Prefers the `details` of Hunter's `errors` array, then a top-level
/// `message`, then the raw body.
fn extract_message(text: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorDetail {
        details: Option<String>,
    }

    #[derive(Deserialize)]
    struct ErrorResp {
        #[serde(default)]
        errors: Vec<ErrorDetail>,
        message: Option<String>,
    }

    let Ok(resp) = serde_json::from_str::<ErrorResp>(text) else {
        return text.to_string();
    };

    let details: Vec<String> = resp.errors.into_iter().filter_map(|e| e.details).collect();
    if !details.is_empty() {
        return details.join("; ");
    }

    resp.message.unwrap_or_else(|| text.to_string())
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Hunter(#[from] ApiError),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
}

#[derive(Error, Debug)]
pub enum ClientBuilderError {
    #[error("missing field: {0}")]
    MissingField(String),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
}
