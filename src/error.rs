/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 3/11/25
******************************************************************************/
use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the PamFax client
///
/// Transport failures (`Network`, `Http`) are fatal and never retried.
/// Application-level failures, i.e. a JSON body whose `result.code` is not
/// `success`, are only turned into errors during login.
#[derive(Debug, Error)]
pub enum AppError {
    /// Connection, TLS or timeout failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The server answered with a non-2xx status
    #[error("unexpected http status {status}: {body}")]
    Http {
        /// Status returned by the server
        status: StatusCode,
        /// Response body, possibly empty
        body: String,
    },
    /// The body was declared as JSON but could not be parsed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Local I/O failure, e.g. reading a file to upload
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// `Session/VerifyUser` did not report success
    #[error("login failed ({code}): {message}")]
    LoginFailed {
        /// Result code reported by the API
        code: String,
        /// Message reported by the API
        message: String,
    },
    /// A response lacked a field the client relies on
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
    /// A bounded poll ran out of attempts
    #[error("polling gave up after {attempts} attempts")]
    PollExhausted {
        /// Number of fetches performed
        attempts: u32,
    },
    /// A poll was cancelled by the caller
    #[error("operation cancelled")]
    Cancelled,
    /// The caller passed unusable input
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result alias used across the crate
pub type PamFaxResult<T> = Result<T, AppError>;
