/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 4/11/25
******************************************************************************/
use crate::constants::RESULT_CODE_SUCCESS;
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized response of an action
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Parsed body of a JSON response
    Json(Value),
    /// Body of any other content type (PDFs, preview images, provider logos)
    Binary {
        /// Untouched response bytes
        content: Vec<u8>,
        /// Value of the `content-type` header, empty when absent
        content_type: String,
    },
}

impl ApiResponse {
    /// The JSON document, if this is a JSON response
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::Binary { .. } => None,
        }
    }

    /// Consumes the response, returning the JSON document
    ///
    /// # Errors
    /// `AppError::UnexpectedResponse` for binary responses
    pub fn into_json(self) -> Result<Value, AppError> {
        match self {
            ApiResponse::Json(value) => Ok(value),
            ApiResponse::Binary { content_type, .. } => Err(AppError::UnexpectedResponse(
                format!("expected a JSON document, got '{content_type}'"),
            )),
        }
    }

    /// Consumes the response, returning `(content, content_type)`
    ///
    /// # Errors
    /// `AppError::UnexpectedResponse` for JSON responses
    pub fn into_binary(self) -> Result<(Vec<u8>, String), AppError> {
        match self {
            ApiResponse::Binary {
                content,
                content_type,
            } => Ok((content, content_type)),
            ApiResponse::Json(_) => Err(AppError::UnexpectedResponse(
                "expected binary content, got a JSON document".to_string(),
            )),
        }
    }

    /// Whether this is a binary response
    pub fn is_binary(&self) -> bool {
        matches!(self, ApiResponse::Binary { .. })
    }

    /// The `result` block every JSON document carries
    pub fn result(&self) -> Option<ResultStatus> {
        self.as_json()
            .and_then(|doc| doc.get("result"))
            .and_then(|result| ResultStatus::deserialize(result).ok())
    }

    /// Whether the document reports `result.code == "success"`
    pub fn is_success(&self) -> bool {
        self.result().is_some_and(|result| result.is_success())
    }
}

/// Outcome reported by the API in the `result` block of each document
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ResultStatus {
    /// Result code, `success` or an error identifier
    pub code: String,
    /// Human readable message
    #[serde(default)]
    pub message: String,
    /// Error category, when provided
    #[serde(default, rename = "type")]
    pub kind: String,
}

impl ResultStatus {
    /// Whether the code is `success`
    pub fn is_success(&self) -> bool {
        self.code == RESULT_CODE_SUCCESS
    }
}

/// Token returned by `Session/VerifyUser`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserToken {
    /// Session token to pass as `usertoken`
    pub token: String,
}

/// Typed view of a `Session/VerifyUser` document
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyUserResponse {
    /// Outcome of the verification
    pub result: ResultStatus,
    /// Token, present on success
    #[serde(rename = "UserToken")]
    pub user_token: Option<UserToken>,
    /// Profile of the verified user, present on success
    #[serde(rename = "User")]
    pub user: Option<Value>,
}
