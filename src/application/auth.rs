/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! Authentication module for the PamFax API
//!
//! Login is a single `Session/VerifyUser` call made with the application
//! credentials only. On success the returned user token is added to a new
//! set of credentials used by every later request.

use crate::application::config::Config;
use crate::application::interfaces::SessionService;
use crate::application::services::SessionServiceImpl;
use crate::error::AppError;
use crate::model::credentials::ApiCredentials;
use crate::model::http::HttpClient;
use crate::model::responses::{ApiResponse, VerifyUserResponse};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Session information for authenticated requests
#[derive(Debug, Clone)]
pub struct Session {
    credentials: ApiCredentials,
    user: Option<Value>,
}

impl Session {
    /// Token-bearing credentials attached to every action
    pub fn credentials(&self) -> &ApiCredentials {
        &self.credentials
    }

    /// User token obtained at login
    pub fn user_token(&self) -> &str {
        self.credentials.user_token().unwrap_or_default()
    }

    /// Profile of the logged-in user as returned by `VerifyUser`
    pub fn user(&self) -> Option<&Value> {
        self.user.as_ref()
    }
}

/// Authentication manager for the PamFax API
pub struct Auth {
    config: Arc<Config>,
    http: Arc<HttpClient>,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials
    /// * `http` - Transport shared with the action groups
    pub fn new(config: Arc<Config>, http: Arc<HttpClient>) -> Self {
        Self { config, http }
    }

    /// Logs in with the configured username and password
    ///
    /// # Returns
    /// * `Ok(Session)` - Credentials carrying the user token
    /// * `Err(AppError::LoginFailed)` - If the API did not report success
    pub async fn login(&self) -> Result<Session, AppError> {
        let credentials = &self.config.credentials;
        let anonymous = ApiCredentials::new(&credentials.api_key, &credentials.api_secret);
        info!("Logging in as '{}'", credentials.username);

        let response = SessionServiceImpl::new(&anonymous, self.http.clone())
            .verify_user(&credentials.username, &credentials.password)
            .await?;
        let (token, user) = extract_user_token(response)?;

        debug!("Login successful, user token obtained");
        Ok(Session {
            credentials: anonymous.with_user_token(token),
            user,
        })
    }
}

/// Extracts the user token and profile from a `VerifyUser` response
///
/// # Errors
/// * `AppError::LoginFailed` - `result.code` is not `success`
/// * `AppError::UnexpectedResponse` - Binary body, or no token on success
pub fn extract_user_token(response: ApiResponse) -> Result<(String, Option<Value>), AppError> {
    let document = response.into_json()?;
    let verify: VerifyUserResponse = serde_json::from_value(document).map_err(|e| {
        AppError::UnexpectedResponse(format!("malformed VerifyUser response: {e}"))
    })?;

    if !verify.result.is_success() {
        error!(
            "Login failed with code '{}': {}",
            verify.result.code, verify.result.message
        );
        return Err(AppError::LoginFailed {
            code: verify.result.code,
            message: verify.result.message,
        });
    }

    match verify.user_token {
        Some(user_token) if !user_token.token.is_empty() => Ok((user_token.token, verify.user)),
        _ => Err(AppError::UnexpectedResponse(
            "VerifyUser succeeded without a user token".to_string(),
        )),
    }
}
