/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/25
******************************************************************************/

//! # PamFax Client Prelude
//!
//! This module provides a convenient way to import the most commonly used types and traits
//! from the PamFax client library. Importing the prelude brings every action group trait
//! into scope, so all actions can be called directly on [`PamFax`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pamfax_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let client = PamFax::new(Config::new()).await?;
//! let settings = client.get_current_settings().await?;
//! println!("{:?}", settings.result());
//! # Ok(())
//! # }
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the PamFax API client
pub use crate::application::config::{ClientIdentity, Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, PamFaxResult};

// ============================================================================
// CLIENT AND AUTHENTICATION
// ============================================================================

/// Logged-in facade and state fetch modes
pub use crate::application::client::{FetchMode, PamFax};

/// Login handshake and session
pub use crate::application::auth::{Auth, Session};

// ============================================================================
// ACTION GROUPS (TRAITS)
// ============================================================================

pub use crate::application::interfaces::{
    CommonService, FaxHistoryService, FaxJobService, NumberInfoService, OnlineStorageService,
    SessionService, ShoppingService, UserInfoService,
};

// ============================================================================
// SERVICE IMPLEMENTATIONS
// ============================================================================

pub use crate::application::services::{
    CommonServiceImpl, FaxHistoryServiceImpl, FaxJobServiceImpl, NumberInfoServiceImpl,
    OnlineStorageServiceImpl, SessionServiceImpl, ShoppingServiceImpl, UserInfoServiceImpl,
};

// ============================================================================
// TRANSPORT AND MODELS
// ============================================================================

/// Transport shared by all action groups
pub use crate::model::http::HttpClient;

/// Request context of one processor
pub use crate::model::group::ActionGroup;

/// Credential query parameters
pub use crate::model::credentials::ApiCredentials;

/// Query building
pub use crate::model::query::{Params, QueryValue};

/// Uploads and responses
pub use crate::model::requests::FileUpload;
pub use crate::model::responses::{ApiResponse, ResultStatus};

/// Polling bounds and fax state helpers
pub use crate::model::retry::PollConfig;
pub use crate::model::state::{fax_container_state, is_converting, is_ready_to_send};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value;
pub use std::sync::Arc;
pub use tokio;
pub use tokio_util::sync::CancellationToken;
pub use tracing::{debug, error, info, warn};
