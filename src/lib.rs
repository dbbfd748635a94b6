/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 3/11/25
******************************************************************************/

//! # PamFax Client
//!
//! An async client for the PamFax HTTP/JSON API. Every remote action is a
//! method, grouped by the service's processors (`Common`, `FaxHistory`,
//! `FaxJob`, `NumberInfo`, `OnlineStorage`, `Session`, `Shopping`,
//! `UserInfo`). The [`application::client::PamFax`] facade logs in once and
//! exposes all of them directly.
//!
//! ## Example
//! ```ignore
//! use pamfax_client::prelude::*;
//!
//! setup_logger();
//! let client = PamFax::new(Config::new()).await?;
//!
//! let fax = client.create(None, None, None).await?;
//! client.add_recipient("+4930123456789", Some("Alice")).await?;
//! client.set_cover(42, Some("Hello from Rust")).await?;
//!
//! let cancel = CancellationToken::new();
//! client.wait_until_ready_to_send(&PollConfig::new(), &cancel).await?;
//! client.send(None, None, None).await?;
//! ```
//!
//! Responses are returned as [`model::responses::ApiResponse`]: parsed JSON
//! for regular actions, raw bytes plus content type for binary artifacts
//! (previews, PDFs, provider logos). Checking `result.code` is left to the
//! caller, see [`model::responses::ApiResponse::is_success`].

/// Facade, login handshake, configuration and the per-processor services
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Wire-level models: query building, credentials, transport and responses
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Configuration, logging and redaction helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
