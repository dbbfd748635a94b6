/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 4/11/25
******************************************************************************/
/// API credential query parameters
pub mod credentials;
/// Request context shared by the actions of one processor
pub mod group;
/// HTTP transport and response normalization
pub mod http;
/// URL and query string construction
pub mod query;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
/// Polling configuration
pub mod retry;
/// Helpers over fax state documents
pub mod state;
