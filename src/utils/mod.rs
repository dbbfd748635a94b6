/// Module containing environment variable helpers
pub mod config;
/// Module containing logging utilities
pub mod logger;
/// Module containing secret masking for logged URLs
pub mod redact;

pub use config::*;
pub use logger::*;
pub use redact::*;
