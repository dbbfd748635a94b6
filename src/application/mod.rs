/// Login and session handling
pub mod auth;
/// Logged-in client facade
pub mod client;
/// Application configuration module
pub mod config;
/// Traits describing the actions of each processor
pub mod interfaces;
/// Per-processor implementations of the interfaces
pub mod services;
