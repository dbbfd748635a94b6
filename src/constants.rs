/// Production API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.pamfax.biz";
/// Sandbox API endpoint, meant for testing
pub const SANDBOX_BASE_URL: &str = "https://sandbox-api.pamfax.biz";
/// Default timeout in seconds for every request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string used in HTTP requests and as the default `user_agent` of new faxes
pub const USER_AGENT: &str = concat!("pamfax-client/", env!("CARGO_PKG_VERSION"));
/// Default `origin` reported when creating a fax
pub const DEFAULT_ORIGIN: &str = "script";
/// Output format requested from the API
pub const API_OUTPUT_FORMAT_JSON: &str = "API_FORMAT_JSON";
/// Content type prefix of JSON responses
pub const CONTENT_TYPE_JSON: &str = "application/json";
/// Result code the API reports on success
pub const RESULT_CODE_SUCCESS: &str = "success";
/// Key the API emits twice in some fax state documents, making them invalid JSON
pub const DUPLICATED_JSON_KEY: &str = "\"FaxContainerFile\":";
/// Fax container state once the fax can be sent
pub const STATE_READY_TO_SEND: &str = "ready_to_send";
/// File state while the service is still converting an upload
pub const STATE_CONVERTING: &str = "converting";
/// Default maximum number of state fetches in a blocking poll
pub const DEFAULT_POLL_MAX_ATTEMPTS: u32 = 120;
/// Default delay in milliseconds between two state fetches
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;
/// Upper bound in milliseconds for the delay between state fetches when backing off
pub const DEFAULT_POLL_MAX_INTERVAL_MS: u64 = 10_000;
