use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_ORIGIN, DEFAULT_POLL_INTERVAL_MS, DEFAULT_POLL_MAX_ATTEMPTS,
    DEFAULT_TIMEOUT_SECS, USER_AGENT,
};
use crate::model::retry::PollConfig;
use crate::utils::config::{get_env_or_default, get_env_or_none, get_required_env};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the PamFax API
pub struct Credentials {
    /// Username of the PamFax account
    pub username: String,
    /// Password of the PamFax account
    #[serde(skip_serializing)]
    pub password: String,
    /// API key issued to the application
    pub api_key: String,
    /// API secret issued to the application
    #[serde(skip_serializing)]
    pub api_secret: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Scheme and host of the PamFax API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Client details reported to the API when a fax is created or cloned
pub struct ClientIdentity {
    /// IP address of the end user, omitted when unknown
    pub user_ip: Option<String>,
    /// User agent reported for the end user
    pub user_agent: String,
    /// Origin of the fax, e.g. `script`
    pub origin: String,
}

impl Default for ClientIdentity {
    fn default() -> Self {
        Self {
            user_ip: None,
            user_agent: USER_AGENT.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the PamFax API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Client details reported when creating faxes
    pub identity: ClientIdentity,
    /// Default bounds for fax state polling
    pub polling: PollConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment and an optional `.env` file
    ///
    /// Missing credentials are logged as errors and left empty, so the first
    /// login attempt fails with the API's own result code.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            credentials: Credentials {
                username: get_required_env("PAMFAX_USERNAME"),
                password: get_required_env("PAMFAX_PASSWORD"),
                api_key: get_required_env("PAMFAX_API_KEY"),
                api_secret: get_required_env("PAMFAX_API_SECRET"),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("PAMFAX_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("PAMFAX_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            identity: ClientIdentity {
                user_ip: get_env_or_none("PAMFAX_USER_IP"),
                user_agent: get_env_or_default("PAMFAX_USER_AGENT", String::from(USER_AGENT)),
                origin: get_env_or_default("PAMFAX_ORIGIN", String::from(DEFAULT_ORIGIN)),
            },
            polling: PollConfig::new(),
        }
    }

    /// Creates a configuration from explicit credentials and default settings
    ///
    /// The environment is not consulted.
    pub fn from_credentials(
        username: impl Into<String>,
        password: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Config {
            credentials: Credentials {
                username: username.into(),
                password: password.into(),
                api_key: api_key.into(),
                api_secret: api_secret.into(),
            },
            rest_api: RestApiConfig {
                base_url: String::from(DEFAULT_BASE_URL),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            identity: ClientIdentity::default(),
            polling: PollConfig::fixed(DEFAULT_POLL_MAX_ATTEMPTS, DEFAULT_POLL_INTERVAL_MS),
        }
    }

    /// Points the client at another host, e.g. the sandbox
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }

    /// Sets the request timeout in seconds
    #[must_use]
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.rest_api.timeout = timeout;
        self
    }

    /// Sets the end user IP reported when creating faxes
    #[must_use]
    pub fn with_user_ip(mut self, user_ip: impl Into<String>) -> Self {
        self.identity.user_ip = Some(user_ip.into());
        self
    }

    /// Sets the default polling bounds
    #[must_use]
    pub fn with_polling(mut self, polling: PollConfig) -> Self {
        self.polling = polling;
        self
    }
}
