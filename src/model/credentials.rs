use crate::constants::API_OUTPUT_FORMAT_JSON;
use std::fmt;
use url::form_urlencoded;

/// Query parameters attached to every request
///
/// Immutable: logging in produces a new value through
/// [`ApiCredentials::with_user_token`] rather than updating this one.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    api_key: String,
    api_secret: String,
    output_format: String,
    user_token: Option<String>,
}

impl ApiCredentials {
    /// Credentials without a user token, requesting JSON output
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            output_format: API_OUTPUT_FORMAT_JSON.to_string(),
            user_token: None,
        }
    }

    /// Returns a copy carrying the given user token
    #[must_use]
    pub fn with_user_token(&self, token: impl Into<String>) -> Self {
        Self {
            user_token: Some(token.into()),
            ..self.clone()
        }
    }

    /// API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Requested output format
    pub fn output_format(&self) -> &str {
        &self.output_format
    }

    /// User token obtained at login, if any
    pub fn user_token(&self) -> Option<&str> {
        self.user_token.as_deref()
    }

    /// Renders the credential suffix, `?apikey=..&apisecret=..&apioutputformat=..[&usertoken=..]`
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::for_suffix(String::from("?"), 1);
        serializer
            .append_pair("apikey", &self.api_key)
            .append_pair("apisecret", &self.api_secret)
            .append_pair("apioutputformat", &self.output_format);
        if let Some(token) = &self.user_token {
            serializer.append_pair("usertoken", token);
        }
        serializer.finish()
    }
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"***")
            .field("output_format", &self.output_format)
            .field("user_token", &self.user_token.as_ref().map(|_| "***"))
            .finish()
    }
}
