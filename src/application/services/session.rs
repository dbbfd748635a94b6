use crate::application::interfaces::SessionService;
use crate::model::credentials::ApiCredentials;
use crate::model::group::ActionGroup;
use crate::model::http::HttpClient;
use std::sync::Arc;

/// Path of the `Session` processor
pub const SESSION_PATH: &str = "/Session";

/// Implementation of the `/Session` actions: session handling
#[derive(Debug, Clone)]
pub struct SessionServiceImpl {
    group: ActionGroup,
}

impl SessionServiceImpl {
    /// Creates the service over a shared transport
    pub fn new(credentials: &ApiCredentials, http: Arc<HttpClient>) -> Self {
        Self {
            group: ActionGroup::new(SESSION_PATH, credentials, http),
        }
    }
}

impl SessionService for SessionServiceImpl {
    fn session_group(&self) -> &ActionGroup {
        &self.group
    }
}
