use crate::application::interfaces::OnlineStorageService;
use crate::model::credentials::ApiCredentials;
use crate::model::group::ActionGroup;
use crate::model::http::HttpClient;
use std::sync::Arc;

/// Path of the `OnlineStorage` processor
pub const ONLINE_STORAGE_PATH: &str = "/OnlineStorage";

/// Implementation of the `/OnlineStorage` actions: online storage providers
#[derive(Debug, Clone)]
pub struct OnlineStorageServiceImpl {
    group: ActionGroup,
}

impl OnlineStorageServiceImpl {
    /// Creates the service over a shared transport
    pub fn new(credentials: &ApiCredentials, http: Arc<HttpClient>) -> Self {
        Self {
            group: ActionGroup::new(ONLINE_STORAGE_PATH, credentials, http),
        }
    }
}

impl OnlineStorageService for OnlineStorageServiceImpl {
    fn online_storage_group(&self) -> &ActionGroup {
        &self.group
    }
}
