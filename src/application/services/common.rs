use crate::application::interfaces::CommonService;
use crate::model::credentials::ApiCredentials;
use crate::model::group::ActionGroup;
use crate::model::http::HttpClient;
use std::sync::Arc;

/// Path of the `Common` processor
pub const COMMON_PATH: &str = "/Common";

/// Implementation of the `/Common` actions: global information such as countries, prices and translations
#[derive(Debug, Clone)]
pub struct CommonServiceImpl {
    group: ActionGroup,
}

impl CommonServiceImpl {
    /// Creates the service over a shared transport
    pub fn new(credentials: &ApiCredentials, http: Arc<HttpClient>) -> Self {
        Self {
            group: ActionGroup::new(COMMON_PATH, credentials, http),
        }
    }
}

impl CommonService for CommonServiceImpl {
    fn common_group(&self) -> &ActionGroup {
        &self.group
    }
}
