use crate::application::interfaces::NumberInfoService;
use crate::model::credentials::ApiCredentials;
use crate::model::group::ActionGroup;
use crate::model::http::HttpClient;
use std::sync::Arc;

/// Path of the `NumberInfo` processor
pub const NUMBER_INFO_PATH: &str = "/NumberInfo";

/// Implementation of the `/NumberInfo` actions: fax number lookups
#[derive(Debug, Clone)]
pub struct NumberInfoServiceImpl {
    group: ActionGroup,
}

impl NumberInfoServiceImpl {
    /// Creates the service over a shared transport
    pub fn new(credentials: &ApiCredentials, http: Arc<HttpClient>) -> Self {
        Self {
            group: ActionGroup::new(NUMBER_INFO_PATH, credentials, http),
        }
    }
}

impl NumberInfoService for NumberInfoServiceImpl {
    fn number_info_group(&self) -> &ActionGroup {
        &self.group
    }
}
