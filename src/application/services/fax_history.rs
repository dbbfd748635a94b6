use crate::application::interfaces::FaxHistoryService;
use crate::model::credentials::ApiCredentials;
use crate::model::group::ActionGroup;
use crate::model::http::HttpClient;
use std::sync::Arc;

/// Path of the `FaxHistory` processor
pub const FAX_HISTORY_PATH: &str = "/FaxHistory";

/// Implementation of the `/FaxHistory` actions: sent, received and deleted faxes
#[derive(Debug, Clone)]
pub struct FaxHistoryServiceImpl {
    group: ActionGroup,
}

impl FaxHistoryServiceImpl {
    /// Creates the service over a shared transport
    pub fn new(credentials: &ApiCredentials, http: Arc<HttpClient>) -> Self {
        Self {
            group: ActionGroup::new(FAX_HISTORY_PATH, credentials, http),
        }
    }
}

impl FaxHistoryService for FaxHistoryServiceImpl {
    fn fax_history_group(&self) -> &ActionGroup {
        &self.group
    }
}
