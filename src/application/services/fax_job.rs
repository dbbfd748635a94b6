use crate::application::interfaces::FaxJobService;
use crate::model::credentials::ApiCredentials;
use crate::model::group::ActionGroup;
use crate::model::http::HttpClient;
use std::sync::Arc;

/// Path of the `FaxJob` processor
pub const FAX_JOB_PATH: &str = "/FaxJob";

/// Implementation of the `/FaxJob` actions: composing and sending the current fax
#[derive(Debug, Clone)]
pub struct FaxJobServiceImpl {
    group: ActionGroup,
}

impl FaxJobServiceImpl {
    /// Creates the service over a shared transport
    pub fn new(credentials: &ApiCredentials, http: Arc<HttpClient>) -> Self {
        Self {
            group: ActionGroup::new(FAX_JOB_PATH, credentials, http),
        }
    }
}

impl FaxJobService for FaxJobServiceImpl {
    fn fax_job_group(&self) -> &ActionGroup {
        &self.group
    }
}
