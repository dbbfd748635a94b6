use crate::application::interfaces::UserInfoService;
use crate::model::credentials::ApiCredentials;
use crate::model::group::ActionGroup;
use crate::model::http::HttpClient;
use std::sync::Arc;

/// Path of the `UserInfo` processor
pub const USER_INFO_PATH: &str = "/UserInfo";

/// Implementation of the `/UserInfo` actions: the current user's account
#[derive(Debug, Clone)]
pub struct UserInfoServiceImpl {
    group: ActionGroup,
}

impl UserInfoServiceImpl {
    /// Creates the service over a shared transport
    pub fn new(credentials: &ApiCredentials, http: Arc<HttpClient>) -> Self {
        Self {
            group: ActionGroup::new(USER_INFO_PATH, credentials, http),
        }
    }
}

impl UserInfoService for UserInfoServiceImpl {
    fn user_info_group(&self) -> &ActionGroup {
        &self.group
    }
}
