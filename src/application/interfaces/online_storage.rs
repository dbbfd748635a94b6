use crate::error::AppError;
use crate::model::group::ActionGroup;
use crate::model::query::{Params, QueryValue};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Access to online storage providers such as Dropbox or Google Docs
#[async_trait]
pub trait OnlineStorageService: Send + Sync {
    /// Request context of the `/OnlineStorage` processor
    fn online_storage_group(&self) -> &ActionGroup;

    /// Checks whether the user is authenticated at a provider
    async fn check_provider_state(&self, provider: &str) -> Result<ApiResponse, AppError> {
        self.online_storage_group()
            .get("CheckProviderState", Params::new().with("provider", provider))
            .await
    }

    /// Forgets the stored authentication for a provider
    async fn drop_authentication(&self, provider: &str) -> Result<ApiResponse, AppError> {
        self.online_storage_group()
            .get("DropAuthentication", Params::new().with("provider", provider))
            .await
    }

    /// Returns the logo of a provider, a binary image
    async fn get_provider_logo(&self, provider: &str, size: u32) -> Result<ApiResponse, AppError> {
        let params = Params::new().with("provider", provider).with("size", size);
        self.online_storage_group()
            .get("GetProviderLogo", params)
            .await
    }

    /// Lists the files of a folder at a provider
    async fn list_folder_contents(
        &self,
        provider: &str,
        folder: Option<&str>,
        clear_cache: Option<bool>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("provider", provider)
            .with("folder", folder)
            .with("clear_cache", clear_cache);
        self.online_storage_group()
            .get("ListFolderContents", params)
            .await
    }

    /// Lists the supported online storage providers
    async fn list_providers(&self, attach_settings: Option<bool>) -> Result<ApiResponse, AppError> {
        self.online_storage_group()
            .get(
                "ListProviders",
                Params::new().with("attach_settings", attach_settings),
            )
            .await
    }

    /// Stores provider tokens for the current user
    ///
    /// `token` is sent as `token[name]=value` entries.
    async fn set_auth_token(
        &self,
        provider: &str,
        token: &[(&str, &str)],
        username: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("provider", provider)
            .with("token", QueryValue::map(token))
            .with("username", username);
        self.online_storage_group().get("SetAuthToken", params).await
    }
}
