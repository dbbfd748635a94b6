use crate::error::AppError;
use crate::model::group::ActionGroup;
use crate::model::query::{Params, QueryValue};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Account and profile of the current user
#[async_trait]
pub trait UserInfoService: Send + Sync {
    /// Request context of the `/UserInfo` processor
    fn user_info_group(&self) -> &ActionGroup;

    /// Creates a new user
    ///
    /// # Arguments
    /// * `name` - Full name
    /// * `username` - Login name, see [`UserInfoService::validate_new_username`]
    /// * `password` - Initial password
    /// * `email` - Contact address
    /// * `culture` - Culture code, e.g. `en-US`
    /// * `externalprofile` - External profile entries, sent as `externalprofile[key]`
    /// * `campaign_id` - Optional marketing campaign
    #[allow(clippy::too_many_arguments)]
    async fn create_user(
        &self,
        name: &str,
        username: &str,
        password: &str,
        email: &str,
        culture: &str,
        externalprofile: Option<&[(&str, &str)]>,
        campaign_id: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("name", name)
            .with("username", username)
            .with("password", password)
            .with("email", email)
            .with("culture", culture)
            .with("externalprofile", externalprofile.map(QueryValue::map))
            .with("campaign_id", campaign_id);
        self.user_info_group().get("CreateUser", params).await
    }

    /// Deletes the current user
    async fn delete_user(&self) -> Result<ApiResponse, AppError> {
        self.user_info_group().get("DeleteUser", Params::new()).await
    }

    /// Gets the culture settings of the current user
    async fn get_culture_info(&self) -> Result<ApiResponse, AppError> {
        self.user_info_group()
            .get("GetCultureInfo", Params::new())
            .await
    }

    /// Whether the user has a subscription plan
    async fn has_plan(&self) -> Result<ApiResponse, AppError> {
        self.user_info_group().get("HasPlan", Params::new()).await
    }

    /// Lists expiring items such as credit or fax-in numbers
    async fn list_expirations(&self, kind: Option<&str>) -> Result<ApiResponse, AppError> {
        self.user_info_group()
            .get("ListExpirations", Params::new().with("type", kind))
            .await
    }

    /// Lists the inboxes of the current user
    async fn list_inboxes(
        &self,
        expired_too: Option<bool>,
        shared_too: Option<bool>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("expired_too", expired_too)
            .with("shared_too", shared_too);
        self.user_info_group().get("ListInboxes", params).await
    }

    /// Lists the orders of the current user, one page at a time
    async fn list_orders(
        &self,
        current_page: Option<u32>,
        items_per_page: Option<u32>,
    ) -> Result<ApiResponse, AppError> {
        self.user_info_group()
            .get("ListOrders", Params::page(current_page, items_per_page))
            .await
    }

    /// Lists the profiles of the current user
    async fn list_profiles(&self) -> Result<ApiResponse, AppError> {
        self.user_info_group()
            .get("ListProfiles", Params::new())
            .await
    }

    /// Lists the user agents the user logged in with
    async fn list_user_agents(&self, max: Option<u32>) -> Result<ApiResponse, AppError> {
        self.user_info_group()
            .get("ListUserAgents", Params::new().with("max", max))
            .await
    }

    /// Lists the wall messages of the current user
    async fn list_wall_messages(
        &self,
        count: Option<u32>,
        data_to_list: Option<&[&str]>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("count", count)
            .with("data_to_list", data_to_list);
        self.user_info_group().get("ListWallMessages", params).await
    }

    /// Sends a message to the user, by email unless `kind` says otherwise
    async fn send_message(
        &self,
        body: &str,
        kind: Option<&str>,
        recipient: Option<&str>,
        subject: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("body", body)
            .with("type", kind)
            .with("recipient", recipient)
            .with("subject", subject);
        self.user_info_group().get("SendMessage", params).await
    }

    /// Sends a password reset message to the given user
    async fn send_password_reset_message(
        &self,
        username: &str,
        user_ip: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("username", username)
            .with("user_ip", user_ip);
        self.user_info_group()
            .get("SendPasswordResetMessage", params)
            .await
    }

    /// Stores settings for an online storage provider, sent as `settings[key]`
    async fn set_online_storage_settings(
        &self,
        provider: &str,
        settings: &[(&str, &str)],
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("provider", provider)
            .with("settings", QueryValue::map(settings));
        self.user_info_group()
            .get("SetOnlineStorageSettings", params)
            .await
    }

    /// Changes the password of the current user
    ///
    /// `hash_function` names the hash already applied to `password`, if any.
    async fn set_password(
        &self,
        password: &str,
        hash_function: Option<&str>,
        old_password: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("password", password)
            .with("hashFunction", hash_function)
            .with("old_password", old_password);
        self.user_info_group().get("SetPassword", params).await
    }

    /// Updates properties of a profile, sent as `properties[key]`
    async fn set_profile_properties(
        &self,
        profile: &str,
        properties: &[(&str, &str)],
        ignoreerrors: Option<bool>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("profile", profile)
            .with("properties", QueryValue::map(properties))
            .with("ignoreerrors", ignoreerrors);
        self.user_info_group()
            .get("SetProfileProperties", params)
            .await
    }

    /// Checks whether a username is free and acceptable
    async fn validate_new_username(
        &self,
        username: &str,
        dictionary: Option<bool>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("username", username)
            .with("dictionary", dictionary);
        self.user_info_group()
            .get("ValidateNewUsername", params)
            .await
    }
}
