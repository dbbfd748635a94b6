use crate::error::AppError;
use crate::model::group::ActionGroup;
use crate::model::query::Params;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Session handling: login, logout and change notifications
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Request context of the `/Session` processor
    fn session_group(&self) -> &ActionGroup;

    /// Creates a one-time identifier that logs the user into the web portal
    async fn create_login_identifier(
        &self,
        user_ip: Option<&str>,
        timetolifeminutes: Option<u32>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("user_ip", user_ip)
            .with("timetolifeminutes", timetolifeminutes);
        self.session_group()
            .get("CreateLoginIdentifier", params)
            .await
    }

    /// Lists changes notified to the registered listeners
    async fn list_changes(&self) -> Result<ApiResponse, AppError> {
        self.session_group().get("ListChanges", Params::new()).await
    }

    /// Terminates the session of the user token
    async fn logout(&self) -> Result<ApiResponse, AppError> {
        self.session_group().get("Logout", Params::new()).await
    }

    /// Keeps the session alive
    async fn ping(&self) -> Result<ApiResponse, AppError> {
        self.session_group().get("Ping", Params::new()).await
    }

    /// Registers for change notifications, e.g. `faxsending` or `faxsent`
    async fn register_listener(
        &self,
        listener_types: &[&str],
        append: Option<bool>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("listener_types", listener_types)
            .with("append", append);
        self.session_group().get("RegisterListener", params).await
    }

    /// Reloads the user profile from the database
    async fn reload_user(&self) -> Result<ApiResponse, AppError> {
        self.session_group().get("ReloadUser", Params::new()).await
    }

    /// Verifies the credentials of a user and returns a user token on success
    async fn verify_user(&self, username: &str, password: &str) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("username", username)
            .with("password", password);
        self.session_group().get("VerifyUser", params).await
    }
}
