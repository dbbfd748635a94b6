use crate::error::AppError;
use crate::model::group::ActionGroup;
use crate::model::query::Params;
use crate::model::requests::FileUpload;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use tracing::debug;

/// Composition and sending of the current fax
///
/// The service keeps one fax job per session: call [`FaxJobService::create`]
/// first, then add files and recipients, and finally [`FaxJobService::send`].
#[async_trait]
pub trait FaxJobService: Send + Sync {
    /// Request context of the `/FaxJob` processor
    fn fax_job_group(&self) -> &ActionGroup;

    /// Starts a new fax copying the recipients of an existing one
    async fn add_another_fax(&self, fax_uuid: &str) -> Result<ApiResponse, AppError> {
        self.fax_job_group()
            .get("AddAnotherFax", Params::new().with("fax_uuid", fax_uuid))
            .await
    }

    /// Uploads a file to the current fax
    ///
    /// Sent as a multipart POST with the bytes in field `file` and the name
    /// in field `filename`; the name is also passed in the query.
    ///
    /// # Arguments
    /// * `upload` - File name and content
    /// * `origin` - Optional origin label, e.g. `scan` (max. 20 characters)
    async fn add_file(
        &self,
        upload: FileUpload,
        origin: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        debug!("Adding file '{}' to the current fax", upload.file_name);
        let params = Params::new()
            .with("filename", upload.file_name.as_str())
            .with("origin", origin);
        self.fax_job_group()
            .post_file("AddFile", params, upload)
            .await
    }

    /// Adds a file stored at an online storage provider
    async fn add_file_from_online_storage(
        &self,
        provider: &str,
        uuid: &str,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new().with("provider", provider).with("uuid", uuid);
        self.fax_job_group()
            .get("AddFileFromOnlineStorage", params)
            .await
    }

    /// Adds a recipient to the current fax
    ///
    /// # Arguments
    /// * `number` - Fax number in international format, e.g. `+4930123456`
    /// * `name` - Optional display name
    async fn add_recipient(&self, number: &str, name: Option<&str>) -> Result<ApiResponse, AppError> {
        let params = Params::new().with("number", number).with("name", name);
        self.fax_job_group().get("AddRecipient", params).await
    }

    /// Adds several recipients, `names` matched by position
    async fn add_recipients(
        &self,
        numbers: &[&str],
        names: Option<&[&str]>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new().with("numbers", numbers).with("names", names);
        self.fax_job_group().get("AddRecipients", params).await
    }

    /// Adds a file the service downloads from `url`
    async fn add_remote_file(&self, url: &str) -> Result<ApiResponse, AppError> {
        self.fax_job_group()
            .get("AddRemoteFile", Params::new().with("url", url))
            .await
    }

    /// Cancels a fax in progress
    async fn cancel(&self, uuid: &str, siblings_too: Option<bool>) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("uuid", uuid)
            .with("siblings_too", siblings_too);
        self.fax_job_group().get("Cancel", params).await
    }

    /// Starts a new fax as a copy of an existing one
    ///
    /// `user_ip` and `user_agent` default to the configured client identity.
    async fn clone_fax(
        &self,
        uuid: &str,
        user_ip: Option<&str>,
        user_agent: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        let identity = self.fax_job_group().http().identity();
        let params = Params::new()
            .with("uuid", uuid)
            .with("user_ip", user_ip.or(identity.user_ip.as_deref()))
            .with("user_agent", user_agent.unwrap_or(&identity.user_agent));
        self.fax_job_group().get("CloneFax", params).await
    }

    /// Creates a new fax job, discarding any fax in composition
    ///
    /// Arguments left `None` default to the configured client identity; the
    /// user IP is omitted when none is configured.
    async fn create(
        &self,
        user_ip: Option<&str>,
        user_agent: Option<&str>,
        origin: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        let identity = self.fax_job_group().http().identity();
        let params = Params::new()
            .with("user_ip", user_ip.or(identity.user_ip.as_deref()))
            .with("user_agent", user_agent.unwrap_or(&identity.user_agent))
            .with("origin", origin.unwrap_or(&identity.origin));
        self.fax_job_group().get("Create", params).await
    }

    /// Changes the schedule of a delayed fax
    async fn edit_delayed_fax(
        &self,
        fax_uuid: &str,
        send_at: Option<&str>,
        send_at_timezone: Option<&str>,
        datetime: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("fax_uuid", fax_uuid)
            .with("send_at", send_at)
            .with("send_at_timezone", send_at_timezone)
            .with("datetime", datetime);
        self.fax_job_group().get("EditDelayedFax", params).await
    }

    /// Returns the state of the current fax and its files
    async fn get_fax_state(&self) -> Result<ApiResponse, AppError> {
        self.fax_job_group().get("GetFaxState", Params::new()).await
    }

    /// Lists faxes currently being sent
    async fn faxes_in_progress(&self) -> Result<ApiResponse, AppError> {
        self.fax_job_group()
            .get("FaxesInProgress", Params::new())
            .await
    }

    /// Returns the preview pages of the current fax
    async fn get_preview(&self) -> Result<ApiResponse, AppError> {
        self.fax_job_group().get("GetPreview", Params::new()).await
    }

    /// Lists cover templates
    async fn list_available_covers(
        &self,
        defaults_if_empty: Option<bool>,
    ) -> Result<ApiResponse, AppError> {
        self.fax_job_group()
            .get(
                "ListAvailableCovers",
                Params::new().with("defaults_if_empty", defaults_if_empty),
            )
            .await
    }

    /// Lists the files attached to the current fax
    async fn list_fax_files(&self) -> Result<ApiResponse, AppError> {
        self.fax_job_group().get("ListFaxFiles", Params::new()).await
    }

    /// Lists the recipients of the current fax, one page at a time
    async fn list_recipients(
        &self,
        current_page: Option<u32>,
        items_per_page: Option<u32>,
    ) -> Result<ApiResponse, AppError> {
        self.fax_job_group()
            .get("ListRecipients", Params::page(current_page, items_per_page))
            .await
    }

    /// Removes every file from the current fax
    async fn remove_all_files(&self) -> Result<ApiResponse, AppError> {
        self.fax_job_group()
            .get("RemoveAllFiles", Params::new())
            .await
    }

    /// Removes every recipient from the current fax
    async fn remove_all_recipients(&self) -> Result<ApiResponse, AppError> {
        self.fax_job_group()
            .get("RemoveAllRecipients", Params::new())
            .await
    }

    /// Removes the cover page from the current fax
    async fn remove_cover(&self) -> Result<ApiResponse, AppError> {
        self.fax_job_group().get("RemoveCover", Params::new()).await
    }

    /// Removes one file, identified by its uuid
    async fn remove_file(&self, file_uuid: &str) -> Result<ApiResponse, AppError> {
        self.fax_job_group()
            .get("RemoveFile", Params::new().with("file_uuid", file_uuid))
            .await
    }

    /// Removes the recipient with the given fax number
    async fn remove_recipient(&self, number: &str) -> Result<ApiResponse, AppError> {
        self.fax_job_group()
            .get("RemoveRecipient", Params::new().with("number", number))
            .await
    }

    /// Clears the notification settings of the current fax
    async fn reset_notifications(&self) -> Result<ApiResponse, AppError> {
        self.fax_job_group()
            .get("ResetNotifications", Params::new())
            .await
    }

    /// Sends the current fax, now or at `send_at`
    async fn send(
        &self,
        send_at: Option<&str>,
        send_at_timezone: Option<&str>,
        datetime: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("send_at", send_at)
            .with("send_at_timezone", send_at_timezone)
            .with("datetime", datetime);
        self.fax_job_group().get("Send", params).await
    }

    /// Sends a delayed fax immediately
    async fn send_delayed_fax_now(&self, uuid: &str) -> Result<ApiResponse, AppError> {
        self.fax_job_group()
            .get("SendDelayedFaxNow", Params::new().with("uuid", uuid))
            .await
    }

    /// Puts the current fax in the outbox to be sent once credit is available
    async fn send_later(
        &self,
        send_at: Option<&str>,
        send_at_timezone: Option<&str>,
        datetime: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("send_at", send_at)
            .with("send_at_timezone", send_at_timezone)
            .with("datetime", datetime);
        self.fax_job_group().get("SendLater", params).await
    }

    /// Sends faxes left unpaid
    async fn send_unpaid_faxes(&self, uuids: &[&str]) -> Result<ApiResponse, AppError> {
        self.fax_job_group()
            .get("SendUnpaidFaxes", Params::new().with("uuids", uuids))
            .await
    }

    /// Sets the cover page template and its text
    async fn set_cover(&self, template_id: u32, text: Option<&str>) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("template_id", template_id)
            .with("text", text);
        self.fax_job_group().get("SetCover", params).await
    }

    /// Replaces all recipients of the current fax
    async fn set_recipients(
        &self,
        numbers: &[&str],
        names: Option<&[&str]>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new().with("numbers", numbers).with("names", names);
        self.fax_job_group().get("SetRecipients", params).await
    }

    /// Overrides the sender number and name of the current fax
    async fn set_sender_details(
        &self,
        number: Option<&str>,
        name: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new().with("number", number).with("name", name);
        self.fax_job_group().get("SetSenderDetails", params).await
    }
}
