use crate::error::AppError;
use crate::model::group::ActionGroup;
use crate::model::query::Params;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Sent, received and deleted faxes of the current user
#[async_trait]
pub trait FaxHistoryService: Send + Sync {
    /// Request context of the `/FaxHistory` processor
    fn fax_history_group(&self) -> &ActionGroup;

    /// Adds a note to a fax
    async fn add_fax_note(&self, fax_uuid: &str, note: &str) -> Result<ApiResponse, AppError> {
        let params = Params::new().with("fax_uuid", fax_uuid).with("note", note);
        self.fax_history_group().get("AddFaxNote", params).await
    }

    /// Counts faxes of a kind, e.g. `inbox`, `outbox`, `sent` or `trash`
    async fn count_faxes(&self, kind: &str) -> Result<ApiResponse, AppError> {
        self.fax_history_group()
            .get("CountFaxes", Params::new().with("type", kind))
            .await
    }

    /// Moves faxes to the trash
    async fn delete_faxes(
        &self,
        uuids: &[&str],
        siblings_too: Option<bool>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("uuids", uuids)
            .with("siblings_too", siblings_too);
        self.fax_history_group().get("DeleteFaxes", params).await
    }

    /// Deletes the faxes of a kind between two dates
    async fn delete_faxes_for_period(
        &self,
        kind: &str,
        date1: &str,
        date2: &str,
        no_trash: Option<bool>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("type", kind)
            .with("date1", date1)
            .with("date2", date2)
            .with("no_trash", no_trash);
        self.fax_history_group()
            .get("DeleteFaxesForPeriod", params)
            .await
    }

    /// Deletes faxes from the trash for good
    async fn delete_faxes_from_trash(&self, uuids: &[&str]) -> Result<ApiResponse, AppError> {
        self.fax_history_group()
            .get("DeleteFaxesFromTrash", Params::new().with("uuids", uuids))
            .await
    }

    /// Removes a number from the recent recipients
    async fn delete_from_list_recent_recipients(
        &self,
        number: &str,
    ) -> Result<ApiResponse, AppError> {
        self.fax_history_group()
            .get(
                "DeleteFromListRecentRecipients",
                Params::new().with("number", number),
            )
            .await
    }

    /// Empties the trash
    async fn empty_trash(&self) -> Result<ApiResponse, AppError> {
        self.fax_history_group()
            .get("EmptyTrash", Params::new())
            .await
    }

    /// Gets the details of one fax
    async fn get_fax_details(&self, uuid: &str) -> Result<ApiResponse, AppError> {
        self.fax_history_group()
            .get("GetFaxDetails", Params::new().with("uuid", uuid))
            .await
    }

    /// Gets the group a fax belongs to
    async fn get_fax_group(&self, uuid: &str) -> Result<ApiResponse, AppError> {
        self.fax_history_group()
            .get("GetFaxGroup", Params::new().with("uuid", uuid))
            .await
    }

    /// Returns a received fax, optionally marking it as read
    async fn get_inbox_fax(
        &self,
        uuid: &str,
        mark_read: Option<bool>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new().with("uuid", uuid).with("mark_read", mark_read);
        self.fax_history_group().get("GetInboxFax", params).await
    }

    /// Gets the published version of a fax
    async fn get_published_fax(&self, uuid: &str) -> Result<ApiResponse, AppError> {
        self.fax_history_group()
            .get("GetPublishedFax", Params::new().with("uuid", uuid))
            .await
    }

    /// Returns the transmission report of a sent fax, usually a PDF
    async fn get_transmission_report(&self, uuid: &str) -> Result<ApiResponse, AppError> {
        self.fax_history_group()
            .get("GetTransmissionReport", Params::new().with("uuid", uuid))
            .await
    }

    /// Lists the faxes of a group, paginated
    async fn list_fax_group(
        &self,
        uuid: &str,
        current_page: Option<u32>,
        items_per_page: Option<u32>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("uuid", uuid)
            .with("current_page", current_page)
            .with("items_per_page", items_per_page);
        self.fax_history_group().get("ListFaxGroup", params).await
    }

    /// Lists the notes of one fax
    async fn list_fax_notes(&self, fax_uuid: &str) -> Result<ApiResponse, AppError> {
        self.fax_history_group()
            .get("ListFaxNotes", Params::new().with("fax_uuid", fax_uuid))
            .await
    }

    /// Lists the inbox faxes
    async fn list_inbox_fax(&self) -> Result<ApiResponse, AppError> {
        self.fax_history_group()
            .get("ListInboxFax", Params::new())
            .await
    }

    /// Lists received faxes, one page at a time
    async fn list_inbox_faxes(
        &self,
        current_page: Option<u32>,
        items_per_page: Option<u32>,
    ) -> Result<ApiResponse, AppError> {
        self.fax_history_group()
            .get("ListInboxFaxes", Params::page(current_page, items_per_page))
            .await
    }

    /// Lists faxes waiting to be sent, one page at a time
    async fn list_outbox_faxes(
        &self,
        current_page: Option<u32>,
        items_per_page: Option<u32>,
    ) -> Result<ApiResponse, AppError> {
        self.fax_history_group()
            .get("ListOutboxFaxes", Params::page(current_page, items_per_page))
            .await
    }

    /// Lists the most recent faxes, restricted to the `data_to_list` fields when given
    async fn list_recent_faxes(
        &self,
        count: Option<u32>,
        data_to_list: Option<&[&str]>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("count", count)
            .with("data_to_list", data_to_list);
        self.fax_history_group()
            .get("ListRecentFaxes", params)
            .await
    }

    /// Lists recently used recipients
    async fn list_recent_recipients(&self) -> Result<ApiResponse, AppError> {
        self.fax_history_group()
            .get("ListRecentRecipients", Params::new())
            .await
    }

    /// Lists sent faxes, one page at a time
    async fn list_sent_faxes(
        &self,
        current_page: Option<u32>,
        items_per_page: Option<u32>,
        array_for_api: Option<bool>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::page(current_page, items_per_page).with("array_for_api", array_for_api);
        self.fax_history_group().get("ListSentFaxes", params).await
    }

    /// Lists deleted faxes, one page at a time
    async fn list_trash(
        &self,
        current_page: Option<u32>,
        items_per_page: Option<u32>,
    ) -> Result<ApiResponse, AppError> {
        self.fax_history_group()
            .get("ListTrash", Params::page(current_page, items_per_page))
            .await
    }

    /// Lists faxes that could not be sent for lack of credit
    async fn list_unpaid_faxes(
        &self,
        current_page: Option<u32>,
        items_per_page: Option<u32>,
    ) -> Result<ApiResponse, AppError> {
        self.fax_history_group()
            .get("ListUnpaidFaxes", Params::page(current_page, items_per_page))
            .await
    }

    /// Makes a fax reachable through a public link
    async fn publish_fax(&self, uuid: &str) -> Result<ApiResponse, AppError> {
        self.fax_history_group()
            .get("PublishFax", Params::new().with("uuid", uuid))
            .await
    }

    /// Moves a fax back from the trash
    async fn restore_fax(&self, uuid: &str) -> Result<ApiResponse, AppError> {
        self.fax_history_group()
            .get("RestoreFax", Params::new().with("uuid", uuid))
            .await
    }

    /// Marks one fax as read
    async fn set_fax_read(&self, uuid: &str) -> Result<ApiResponse, AppError> {
        self.fax_history_group()
            .get("SetFaxRead", Params::new().with("uuid", uuid))
            .await
    }

    /// Marks several faxes as read
    async fn set_faxes_as_read(&self, uuids: &[&str]) -> Result<ApiResponse, AppError> {
        self.fax_history_group()
            .get("SetFaxesAsRead", Params::new().with("uuids", uuids))
            .await
    }

    /// Flags faxes as spam, or clears the flag when `is_spam` is not set
    async fn set_spam_state_for_faxes(
        &self,
        uuids: &[&str],
        is_spam: Option<bool>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new().with("uuids", uuids).with("is_spam", is_spam);
        self.fax_history_group()
            .get("SetSpamStateForFaxes", params)
            .await
    }

    /// Revokes the public link of a fax
    async fn unpublish_fax(&self, uuid: &str) -> Result<ApiResponse, AppError> {
        self.fax_history_group()
            .get("UnPublishFax", Params::new().with("uuid", uuid))
            .await
    }
}

