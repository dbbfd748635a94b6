use crate::error::AppError;
use crate::model::group::ActionGroup;
use crate::model::query::Params;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Information about fax numbers
#[async_trait]
pub trait NumberInfoService: Send + Sync {
    /// Request context of the `/NumberInfo` processor
    fn number_info_group(&self) -> &ActionGroup;

    /// Returns zone, country and type of a fax number
    async fn get_number_info(&self, faxnumber: &str) -> Result<ApiResponse, AppError> {
        self.number_info_group()
            .get("GetNumberInfo", Params::new().with("faxnumber", faxnumber))
            .await
    }

    /// Returns the price per page for a fax number
    async fn get_page_price(
        &self,
        faxnumber: &str,
        language_code: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("faxnumber", faxnumber)
            .with("language_code", language_code);
        self.number_info_group().get("GetPagePrice", params).await
    }
}
