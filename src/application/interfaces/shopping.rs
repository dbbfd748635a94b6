use crate::error::AppError;
use crate::model::group::ActionGroup;
use crate::model::query::Params;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Credit, invoices and fax-in numbers
#[async_trait]
pub trait ShoppingService: Send + Sync {
    /// Request context of the `/Shopping` processor
    fn shopping_group(&self) -> &ActionGroup;

    /// Adds credit to a sandbox account; refused outside the sandbox
    async fn add_credit_to_sandbox_user(
        &self,
        amount: f64,
        reason: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new().with("amount", amount).with("reason", reason);
        self.shopping_group()
            .get("AddCreditToSandboxUser", params)
            .await
    }

    /// Returns the invoice of a payment, a PDF
    async fn get_invoice(
        &self,
        payment_uuid: &str,
        hidecopy: Option<bool>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("payment_uuid", payment_uuid)
            .with("hidecopy", hidecopy);
        self.shopping_group().get("GetInvoice", params).await
    }

    /// Returns the fax-in number closest to an IP address
    async fn get_nearest_fax_in_number(&self, ip_address: &str) -> Result<ApiResponse, AppError> {
        self.shopping_group()
            .get(
                "GetNearestFaxInNumber",
                Params::new().with("ip_address", ip_address),
            )
            .await
    }

    /// Returns a link into the web shop
    async fn get_shop_link(
        &self,
        kind: Option<&str>,
        product: Option<&str>,
        pay: Option<bool>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("type", kind)
            .with("product", product)
            .with("pay", pay);
        self.shopping_group().get("GetShopLink", params).await
    }

    /// Lists the items available in the shop
    async fn list_available_items(&self) -> Result<ApiResponse, AppError> {
        self.shopping_group()
            .get("ListAvailableItems", Params::new())
            .await
    }

    /// Lists area codes with fax-in numbers available
    async fn list_fax_in_areacodes(
        &self,
        country_code: &str,
        state: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("country_code", country_code)
            .with("state", state);
        self.shopping_group().get("ListFaxInAreacodes", params).await
    }

    /// Lists countries offering fax-in numbers
    async fn list_fax_in_countries(&self) -> Result<ApiResponse, AppError> {
        self.shopping_group()
            .get("ListFaxInCountries", Params::new())
            .await
    }

    /// Redeems a credit voucher for the current user
    async fn redeem_credit_voucher(&self, vouchercode: &str) -> Result<ApiResponse, AppError> {
        self.shopping_group()
            .get(
                "RedeemCreditVoucher",
                Params::new().with("vouchercode", vouchercode),
            )
            .await
    }
}
