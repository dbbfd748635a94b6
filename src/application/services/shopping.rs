use crate::application::interfaces::ShoppingService;
use crate::model::credentials::ApiCredentials;
use crate::model::group::ActionGroup;
use crate::model::http::HttpClient;
use std::sync::Arc;

/// Path of the `Shopping` processor
pub const SHOPPING_PATH: &str = "/Shopping";

/// Implementation of the `/Shopping` actions: credit, invoices and fax-in numbers
#[derive(Debug, Clone)]
pub struct ShoppingServiceImpl {
    group: ActionGroup,
}

impl ShoppingServiceImpl {
    /// Creates the service over a shared transport
    pub fn new(credentials: &ApiCredentials, http: Arc<HttpClient>) -> Self {
        Self {
            group: ActionGroup::new(SHOPPING_PATH, credentials, http),
        }
    }
}

impl ShoppingService for ShoppingServiceImpl {
    fn shopping_group(&self) -> &ActionGroup {
        &self.group
    }
}
